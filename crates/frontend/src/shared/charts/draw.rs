//! Dual-axis line chart drawing, shared by every [`PlotSurface`] backend.

use super::layout::ChartLayout;
use super::scale::{LinearScale, ValueAxis};
use super::surface::{PlotSurface, Stroke, TextAnchor, TextStyle};
use crate::shared::number_format::format_tick;
use contracts::dashboards::d410_weekly_metrics::{DualAxisChart, Series};

pub const LEFT_SERIES_COLOR: &str = "#8884d8";
pub const RIGHT_SERIES_COLOR: &str = "#82ca9d";
pub const WEEK_AXIS_TITLE: &str = "Semaine";

const AXIS: Stroke = Stroke::solid("#666666", 1.0);
const GRID: Stroke = Stroke::dashed("#cccccc", 1.0, (3.0, 3.0));
const TICK_LABEL: TextStyle = TextStyle::new("#666666", 11.0, TextAnchor::Middle);
const AXIS_TITLE: TextStyle = TextStyle::new("#333333", 12.0, TextAnchor::Middle);
const LEGEND_LABEL: TextStyle = TextStyle::new("#333333", 12.0, TextAnchor::Start);
const TICK_LENGTH: f64 = 5.0;
const VALUE_TICKS: usize = 5;
const WEEK_LABEL_GAP: f64 = 28.0;
const DOT_RADIUS: f64 = 3.0;

/// Draw the whole chart: grid, week axis, left (Y1) and right (Y2) axes,
/// both series and the legend.
pub fn draw_dual_axis_chart<S: PlotSurface + ?Sized>(
    surface: &mut S,
    chart: &DualAxisChart,
    layout: &ChartLayout,
) {
    surface.begin_frame(layout.width, layout.height);

    let x_scale = layout.week_scale(chart.week_extent());
    let left_axis = ValueAxis::new(chart.left.extent(), layout.y_range(), VALUE_TICKS);
    let right_axis = ValueAxis::new(chart.right.extent(), layout.y_range(), VALUE_TICKS);

    draw_grid(surface, chart, layout, &x_scale, &left_axis);
    draw_week_axis(surface, chart, layout, &x_scale);
    draw_value_axis(surface, layout, &left_axis, &chart.left, AxisSide::Left);
    draw_value_axis(surface, layout, &right_axis, &chart.right, AxisSide::Right);

    if !chart.is_empty() {
        let xs: Vec<f64> = chart.weeks.iter().map(|w| x_scale.map(*w as f64)).collect();
        draw_series(surface, &chart.left, &xs, &left_axis.scale, LEFT_SERIES_COLOR);
        draw_series(surface, &chart.right, &xs, &right_axis.scale, RIGHT_SERIES_COLOR);
    }

    draw_legend(surface, chart, layout);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisSide {
    Left,
    Right,
}

fn draw_grid<S: PlotSurface + ?Sized>(
    surface: &mut S,
    chart: &DualAxisChart,
    layout: &ChartLayout,
    x_scale: &LinearScale,
    y_axis: &ValueAxis,
) {
    for tick in &y_axis.ticks {
        let y = y_axis.scale.map(*tick);
        surface.line((layout.plot_left(), y), (layout.plot_right(), y), &GRID);
    }
    for week in labelled_weeks(chart, layout) {
        let x = x_scale.map(week as f64);
        surface.line((x, layout.plot_top()), (x, layout.plot_bottom()), &GRID);
    }
}

fn draw_week_axis<S: PlotSurface + ?Sized>(
    surface: &mut S,
    chart: &DualAxisChart,
    layout: &ChartLayout,
    x_scale: &LinearScale,
) {
    let bottom = layout.plot_bottom();
    surface.line((layout.plot_left(), bottom), (layout.plot_right(), bottom), &AXIS);

    for week in labelled_weeks(chart, layout) {
        let x = x_scale.map(week as f64);
        surface.line((x, bottom), (x, bottom + TICK_LENGTH), &AXIS);
        surface.text((x, bottom + 16.0), &week.to_string(), &TICK_LABEL);
    }

    let center = (layout.plot_left() + layout.plot_right()) / 2.0;
    surface.text((center, bottom + 34.0), WEEK_AXIS_TITLE, &AXIS_TITLE);
}

fn draw_value_axis<S: PlotSurface + ?Sized>(
    surface: &mut S,
    layout: &ChartLayout,
    axis: &ValueAxis,
    series: &Series,
    side: AxisSide,
) {
    let (x, direction, anchor, title_x, rotation) = match side {
        AxisSide::Left => (layout.plot_left(), -1.0, TextAnchor::End, 16.0, -90.0),
        AxisSide::Right => (
            layout.plot_right(),
            1.0,
            TextAnchor::Start,
            layout.width - 16.0,
            90.0,
        ),
    };

    surface.line((x, layout.plot_top()), (x, layout.plot_bottom()), &AXIS);

    let label_style = TextStyle {
        anchor,
        ..TICK_LABEL
    };
    for tick in &axis.ticks {
        let y = axis.scale.map(*tick);
        surface.line((x, y), (x + direction * TICK_LENGTH, y), &AXIS);
        surface.text(
            (x + direction * (TICK_LENGTH + 3.0), y),
            &format_tick(*tick, axis.step),
            &label_style,
        );
    }

    let middle = (layout.plot_top() + layout.plot_bottom()) / 2.0;
    surface.text((title_x, middle), &series.label, &AXIS_TITLE.rotated(rotation));
}

fn draw_series<S: PlotSurface + ?Sized>(
    surface: &mut S,
    series: &Series,
    xs: &[f64],
    y_scale: &LinearScale,
    color: &'static str,
) {
    let stroke = Stroke::solid(color, 2.0);
    for segment in series_segments(series, xs, y_scale) {
        if segment.len() > 1 {
            surface.polyline(&segment, &stroke);
        }
        for point in &segment {
            surface.circle(*point, DOT_RADIUS, "#ffffff", &stroke);
        }
    }
}

fn draw_legend<S: PlotSurface + ?Sized>(surface: &mut S, chart: &DualAxisChart, layout: &ChartLayout) {
    let y = layout.height - 12.0;
    let center = layout.width / 2.0;
    let left_width = 30.0 + chart.left.label.chars().count() as f64 * 7.0;

    for (label, color, x) in [
        (&chart.left.label, LEFT_SERIES_COLOR, center - left_width - 10.0),
        (&chart.right.label, RIGHT_SERIES_COLOR, center + 10.0),
    ] {
        let stroke = Stroke::solid(color, 2.0);
        surface.line((x, y), (x + 16.0, y), &stroke);
        surface.circle((x + 8.0, y), DOT_RADIUS, "#ffffff", &stroke);
        surface.text((x + 22.0, y), label, &LEGEND_LABEL);
    }
}

/// Weeks that get a tick label, thinned out so labels never overlap
fn labelled_weeks(chart: &DualAxisChart, layout: &ChartLayout) -> Vec<u32> {
    let stride = layout.week_label_stride(chart.weeks.len(), WEEK_LABEL_GAP);
    chart.weeks.iter().copied().step_by(stride).collect()
}

/// Pixel points of a series, split into separate runs wherever a value is missing
pub fn series_segments(series: &Series, xs: &[f64], y_scale: &LinearScale) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (x, value) in xs.iter().zip(&series.values) {
        match value {
            Some(v) => current.push((*x, y_scale.map(*v))),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d410_weekly_metrics::Metric;

    fn series(values: Vec<Option<f64>>) -> Series {
        Series {
            metric: Metric::Ca,
            label: Metric::Ca.label().to_string(),
            values,
        }
    }

    #[test]
    fn test_segments_split_on_gaps() {
        let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0));
        let s = series(vec![Some(0.0), Some(10.0), None, Some(5.0), None, None]);
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

        let segments = series_segments(&s, &xs, &scale);
        assert_eq!(
            segments,
            vec![vec![(0.0, 100.0), (1.0, 0.0)], vec![(3.0, 50.0)]]
        );
    }

    #[test]
    fn test_segments_all_missing() {
        let scale = LinearScale::new((0.0, 1.0), (1.0, 0.0));
        let s = series(vec![None, None]);
        assert!(series_segments(&s, &[0.0, 1.0], &scale).is_empty());
    }
}
