use super::canvas::CanvasChart;
use super::draw::{LEFT_SERIES_COLOR, RIGHT_SERIES_COLOR, WEEK_AXIS_TITLE};
use super::layout::ChartLayout;
use super::svg::SvgChart;
use crate::shared::number_format::format_value;
use contracts::dashboards::d410_weekly_metrics::DualAxisChart;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Renderer adapter hosted by a [`ChartPane`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartBackend {
    Svg,
    Canvas,
}

impl ChartBackend {
    pub fn title(&self) -> &'static str {
        match self {
            ChartBackend::Svg => "SVG",
            ChartBackend::Canvas => "Canvas 2D",
        }
    }
}

/// Values shown in the hover tooltip for one week
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipData {
    pub week: u32,
    pub x: f64,
    pub rows: [(String, &'static str, String); 2],
}

impl TooltipData {
    pub fn at(chart: &DualAxisChart, layout: &ChartLayout, index: usize) -> Option<Self> {
        let week = *chart.weeks.get(index)?;
        let x = layout
            .week_scale(chart.week_extent())
            .map(week as f64);
        let left = chart.left.values.get(index).copied().flatten();
        let right = chart.right.values.get(index).copied().flatten();
        Some(Self {
            week,
            x,
            rows: [
                (chart.left.label.clone(), LEFT_SERIES_COLOR, format_value(left)),
                (chart.right.label.clone(), RIGHT_SERIES_COLOR, format_value(right)),
            ],
        })
    }
}

/// Card with one chart backend and a shared hover tooltip
#[component]
pub fn ChartPane(
    backend: ChartBackend,
    #[prop(into)] chart: Signal<DualAxisChart>,
    #[prop(optional)] layout: ChartLayout,
) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);

    let on_mouse_move = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let x = ev.client_x() as f64 - target.get_bounding_client_rect().left();
        let index = chart.with(|c| layout.nearest_week_index(x, &c.weeks));
        if hovered.get_untracked() != index {
            hovered.set(index);
        }
    };

    let tooltip = Memo::new(move |_| {
        let index = hovered.get()?;
        chart.with(|c| TooltipData::at(c, &layout, index))
    });

    view! {
        <div class="d410-chart">
            <Card>
                <div class="d410-chart__title">{backend.title()}</div>
                <div
                    class="d410-chart__body"
                    style=format!(
                        "position: relative; width: {}px; height: {}px;",
                        layout.width,
                        layout.height,
                    )
                    on:mousemove=on_mouse_move
                    on:mouseleave=move |_| hovered.set(None)
                >
                    {match backend {
                        ChartBackend::Svg => view! { <SvgChart chart=chart layout=layout /> }.into_any(),
                        ChartBackend::Canvas => view! { <CanvasChart chart=chart layout=layout /> }.into_any(),
                    }}

                    {move || tooltip.get().map(|tip| {
                        let left = if tip.x > layout.width / 2.0 { tip.x - 150.0 } else { tip.x + 12.0 };
                        view! {
                            <div
                                class="d410-chart__tooltip"
                                style=format!(
                                    "position: absolute; top: {}px; left: {}px; pointer-events: none; background: #fff; border: 1px solid #ccc; padding: 6px 10px; font-size: 12px; white-space: nowrap;",
                                    layout.margin.top,
                                    left,
                                )
                            >
                                <div style="font-weight: 600;">{format!("{} {}", WEEK_AXIS_TITLE, tip.week)}</div>
                                {tip.rows.into_iter().map(|(label, color, value)| view! {
                                    <div style=format!("color: {color};")>{format!("{label} : {value}")}</div>
                                }).collect_view()}
                            </div>
                        }
                    })}
                </div>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d410_weekly_metrics::{Metric, WeeklyPoint};

    #[test]
    fn test_tooltip_reads_both_series() {
        let points: Vec<WeeklyPoint> = (10..=12)
            .map(|week| WeeklyPoint {
                week,
                sold: None,
                ca: Some(week as f64 * 10.0),
                shrinkage: None,
                gross_margin: None,
                net_margin: None,
                stock: Some(7.0),
                flow: None,
            })
            .collect();
        let chart = DualAxisChart::build(&points, Metric::Ca, Metric::Sold);
        let layout = ChartLayout::default();

        let tip = TooltipData::at(&chart, &layout, 1).unwrap();
        assert_eq!(tip.week, 11);
        assert_eq!(tip.x, 280.0);
        assert_eq!(tip.rows[0].0, "CA (€)");
        assert_eq!(tip.rows[0].2, "110");
        assert_eq!(tip.rows[1].0, "Vendus");
        assert_eq!(tip.rows[1].2, "—");

        assert_eq!(TooltipData::at(&chart, &layout, 3), None);
    }

    #[test]
    fn test_backend_titles() {
        assert_eq!(ChartBackend::Svg.title(), "SVG");
        assert_eq!(ChartBackend::Canvas.title(), "Canvas 2D");
    }
}
