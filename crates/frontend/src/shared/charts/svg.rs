use super::draw::draw_dual_axis_chart;
use super::layout::ChartLayout;
use super::surface::{PlotSurface, Stroke, TextAnchor, TextStyle};
use contracts::dashboards::d410_weekly_metrics::DualAxisChart;
use leptos::prelude::*;

/// One recorded SVG primitive
#[derive(Debug, Clone, PartialEq)]
pub enum SvgElement {
    Line {
        from: (f64, f64),
        to: (f64, f64),
        stroke: Stroke,
    },
    Polyline {
        points: String,
        stroke: Stroke,
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        fill: &'static str,
        stroke: Stroke,
    },
    Text {
        position: (f64, f64),
        text: String,
        style: TextStyle,
    },
}

/// Records drawing commands as SVG elements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgSurface {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<SvgElement>,
}

impl PlotSurface for SvgSurface {
    fn begin_frame(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.elements.clear();
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &Stroke) {
        self.elements.push(SvgElement::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn polyline(&mut self, points: &[(f64, f64)], stroke: &Stroke) {
        let points = points
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ");
        self.elements.push(SvgElement::Polyline {
            points,
            stroke: *stroke,
        });
    }

    fn circle(&mut self, center: (f64, f64), radius: f64, fill: &'static str, stroke: &Stroke) {
        self.elements.push(SvgElement::Circle {
            center,
            radius,
            fill,
            stroke: *stroke,
        });
    }

    fn text(&mut self, position: (f64, f64), text: &str, style: &TextStyle) {
        self.elements.push(SvgElement::Text {
            position,
            text: text.to_string(),
            style: *style,
        });
    }
}

fn dash_array(stroke: &Stroke) -> Option<String> {
    stroke.dash.map(|(dash, gap)| format!("{dash} {gap}"))
}

fn text_anchor(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn render_element(element: SvgElement) -> AnyView {
    match element {
        SvgElement::Line { from, to, stroke } => view! {
            <line
                x1=from.0
                y1=from.1
                x2=to.0
                y2=to.1
                stroke=stroke.color
                stroke-width=stroke.width
                stroke-dasharray=dash_array(&stroke)
            />
        }
        .into_any(),
        SvgElement::Polyline { points, stroke } => view! {
            <polyline
                points=points
                fill="none"
                stroke=stroke.color
                stroke-width=stroke.width
                stroke-linejoin="round"
            />
        }
        .into_any(),
        SvgElement::Circle {
            center,
            radius,
            fill,
            stroke,
        } => view! {
            <circle
                cx=center.0
                cy=center.1
                r=radius
                fill=fill
                stroke=stroke.color
                stroke-width=stroke.width
            />
        }
        .into_any(),
        SvgElement::Text {
            position,
            text,
            style,
        } => {
            let transform = (style.rotation != 0.0)
                .then(|| format!("rotate({} {} {})", style.rotation, position.0, position.1));
            view! {
                <text
                    x=position.0
                    y=position.1
                    fill=style.color
                    font-size=style.size
                    text-anchor=text_anchor(style.anchor)
                    dominant-baseline="middle"
                    transform=transform
                >
                    {text}
                </text>
            }
            .into_any()
        }
    }
}

/// Dual-axis chart rendered as inline SVG
#[component]
pub fn SvgChart(
    #[prop(into)] chart: Signal<DualAxisChart>,
    #[prop(optional)] layout: ChartLayout,
) -> impl IntoView {
    let surface = Memo::new(move |_| {
        let mut surface = SvgSurface::default();
        chart.with(|chart| draw_dual_axis_chart(&mut surface, chart, &layout));
        surface
    });

    view! {
        <svg
            class="d410-chart__svg"
            width=layout.width
            height=layout.height
            viewBox=format!("0 0 {} {}", layout.width, layout.height)
        >
            {move || {
                surface
                    .get()
                    .elements
                    .into_iter()
                    .map(render_element)
                    .collect_view()
            }}
        </svg>
    }
}
