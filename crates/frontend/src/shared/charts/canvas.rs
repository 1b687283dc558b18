use super::draw::draw_dual_axis_chart;
use super::layout::ChartLayout;
use super::surface::{PlotSurface, Stroke, TextAnchor, TextStyle};
use contracts::dashboards::d410_weekly_metrics::DualAxisChart;
use js_sys::Array;
use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Replays drawing commands on a Canvas 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    fn apply_stroke(&self, stroke: &Stroke) {
        self.ctx.set_stroke_style_str(stroke.color);
        self.ctx.set_line_width(stroke.width);
        let dash = Array::new();
        if let Some((on, off)) = stroke.dash {
            dash.push(&JsValue::from_f64(on));
            dash.push(&JsValue::from_f64(off));
        }
        let _ = self.ctx.set_line_dash(&dash);
    }
}

impl PlotSurface for CanvasSurface {
    fn begin_frame(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &Stroke) {
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
    }

    fn polyline(&mut self, points: &[(f64, f64)], stroke: &Stroke) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.apply_stroke(stroke);
        self.ctx.set_line_join("round");
        self.ctx.begin_path();
        self.ctx.move_to(first.0, first.1);
        for (x, y) in rest {
            self.ctx.line_to(*x, *y);
        }
        self.ctx.stroke();
    }

    fn circle(&mut self, center: (f64, f64), radius: f64, fill: &'static str, stroke: &Stroke) {
        self.apply_stroke(stroke);
        self.ctx.set_fill_style_str(fill);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.0, center.1, radius, 0.0, std::f64::consts::TAU);
        self.ctx.fill();
        self.ctx.stroke();
    }

    fn text(&mut self, position: (f64, f64), text: &str, style: &TextStyle) {
        let ctx = &self.ctx;
        ctx.save();
        let _ = ctx.translate(position.0, position.1);
        let _ = ctx.rotate(style.rotation.to_radians());
        ctx.set_fill_style_str(style.color);
        ctx.set_font(&format!("{}px sans-serif", style.size));
        ctx.set_text_baseline("middle");
        ctx.set_text_align(match style.anchor {
            TextAnchor::Start => "left",
            TextAnchor::Middle => "center",
            TextAnchor::End => "right",
        });
        let _ = ctx.fill_text(text, 0.0, 0.0);
        ctx.restore();
    }
}

/// Dual-axis chart painted on a `<canvas>`, redrawn whenever the chart changes
#[component]
pub fn CanvasChart(
    #[prop(into)] chart: Signal<DualAxisChart>,
    #[prop(optional)] layout: ChartLayout,
) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        match CanvasSurface::new(canvas) {
            Ok(mut surface) => {
                chart.with(|chart| draw_dual_axis_chart(&mut surface, chart, &layout));
            }
            Err(err) => {
                log::error!("Failed to get canvas context: {:?}", err);
            }
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="d410-chart__canvas"
            width=layout.width
            height=layout.height
        ></canvas>
    }
}
