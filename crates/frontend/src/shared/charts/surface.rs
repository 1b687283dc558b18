//! Backend-neutral drawing capability set.
//!
//! Both renderer adapters (SVG and Canvas 2D) implement [`PlotSurface`];
//! the chart itself is drawn once, in [`super::draw`].

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
    /// Dash and gap lengths; None for a solid line
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    pub const fn solid(color: &'static str, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub const fn dashed(color: &'static str, width: f64, dash: (f64, f64)) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: &'static str,
    pub size: f64,
    pub anchor: TextAnchor,
    /// Clockwise rotation in degrees around the text position
    pub rotation: f64,
}

impl TextStyle {
    pub const fn new(color: &'static str, size: f64, anchor: TextAnchor) -> Self {
        Self {
            color,
            size,
            anchor,
            rotation: 0.0,
        }
    }

    pub fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}

pub trait PlotSurface {
    /// Start a new frame of the given size, discarding the previous one
    fn begin_frame(&mut self, width: f64, height: f64);
    fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &Stroke);
    fn polyline(&mut self, points: &[(f64, f64)], stroke: &Stroke);
    fn circle(&mut self, center: (f64, f64), radius: f64, fill: &'static str, stroke: &Stroke);
    /// Text is vertically centered on `position`
    fn text(&mut self, position: (f64, f64), text: &str, style: &TextStyle);
}
