//! Line charts with two independent Y axes.
//!
//! The chart is described once by [`DualAxisChart`] and drawn once by
//! [`draw::draw_dual_axis_chart`]; the SVG and Canvas 2D adapters only
//! implement [`surface::PlotSurface`].
//!
//! [`DualAxisChart`]: contracts::dashboards::d410_weekly_metrics::DualAxisChart

pub mod canvas;
pub mod chart_pane;
pub mod draw;
pub mod layout;
pub mod scale;
pub mod surface;
pub mod svg;

pub use chart_pane::{ChartBackend, ChartPane};
pub use layout::ChartLayout;
