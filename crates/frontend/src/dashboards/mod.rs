pub mod d410_weekly_metrics;

pub use d410_weekly_metrics::ui::WeeklyMetricsDashboard;
