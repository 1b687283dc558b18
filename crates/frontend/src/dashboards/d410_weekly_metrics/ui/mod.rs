mod controls;
mod dashboard;

pub use dashboard::WeeklyMetricsDashboard;
