pub mod d410_weekly_metrics;
