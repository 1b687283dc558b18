//! D410 — недельные показатели магазинов.
//!
//! Общая для frontend и генератора фикстур модель данных:
//! сырые записи, нормализация по неделям, фильтр диапазона и
//! модель двухосевого графика.

pub mod chart;
pub mod dto;
pub mod metric;
pub mod normalize;
pub mod range;

pub use chart::{DualAxisChart, Series};
pub use dto::{RawRecord, WeeklyPoint};
pub use metric::Metric;
pub use normalize::normalize_records;
pub use range::{
    end_week_options, filter_range, start_week_options, week_bounds, WeekOption, WeekRange,
};
