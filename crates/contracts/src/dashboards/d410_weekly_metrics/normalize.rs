use super::dto::{RawRecord, WeeklyPoint};
use std::collections::HashSet;

/// Свести сырые записи к одной точке на неделю.
///
/// Для каждой недели берётся первая встреченная запись (порядок входа),
/// остальные записи той же недели отбрасываются без агрегации.
/// Результат отсортирован по возрастанию недели.
pub fn normalize_records(records: &[RawRecord]) -> Vec<WeeklyPoint> {
    let mut seen = HashSet::new();
    let mut points: Vec<WeeklyPoint> = records
        .iter()
        .filter(|r| seen.insert(r.week))
        .map(WeeklyPoint::from)
        .collect();

    points.sort_by_key(|p| p.week);
    points
}
