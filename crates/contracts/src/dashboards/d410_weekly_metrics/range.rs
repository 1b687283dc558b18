use super::dto::WeeklyPoint;
use serde::{Deserialize, Serialize};

/// Включительный диапазон недель [start, end]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub start: u32,
    pub end: u32,
}

impl WeekRange {
    /// Диапазон до загрузки данных
    pub const DEFAULT: WeekRange = WeekRange { start: 1, end: 52 };

    /// None, если start > end
    pub fn new(start: u32, end: u32) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn contains(&self, week: u32) -> bool {
        self.start <= week && week <= self.end
    }
}

impl Default for WeekRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Пункт выпадающего списка недель
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekOption {
    pub week: u32,
    pub disabled: bool,
}

/// Точки, попадающие в диапазон, в исходном порядке
pub fn filter_range(points: &[WeeklyPoint], range: WeekRange) -> Vec<WeeklyPoint> {
    points
        .iter()
        .filter(|p| range.contains(p.week))
        .cloned()
        .collect()
}

/// Минимальная и максимальная неделя в данных
pub fn week_bounds(points: &[WeeklyPoint]) -> Option<WeekRange> {
    let min = points.iter().map(|p| p.week).min()?;
    let max = points.iter().map(|p| p.week).max()?;
    Some(WeekRange { start: min, end: max })
}

/// Пункты селектора начальной недели: неделя позже конца диапазона недоступна
pub fn start_week_options(points: &[WeeklyPoint], range: WeekRange) -> Vec<WeekOption> {
    week_options(points, |week| week > range.end)
}

/// Пункты селектора конечной недели: неделя раньше начала диапазона недоступна
pub fn end_week_options(points: &[WeeklyPoint], range: WeekRange) -> Vec<WeekOption> {
    week_options(points, |week| week < range.start)
}

fn week_options(points: &[WeeklyPoint], disabled: impl Fn(u32) -> bool) -> Vec<WeekOption> {
    let Some(bounds) = week_bounds(points) else {
        return Vec::new();
    };

    (bounds.start..=bounds.end)
        .map(|week| WeekOption {
            week,
            disabled: disabled(week),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(weeks: impl IntoIterator<Item = u32>) -> Vec<WeeklyPoint> {
        weeks
            .into_iter()
            .map(|week| WeeklyPoint {
                week,
                sold: Some(week as f64),
                ca: Some(week as f64 * 10.0),
                shrinkage: None,
                gross_margin: None,
                net_margin: None,
                stock: None,
                flow: None,
            })
            .collect()
    }

    fn weeks(points: &[WeeklyPoint]) -> Vec<u32> {
        points.iter().map(|p| p.week).collect()
    }

    #[test]
    fn test_filter_inclusive_bounds() {
        let data = points(1..=10);
        let range = WeekRange::new(3, 6).unwrap();
        assert_eq!(weeks(&filter_range(&data, range)), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = points(1..=10);
        let range = WeekRange::new(2, 8).unwrap();
        let once = filter_range(&data, range);
        let twice = filter_range(&once, range);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_outside_data_is_empty() {
        let data = points(1..=10);
        assert!(filter_range(&data, WeekRange::new(11, 20).unwrap()).is_empty());

        let data = points(5..=10);
        assert!(filter_range(&data, WeekRange::new(1, 4).unwrap()).is_empty());
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        assert!(WeekRange::new(5, 4).is_none());
        assert_eq!(WeekRange::new(4, 4), Some(WeekRange { start: 4, end: 4 }));
        assert_eq!(WeekRange::default(), WeekRange { start: 1, end: 52 });
    }

    #[test]
    fn test_week_bounds() {
        assert_eq!(week_bounds(&[]), None);
        assert_eq!(
            week_bounds(&points([4, 9, 17])),
            Some(WeekRange { start: 4, end: 17 })
        );
    }

    #[test]
    fn test_options_disable_out_of_order_weeks() {
        let data = points(1..=6);
        let range = WeekRange::new(2, 4).unwrap();

        let start = start_week_options(&data, range);
        assert_eq!(start.len(), 6);
        let enabled: Vec<u32> = start.iter().filter(|o| !o.disabled).map(|o| o.week).collect();
        assert_eq!(enabled, vec![1, 2, 3, 4]);

        let end = end_week_options(&data, range);
        assert_eq!(end.len(), 6);
        let enabled: Vec<u32> = end.iter().filter(|o| !o.disabled).map(|o| o.week).collect();
        assert_eq!(enabled, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_options_fill_gaps_between_weeks() {
        let data = points([2, 5]);
        let options = start_week_options(&data, WeekRange::new(2, 5).unwrap());
        let listed: Vec<u32> = options.iter().map(|o| o.week).collect();
        assert_eq!(listed, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_options_empty_without_data() {
        assert!(start_week_options(&[], WeekRange::DEFAULT).is_empty());
        assert!(end_week_options(&[], WeekRange::DEFAULT).is_empty());
    }
}
