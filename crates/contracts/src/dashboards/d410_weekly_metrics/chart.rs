use super::dto::WeeklyPoint;
use super::metric::Metric;
use serde::{Deserialize, Serialize};

/// Серия значений одного показателя по неделям
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub metric: Metric,
    pub label: String,
    /// Значение на каждую неделю графика; None — разрыв линии
    pub values: Vec<Option<f64>>,
}

impl Series {
    fn build(points: &[WeeklyPoint], metric: Metric) -> Self {
        Self {
            metric,
            label: metric.label().to_string(),
            values: points.iter().map(|p| metric.value(p)).collect(),
        }
    }

    /// Минимум и максимум по имеющимся значениям
    pub fn extent(&self) -> Option<(f64, f64)> {
        self.values.iter().flatten().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

/// Модель графика с двумя независимыми осями Y
///
/// Левая серия зависит только от `y1`, правая — только от `y2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualAxisChart {
    pub weeks: Vec<u32>,
    pub left: Series,
    pub right: Series,
}

impl DualAxisChart {
    pub fn build(points: &[WeeklyPoint], y1: Metric, y2: Metric) -> Self {
        Self {
            weeks: points.iter().map(|p| p.week).collect(),
            left: Series::build(points, y1),
            right: Series::build(points, y2),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn week_extent(&self) -> Option<(u32, u32)> {
        Some((*self.weeks.first()?, *self.weeks.last()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> Vec<WeeklyPoint> {
        (1..=4)
            .map(|week| WeeklyPoint {
                week,
                sold: Some(week as f64),
                ca: Some(week as f64 * 100.0),
                shrinkage: if week == 2 { None } else { Some(1.0) },
                gross_margin: Some(30.0),
                net_margin: Some(10.0),
                stock: Some(50.0 - week as f64),
                flow: Some(200.0),
            })
            .collect()
    }

    #[test]
    fn test_build_maps_metrics_to_axes() {
        let chart = DualAxisChart::build(&data(), Metric::Ca, Metric::Stock);
        assert_eq!(chart.weeks, vec![1, 2, 3, 4]);
        assert_eq!(chart.left.label, "CA (€)");
        assert_eq!(
            chart.left.values,
            vec![Some(100.0), Some(200.0), Some(300.0), Some(400.0)]
        );
        assert_eq!(chart.right.metric, Metric::Stock);
        assert_eq!(chart.right.extent(), Some((46.0, 49.0)));
        assert_eq!(chart.week_extent(), Some((1, 4)));
    }

    #[test]
    fn test_axes_are_independent() {
        let points = data();
        let before = DualAxisChart::build(&points, Metric::Ca, Metric::Stock);
        let after_y1 = DualAxisChart::build(&points, Metric::Flow, Metric::Stock);
        assert_eq!(before.right, after_y1.right);
        assert_ne!(before.left, after_y1.left);

        let after_y2 = DualAxisChart::build(&points, Metric::Ca, Metric::Sold);
        assert_eq!(before.left, after_y2.left);
    }

    #[test]
    fn test_same_metric_on_both_axes() {
        let chart = DualAxisChart::build(&data(), Metric::Sold, Metric::Sold);
        assert_eq!(chart.left.values, chart.right.values);
    }

    #[test]
    fn test_missing_values_are_gaps() {
        let chart = DualAxisChart::build(&data(), Metric::Shrinkage, Metric::Flow);
        assert_eq!(chart.left.values[1], None);
        assert_eq!(chart.left.extent(), Some((1.0, 1.0)));
    }

    #[test]
    fn test_empty_chart() {
        let chart = DualAxisChart::build(&[], Metric::Ca, Metric::Stock);
        assert!(chart.is_empty());
        assert_eq!(chart.left.extent(), None);
        assert_eq!(chart.week_extent(), None);
    }
}
