//! View state of the weekly metrics dashboard.
//!
//! Every change goes through [`WeeklyMetricsState::apply`]; the filtered
//! slice, chart model and selector options are derived from the state.

use contracts::dashboards::d410_weekly_metrics::{
    end_week_options, filter_range, start_week_options, week_bounds, DualAxisChart, Metric,
    WeekOption, WeekRange, WeeklyPoint,
};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Loaded(Vec<WeeklyPoint>),
    Failed(String),
    SetStart(u32),
    SetEnd(u32),
    SetY1(Metric),
    SetY2(Metric),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyMetricsState {
    /// Unique weeks, ascending
    pub points: Vec<WeeklyPoint>,
    pub range: WeekRange,
    pub y1: Metric,
    pub y2: Metric,
    pub status: LoadStatus,
}

impl Default for WeeklyMetricsState {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            range: WeekRange::DEFAULT,
            y1: Metric::Ca,
            y2: Metric::Stock,
            status: LoadStatus::Loading,
        }
    }
}

impl WeeklyMetricsState {
    /// Apply one update. Returns false when the action was rejected
    /// (a start after the end or an end before the start).
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Loaded(points) => {
                if let Some(bounds) = week_bounds(&points) {
                    self.range = bounds;
                }
                self.points = points;
                self.status = LoadStatus::Loaded;
            }
            Action::Failed(message) => {
                self.status = LoadStatus::Failed(message);
            }
            Action::SetStart(start) => match WeekRange::new(start, self.range.end) {
                Some(range) => self.range = range,
                None => return false,
            },
            Action::SetEnd(end) => match WeekRange::new(self.range.start, end) {
                Some(range) => self.range = range,
                None => return false,
            },
            Action::SetY1(metric) => self.y1 = metric,
            Action::SetY2(metric) => self.y2 = metric,
        }
        true
    }

    pub fn filtered(&self) -> Vec<WeeklyPoint> {
        filter_range(&self.points, self.range)
    }

    pub fn chart(&self) -> DualAxisChart {
        DualAxisChart::build(&self.filtered(), self.y1, self.y2)
    }

    pub fn start_options(&self) -> Vec<WeekOption> {
        start_week_options(&self.points, self.range)
    }

    pub fn end_options(&self) -> Vec<WeekOption> {
        end_week_options(&self.points, self.range)
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
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
                ca: Some(week as f64 * 100.0),
                shrinkage: Some(1.0),
                gross_margin: Some(20.0),
                net_margin: Some(10.0),
                stock: Some(80.0 - week as f64),
                flow: Some(200.0),
            })
            .collect()
    }

    fn loaded(weeks: impl IntoIterator<Item = u32>) -> WeeklyMetricsState {
        let mut state = WeeklyMetricsState::default();
        state.apply(Action::Loaded(points(weeks)));
        state
    }

    #[test]
    fn test_defaults_before_fetch() {
        let state = WeeklyMetricsState::default();
        assert_eq!(state.range, WeekRange { start: 1, end: 52 });
        assert_eq!(state.y1, Metric::Ca);
        assert_eq!(state.y2, Metric::Stock);
        assert!(state.is_loading());
        assert!(state.chart().is_empty());
        assert!(state.start_options().is_empty());
    }

    #[test]
    fn test_loaded_sets_bounds_to_data_extent() {
        let state = loaded(4..=30);
        assert_eq!(state.range, WeekRange { start: 4, end: 30 });
        assert_eq!(state.status, LoadStatus::Loaded);
        assert_eq!(state.filtered().len(), 27);
    }

    #[test]
    fn test_loaded_empty_keeps_default_range() {
        let state = loaded(std::iter::empty::<u32>());
        assert_eq!(state.range, WeekRange::DEFAULT);
        assert!(state.filtered().is_empty());
        assert!(state.end_options().is_empty());
    }

    #[test]
    fn test_failed_load_reports_error() {
        let mut state = WeeklyMetricsState::default();
        state.apply(Action::Failed("HTTP error: 404".to_string()));
        assert_eq!(state.error(), Some("HTTP error: 404"));
        assert!(!state.is_loading());
        assert!(state.chart().is_empty());
    }

    #[test]
    fn test_range_updates_filter_chart() {
        let mut state = loaded(1..=10);
        assert!(state.apply(Action::SetStart(3)));
        assert!(state.apply(Action::SetEnd(6)));
        assert_eq!(state.chart().weeks, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_out_of_order_range_is_rejected() {
        let mut state = loaded(1..=10);
        state.apply(Action::SetEnd(5));
        let before = state.clone();

        assert!(!state.apply(Action::SetStart(6)));
        assert_eq!(state, before);

        state.apply(Action::SetStart(3));
        assert!(!state.apply(Action::SetEnd(2)));
        assert_eq!(state.range, WeekRange { start: 3, end: 5 });
    }

    #[test]
    fn test_metric_selection_is_independent() {
        let mut state = loaded(1..=5);
        let right_before = state.chart().right;

        state.apply(Action::SetY1(Metric::Flow));
        assert_eq!(state.chart().right, right_before);
        assert_eq!(state.chart().left.metric, Metric::Flow);

        let left_before = state.chart().left;
        state.apply(Action::SetY2(Metric::Flow));
        assert_eq!(state.chart().left, left_before);
        assert_eq!(state.y1, state.y2);
    }

    #[test]
    fn test_options_follow_range() {
        let mut state = loaded(1..=8);
        state.apply(Action::SetStart(3));
        state.apply(Action::SetEnd(5));

        let disabled_start: Vec<u32> = state
            .start_options()
            .iter()
            .filter(|o| o.disabled)
            .map(|o| o.week)
            .collect();
        assert_eq!(disabled_start, vec![6, 7, 8]);

        let disabled_end: Vec<u32> = state
            .end_options()
            .iter()
            .filter(|o| o.disabled)
            .map(|o| o.week)
            .collect();
        assert_eq!(disabled_end, vec![1, 2]);
    }
}
