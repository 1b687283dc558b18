use super::scale::LinearScale;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Outer size of a chart and the margins reserved for axes and legend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 560.0,
            height: 420.0,
            margin: Margin {
                top: 20.0,
                right: 70.0,
                bottom: 70.0,
                left: 70.0,
            },
        }
    }
}

impl ChartLayout {
    pub fn plot_left(&self) -> f64 {
        self.margin.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin.right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin.bottom
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    /// Vertical pixel range, bottom to top
    pub fn y_range(&self) -> (f64, f64) {
        (self.plot_bottom(), self.plot_top())
    }

    /// Week axis; a single week is centered in the plot area
    pub fn week_scale(&self, extent: Option<(u32, u32)>) -> LinearScale {
        let domain = match extent {
            Some((first, last)) if first < last => (first as f64, last as f64),
            Some((week, _)) => (week as f64 - 0.5, week as f64 + 0.5),
            None => (0.0, 1.0),
        };
        LinearScale::new(domain, (self.plot_left(), self.plot_right()))
    }

    /// Every n-th week gets a label so that labels keep at least `min_gap` px apart
    pub fn week_label_stride(&self, week_count: usize, min_gap: f64) -> usize {
        if week_count <= 1 {
            return 1;
        }
        let spacing = self.plot_width() / (week_count - 1) as f64;
        ((min_gap / spacing).ceil() as usize).max(1)
    }

    /// Index of the plotted week closest to pixel `x`, None outside the plot area
    pub fn nearest_week_index(&self, x: f64, weeks: &[u32]) -> Option<usize> {
        if weeks.is_empty() || x < self.plot_left() - 10.0 || x > self.plot_right() + 10.0 {
            return None;
        }
        let extent = Some((*weeks.first()?, *weeks.last()?));
        let target = self.week_scale(extent).invert(x);

        weeks
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = (**a as f64 - target).abs();
                let db = (**b as f64 - target).abs();
                da.total_cmp(&db)
            })
            .map(|(i, _)| i)
    }
}
