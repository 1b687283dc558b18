//! Linear value → pixel mapping with "nice" tick generation.

/// Maps a numeric domain onto a pixel range (range may be inverted, e.g. Y axis)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
    }
}

/// Value axis: domain widened to nice step boundaries, always including zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    pub scale: LinearScale,
    pub ticks: Vec<f64>,
    pub step: f64,
}

impl ValueAxis {
    /// `extent` is the (min, max) of the plotted values; None for an empty series
    pub fn new(extent: Option<(f64, f64)>, range: (f64, f64), tick_count: usize) -> Self {
        let (lo, hi) = extent.unwrap_or((0.0, 1.0));
        let mut lo = lo.min(0.0);
        let mut hi = hi.max(0.0);
        if hi == lo {
            hi = lo + 1.0;
        }

        let step = nice_step(hi - lo, tick_count.max(1));
        lo = (lo / step).floor() * step;
        hi = (hi / step).ceil() * step;

        let n = ((hi - lo) / step).round() as usize;
        let ticks = (0..=n).map(|i| lo + i as f64 * step).collect();

        Self {
            scale: LinearScale::new((lo, hi), range),
            ticks,
            step,
        }
    }
}

/// Step of 1, 2 or 5 × 10^k giving roughly `count` intervals over `span`
pub fn nice_step(span: f64, count: usize) -> f64 {
    let raw = span / count as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let error = raw / magnitude;

    let factor = if error >= 7.07 {
        10.0
    } else if error >= 3.16 {
        5.0
    } else if error >= 1.41 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}
