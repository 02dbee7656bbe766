use chrono::{Duration, NaiveDateTime};

use crate::domain::weather::HourlyRow;

use super::Viewport;

/// Linear mapping from a numeric domain onto a pixel range. Pure value type;
/// rebuilt whenever data or dimensions change, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a domain value to pixels, extrapolating outside the domain.
    /// Degenerate domains and non-finite inputs collapse to the range start
    /// instead of producing NaN coordinates.
    #[must_use]
    pub fn scale(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if !value.is_finite() || span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Maps a pixel position back to the domain, clamping to the nearest
    /// range boundary first.
    #[must_use]
    pub fn invert(&self, px: f64) -> f64 {
        let (lo, hi) = ordered(self.range);
        let px = px.clamp(lo, hi);
        let span = self.range.1 - self.range.0;
        if span == 0.0 {
            return self.domain.0;
        }
        let t = (px - self.range.0) / span;
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Extends the domain outward to round tick values, two refinement
    /// passes like d3's `nice`.
    #[must_use]
    pub fn nice(mut self) -> Self {
        const COUNT: f64 = 10.0;
        for _ in 0..2 {
            let step = tick_increment(self.domain.0, self.domain.1, COUNT);
            if step <= 0.0 || !step.is_finite() {
                break;
            }
            self.domain.0 = (self.domain.0 / step).floor() * step;
            self.domain.1 = (self.domain.1 / step).ceil() * step;
        }
        self
    }
}

fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let step = (stop - start) / count.max(1.0);
    if step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10f64.powf(power);
    let error = step / base;
    if error >= 50f64.sqrt() {
        base * 10.0
    } else if error >= 10f64.sqrt() {
        base * 5.0
    } else if error >= 2f64.sqrt() {
        base * 2.0
    } else {
        base
    }
}

fn ordered(range: (f64, f64)) -> (f64, f64) {
    if range.0 <= range.1 {
        range
    } else {
        (range.1, range.0)
    }
}

/// Mapping from time instants onto the x axis, linear over elapsed
/// milliseconds. Degenerates to a constant 0 for a single-instant domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    start: NaiveDateTime,
    end: NaiveDateTime,
    range: (f64, f64),
}

impl TimeScale {
    #[must_use]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, range: (f64, f64)) -> Self {
        Self { start, end, range }
    }

    #[must_use]
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    #[must_use]
    pub fn range_width(&self) -> f64 {
        self.range.1 - self.range.0
    }

    #[must_use]
    pub fn scale(&self, time: NaiveDateTime) -> f64 {
        let total = (self.end - self.start).num_milliseconds() as f64;
        if total <= 0.0 {
            return self.range.0;
        }
        let elapsed = (time - self.start).num_milliseconds() as f64;
        self.range.0 + elapsed / total * (self.range.1 - self.range.0)
    }

    /// Inverse lookup for pointer positions; out-of-range pixels clamp to
    /// the domain boundary.
    #[must_use]
    pub fn invert(&self, px: f64) -> NaiveDateTime {
        let (lo, hi) = ordered(self.range);
        let px = px.clamp(lo, hi);
        let total = (self.end - self.start).num_milliseconds() as f64;
        let width = self.range.1 - self.range.0;
        if total <= 0.0 || width == 0.0 {
            return self.start;
        }
        let t = (px - self.range.0) / width;
        self.start + Duration::milliseconds((t * total).round() as i64)
    }

    /// Tick instants aligned to clean hour boundaries (multiples of the
    /// chosen step within the day), aiming for at most `target` ticks.
    #[must_use]
    pub fn ticks(&self, target: usize) -> Vec<NaiveDateTime> {
        let span_hours = (self.end - self.start).num_hours().max(0) as usize;
        let step = [1usize, 2, 3, 6, 12, 24, 48]
            .into_iter()
            .find(|step| span_hours / step <= target.max(1))
            .unwrap_or(48) as i64;

        let mut tick = self
            .start
            .date()
            .and_hms_opt(0, 0, 0)
            .unwrap_or(self.start);
        let mut out = Vec::new();
        while tick <= self.end {
            if tick >= self.start {
                out.push(tick);
            }
            tick += Duration::hours(step);
        }
        out
    }
}

/// The five independent scales of the meteogram plus the derived inner box.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    pub time: TimeScale,
    pub temperature: LinearScale,
    pub precipitation: LinearScale,
    pub cloud: LinearScale,
    pub wind: LinearScale,
    pub x_max: f64,
    pub y_max: f64,
    pub cloud_center_y: f64,
}

impl ChartScales {
    /// Derives all scales from the data extent and the target pixel box.
    /// Returns `None` for an empty series; callers short-circuit to an
    /// empty render instead.
    #[must_use]
    pub fn build(rows: &[HourlyRow], viewport: &Viewport) -> Option<Self> {
        let (first, last) = (rows.first()?, rows.last()?);
        let x_max = (viewport.width - viewport.margin.left - viewport.margin.right).max(0.0);
        let y_max = (viewport.height - viewport.margin.top - viewport.margin.bottom).max(0.0);

        let mut temp_min = f64::INFINITY;
        let mut temp_max = f64::NEG_INFINITY;
        let mut precip_max = 0.0f64;
        let mut wind_max = 0.0f64;
        for row in rows {
            temp_min = temp_min.min(f64::from(row.temperature.min(row.dew_point)));
            temp_max = temp_max.max(f64::from(row.temperature));
            precip_max = precip_max.max(f64::from(row.precipitation));
            wind_max = wind_max.max(f64::from(row.wind_speed));
        }

        Some(Self {
            time: TimeScale::new(first.time, last.time, (0.0, x_max)),
            temperature: LinearScale::new((temp_min - 5.0, temp_max + 5.0), (y_max, 0.0)).nice(),
            // Floor of 5 keeps the domain strictly positive when every hour
            // is dry.
            precipitation: LinearScale::new((0.0, precip_max.max(5.0)), (y_max, y_max * 0.7)),
            cloud: LinearScale::new((0.0, 100.0), (0.0, 15.0)),
            // 20 km/h minimum ceiling so calm periods don't fill the band.
            wind: LinearScale::new((0.0, wind_max.max(20.0)), (y_max, y_max * 0.55)),
            x_max,
            y_max,
            cloud_center_y: y_max * 0.12,
        })
    }
}
