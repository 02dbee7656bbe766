use crate::domain::weather::DailyRow;

use super::scale::TimeScale;

/// A shaded night span in pixel x coordinates, already clipped to the
/// visible chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightInterval {
    pub x0: f64,
    pub x1: f64,
}

impl NightInterval {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }
}

/// Converts daily sunrise/sunset into shaded x-ranges: one interval per
/// night `[sunset_i, sunrise_{i+1}]`, plus the pre-sunrise stretch of the
/// first day when the chart starts before dawn. Intervals are
/// non-overlapping by construction; zero-width or fully off-chart spans are
/// dropped.
#[must_use]
pub fn night_intervals(daily: &[DailyRow], time: &TimeScale) -> Vec<NightInterval> {
    let x_max = time.range_width();
    let mut intervals = Vec::new();

    if let Some(first) = daily.first()
        && time.start() < first.sunrise
    {
        push_clipped(
            &mut intervals,
            time.scale(time.start()),
            time.scale(first.sunrise),
            x_max,
        );
    }

    for days in daily.windows(2) {
        push_clipped(
            &mut intervals,
            time.scale(days[0].sunset),
            time.scale(days[1].sunrise),
            x_max,
        );
    }
    intervals
}

fn push_clipped(intervals: &mut Vec<NightInterval>, x_start: f64, x_end: f64, x_max: f64) {
    if x_start >= x_max || x_end <= 0.0 {
        return;
    }
    let interval = NightInterval {
        x0: x_start.max(0.0),
        x1: x_end.min(x_max),
    };
    if interval.width() > 0.0 {
        intervals.push(interval);
    }
}
