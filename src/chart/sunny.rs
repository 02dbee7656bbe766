use crate::domain::weather::{DailyRow, HourlyRow};

use super::scale::TimeScale;

/// Sunniness threshold: an hour counts as sunny when more than 10% of the
/// sky is clear during daylight.
const MIN_SUNNINESS: f32 = 0.1;

/// A padded highlight span in pixel x coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunnyRange {
    pub x0: f64,
    pub x1: f64,
}

impl SunnyRange {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }
}

/// Groups contiguous low-cloud daylight hours and converts each group into
/// a padded pixel span. The padding of half an average pill width per side
/// coalesces what would otherwise render as a row of discrete pills into
/// one continuous shape; non-contiguous groups stay independent.
#[must_use]
pub fn sunny_ranges(rows: &[HourlyRow], daily: &[DailyRow], time: &TimeScale) -> Vec<SunnyRange> {
    let sunny: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| is_sunny(row, daily))
        .map(|(idx, _)| idx)
        .collect();
    if sunny.is_empty() {
        return Vec::new();
    }

    let pill_width = time.range_width() / 48.0 * 1.5;
    let padding = pill_width / 2.0;

    group_consecutive(&sunny)
        .into_iter()
        .map(|(start, end)| SunnyRange {
            x0: time.scale(rows[start].time) - padding,
            x1: time.scale(rows[end].time) + padding,
        })
        .collect()
}

fn is_sunny(row: &HourlyRow, daily: &[DailyRow]) -> bool {
    let Some(day) = daily.iter().find(|day| day.date == row.time.date()) else {
        return false;
    };
    let is_day = row.time > day.sunrise && row.time < day.sunset;
    let sunniness = (100.0 - row.cloud_cover) / 100.0;
    is_day && sunniness > MIN_SUNNINESS
}

/// Groups ascending indices into closed ranges of consecutive values.
fn group_consecutive(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = indices[0];
    let mut prev = indices[0];
    for &idx in &indices[1..] {
        if idx == prev + 1 {
            prev = idx;
        } else {
            ranges.push((start, prev));
            start = idx;
            prev = idx;
        }
    }
    ranges.push((start, prev));
    ranges
}
