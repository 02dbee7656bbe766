//! Shared fixtures for unit tests.

use chrono::Duration;

use crate::chart::{Margin, Viewport};
use crate::domain::weather::{DailyRow, HourlyRow, parse_date, parse_datetime};

pub(crate) fn hourly_row(time: &str) -> HourlyRow {
    HourlyRow {
        time: parse_datetime(time).expect("valid fixture time"),
        temperature: 3.0,
        apparent_temperature: 2.0,
        dew_point: -1.0,
        precipitation: 0.0,
        rain: 0.0,
        showers: 0.0,
        snowfall: 0.0,
        cloud_cover: 50.0,
        wind_speed: 10.0,
        wind_direction: 180.0,
    }
}

pub(crate) fn hourly_series(start: &str, hours: usize) -> Vec<HourlyRow> {
    let base = hourly_row(start);
    (0..hours)
        .map(|offset| {
            let mut row = base.clone();
            row.time += Duration::hours(offset as i64);
            row
        })
        .collect()
}

pub(crate) fn daily_row(date: &str, sunrise: &str, sunset: &str) -> DailyRow {
    DailyRow {
        date: parse_date(date).expect("valid fixture date"),
        sunrise: parse_datetime(&format!("{date}T{sunrise}")).expect("valid fixture sunrise"),
        sunset: parse_datetime(&format!("{date}T{sunset}")).expect("valid fixture sunset"),
    }
}

/// Margin-free viewport so pixel expectations stay easy to read in tests.
pub(crate) fn viewport(width: f64, height: f64) -> Viewport {
    Viewport {
        width,
        height,
        margin: Margin {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        },
    }
}
