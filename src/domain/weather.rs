use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Unit system for display-string formatting. Geometry is always computed in
/// metric units; conversion happens only when a label is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }
}

/// One forecast hour. Rows are sorted, strictly increasing, with contiguous
/// hourly spacing; a new payload fully replaces the previous rows.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRow {
    pub time: NaiveDateTime,
    pub temperature: f32,
    pub apparent_temperature: f32,
    pub dew_point: f32,
    /// Total precipitation for the hour in mm.
    pub precipitation: f32,
    pub rain: f32,
    pub showers: f32,
    pub snowfall: f32,
    /// Cloud cover percentage, 0-100.
    pub cloud_cover: f32,
    /// Wind speed in km/h.
    pub wind_speed: f32,
    /// Meteorological "from" bearing, 0-359 degrees.
    pub wind_direction: f32,
}

impl HourlyRow {
    /// Timestamp in the payload's wire format, used to seed per-row jitter.
    #[must_use]
    pub fn time_key(&self) -> String {
        self.time.format("%Y-%m-%dT%H:%M").to_string()
    }
}

/// One calendar day of sun times. `sunrise < sunset` on the same day; the
/// daily array may be shorter than hourly coverage at the tail.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
}

/// Snapshot of current conditions carried alongside the series.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSnapshot {
    pub temperature: f32,
    pub wind_speed: f32,
    pub cloud_cover: f32,
}

/// Normalized forecast dataset: the immutable input of the chart pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub hourly: Vec<HourlyRow>,
    pub daily: Vec<DailyRow>,
    pub current: Option<CurrentSnapshot>,
}

impl Dataset {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hourly.is_empty()
    }
}

#[must_use]
pub fn convert_temp(celsius: f32, units: UnitSystem) -> f32 {
    match units {
        UnitSystem::Metric => celsius,
        UnitSystem::Imperial => celsius * 1.8 + 32.0,
    }
}

#[must_use]
pub fn convert_speed(kmh: f32, units: UnitSystem) -> f32 {
    match units {
        UnitSystem::Metric => kmh,
        UnitSystem::Imperial => kmh * 0.621_371,
    }
}

#[must_use]
pub fn convert_precip(mm: f32, units: UnitSystem) -> f32 {
    match units {
        UnitSystem::Metric => mm,
        UnitSystem::Imperial => mm * 0.039_370_1,
    }
}

#[must_use]
pub fn format_temp(celsius: f32, units: UnitSystem) -> String {
    format!("{}", convert_temp(celsius, units).round() as i32)
}

#[must_use]
pub fn format_speed(kmh: f32, units: UnitSystem) -> String {
    format!("{}", convert_speed(kmh, units).round() as i32)
}

#[must_use]
pub fn format_precip(mm: f32, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{mm:.1}"),
        UnitSystem::Imperial => format!("{:.2}", convert_precip(mm, units)),
    }
}

#[must_use]
pub fn temp_unit_label(units: UnitSystem) -> &'static str {
    match units {
        UnitSystem::Metric => "°C",
        UnitSystem::Imperial => "°F",
    }
}

#[must_use]
pub fn speed_unit_label(units: UnitSystem) -> &'static str {
    match units {
        UnitSystem::Metric => "km/h",
        UnitSystem::Imperial => "mph",
    }
}

#[must_use]
pub fn precip_unit_label(units: UnitSystem) -> &'static str {
    match units {
        UnitSystem::Metric => "mm",
        UnitSystem::Imperial => "in",
    }
}

/// 16-point compass label for a wind bearing in degrees.
#[must_use]
pub fn compass_label(degrees: f32) -> &'static str {
    const DIRECTIONS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    let index = (degrees.rem_euclid(360.0) / 22.5).round() as usize % 16;
    DIRECTIONS[index]
}

#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
