use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::weather::{
    CurrentSnapshot, DailyRow, Dataset, HourlyRow, parse_date, parse_datetime,
};

/// Raw parallel-array forecast payload. Index `i` across all hourly arrays
/// refers to the same instant.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub hourly: HourlyBlock,
    #[serde(default)]
    pub daily: Option<DailyBlock>,
    #[serde(default)]
    pub current: Option<CurrentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f32>,
    #[serde(default)]
    pub apparent_temperature: Option<Vec<Option<f32>>>,
    #[serde(default)]
    pub dewpoint_2m: Option<Vec<Option<f32>>>,
    pub precipitation: Vec<f32>,
    #[serde(default)]
    pub rain: Option<Vec<Option<f32>>>,
    #[serde(default)]
    pub showers: Option<Vec<Option<f32>>>,
    #[serde(default)]
    pub snowfall: Option<Vec<Option<f32>>>,
    pub cloudcover: Vec<f32>,
    pub windspeed_10m: Vec<f32>,
    pub winddirection_10m: Vec<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<String>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentBlock {
    pub temperature_2m: f32,
    pub windspeed_10m: f32,
    pub cloudcover: f32,
}

/// A payload that cannot be normalized without misattributing values to
/// times. Fatal for the affected render; never silently degraded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("field `{field}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("unparseable timestamp `{value}` in field `{field}`")]
    BadTimestamp { field: &'static str, value: String },
    #[error("hourly timestamps are not strictly ascending at index {index}")]
    OutOfOrder { index: usize },
}

impl ForecastPayload {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading forecast payload {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing forecast payload {}", path.display()))
    }
}

/// Joins the per-hour parallel arrays into row objects, filling missing
/// fields with derived defaults: dew point falls back to `temperature - 5`,
/// apparent temperature to `temperature`, and the rain/showers/snowfall
/// split to 0.
pub fn normalize(payload: &ForecastPayload) -> Result<Dataset, DatasetError> {
    let hourly = &payload.hourly;
    let expected = hourly.time.len();

    check_len("temperature_2m", expected, hourly.temperature_2m.len())?;
    check_len("precipitation", expected, hourly.precipitation.len())?;
    check_len("cloudcover", expected, hourly.cloudcover.len())?;
    check_len("windspeed_10m", expected, hourly.windspeed_10m.len())?;
    check_len("winddirection_10m", expected, hourly.winddirection_10m.len())?;
    check_optional_len("apparent_temperature", expected, &hourly.apparent_temperature)?;
    check_optional_len("dewpoint_2m", expected, &hourly.dewpoint_2m)?;
    check_optional_len("rain", expected, &hourly.rain)?;
    check_optional_len("showers", expected, &hourly.showers)?;
    check_optional_len("snowfall", expected, &hourly.snowfall)?;

    let mut rows = Vec::with_capacity(expected);
    for idx in 0..expected {
        let time = parse_datetime(&hourly.time[idx]).ok_or_else(|| DatasetError::BadTimestamp {
            field: "hourly.time",
            value: hourly.time[idx].clone(),
        })?;
        if let Some(previous) = rows.last().map(|row: &HourlyRow| row.time)
            && time <= previous
        {
            return Err(DatasetError::OutOfOrder { index: idx });
        }

        let temperature = hourly.temperature_2m[idx];
        rows.push(HourlyRow {
            time,
            temperature,
            apparent_temperature: optional_at(&hourly.apparent_temperature, idx)
                .unwrap_or(temperature),
            dew_point: optional_at(&hourly.dewpoint_2m, idx).unwrap_or(temperature - 5.0),
            precipitation: hourly.precipitation[idx],
            rain: optional_at(&hourly.rain, idx).unwrap_or(0.0),
            showers: optional_at(&hourly.showers, idx).unwrap_or(0.0),
            snowfall: optional_at(&hourly.snowfall, idx).unwrap_or(0.0),
            cloud_cover: hourly.cloudcover[idx],
            wind_speed: hourly.windspeed_10m[idx],
            wind_direction: hourly.winddirection_10m[idx],
        });
    }

    let daily = match &payload.daily {
        Some(block) => normalize_daily(block)?,
        None => Vec::new(),
    };

    let current = payload.current.as_ref().map(|block| CurrentSnapshot {
        temperature: block.temperature_2m,
        wind_speed: block.windspeed_10m,
        cloud_cover: block.cloudcover,
    });

    Ok(Dataset {
        hourly: rows,
        daily,
        current,
    })
}

fn normalize_daily(block: &DailyBlock) -> Result<Vec<DailyRow>, DatasetError> {
    let expected = block.time.len();
    check_len("daily.sunrise", expected, block.sunrise.len())?;
    check_len("daily.sunset", expected, block.sunset.len())?;

    let mut rows = Vec::with_capacity(expected);
    for idx in 0..expected {
        let date = parse_date(&block.time[idx]).ok_or_else(|| DatasetError::BadTimestamp {
            field: "daily.time",
            value: block.time[idx].clone(),
        })?;
        let sunrise =
            parse_datetime(&block.sunrise[idx]).ok_or_else(|| DatasetError::BadTimestamp {
                field: "daily.sunrise",
                value: block.sunrise[idx].clone(),
            })?;
        let sunset =
            parse_datetime(&block.sunset[idx]).ok_or_else(|| DatasetError::BadTimestamp {
                field: "daily.sunset",
                value: block.sunset[idx].clone(),
            })?;
        rows.push(DailyRow {
            date,
            sunrise,
            sunset,
        });
    }
    Ok(rows)
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), DatasetError> {
    if actual == expected {
        Ok(())
    } else {
        Err(DatasetError::LengthMismatch {
            field,
            expected,
            actual,
        })
    }
}

fn check_optional_len(
    field: &'static str,
    expected: usize,
    values: &Option<Vec<Option<f32>>>,
) -> Result<(), DatasetError> {
    match values {
        Some(values) => check_len(field, expected, values.len()),
        None => Ok(()),
    }
}

fn optional_at(values: &Option<Vec<Option<f32>>>, idx: usize) -> Option<f32> {
    values.as_ref().and_then(|values| values[idx])
}
