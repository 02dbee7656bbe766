//! Shared payload fixtures for integration tests.

use meteogram_tui::data::payload::{DailyBlock, ForecastPayload, HourlyBlock, normalize};
use meteogram_tui::domain::weather::Dataset;

/// Parallel-array payload with every optional field supplied. Values are
/// closed-form in the hour index so assertions stay readable.
#[must_use]
pub fn full_payload(hours: usize) -> ForecastPayload {
    let time: Vec<String> = (0..hours)
        .map(|h| {
            format!(
                "2026-02-{:02}T{:02}:00",
                12 + h / 24,
                h % 24
            )
        })
        .collect();
    let temperature: Vec<f32> = (0..hours).map(|h| 1.0 + (h % 24) as f32 * 0.3).collect();

    ForecastPayload {
        hourly: HourlyBlock {
            time,
            temperature_2m: temperature.clone(),
            apparent_temperature: Some(temperature.iter().map(|t| Some(t - 1.0)).collect()),
            dewpoint_2m: Some(temperature.iter().map(|t| Some(t - 4.0)).collect()),
            precipitation: vec![0.0; hours],
            rain: Some(vec![Some(0.0); hours]),
            showers: Some(vec![Some(0.0); hours]),
            snowfall: Some(vec![Some(0.0); hours]),
            cloudcover: (0..hours).map(|h| ((h * 7) % 101) as f32).collect(),
            windspeed_10m: (0..hours).map(|h| 5.0 + (h % 12) as f32).collect(),
            winddirection_10m: (0..hours).map(|h| ((h * 31) % 360) as f32).collect(),
        },
        daily: Some(daily_block(hours.div_ceil(24).max(1))),
        current: None,
    }
}

fn daily_block(days: usize) -> DailyBlock {
    DailyBlock {
        time: (0..days).map(|d| format!("2026-02-{:02}", 12 + d)).collect(),
        sunrise: (0..days)
            .map(|d| format!("2026-02-{:02}T07:30", 12 + d))
            .collect(),
        sunset: (0..days)
            .map(|d| format!("2026-02-{:02}T16:45", 12 + d))
            .collect(),
    }
}

#[must_use]
pub fn dataset(hours: usize) -> Dataset {
    normalize(&full_payload(hours)).expect("fixture payload normalizes")
}
