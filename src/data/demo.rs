use chrono::{Duration, NaiveDateTime, Timelike};

use crate::data::payload::{CurrentBlock, DailyBlock, ForecastPayload, HourlyBlock};

const HOURS: usize = 48;

/// Deterministic synthetic 48-hour payload anchored around `now`, so the app
/// runs without network access and tests get a realistic fixture. The series
/// starts six hours before `now`; all values are closed-form functions of the
/// hour index.
#[must_use]
pub fn demo_payload(now: NaiveDateTime) -> ForecastPayload {
    let start = now
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
        - Duration::hours(6);

    let times: Vec<NaiveDateTime> = (0..HOURS)
        .map(|i| start + Duration::hours(i as i64))
        .collect();

    let temperature: Vec<f32> = times.iter().map(|t| diurnal_temp(t)).collect();
    let dewpoint: Vec<Option<f32>> = temperature
        .iter()
        .enumerate()
        .map(|(i, t)| Some(t - 3.0 - (i as f32 * 0.7).sin().abs()))
        .collect();
    let cloud: Vec<f32> = (0..HOURS).map(cloud_cover).collect();

    let mut rain = vec![0.0f32; HOURS];
    let mut snowfall = vec![0.0f32; HOURS];
    // Afternoon rain on the first day, a snow spell on the second night.
    for (offset, amount) in [(9, 0.6), (10, 1.8), (11, 2.4), (12, 1.1), (13, 0.3)] {
        rain[offset] = amount;
    }
    for (offset, amount) in [(30, 0.4), (31, 1.2), (32, 1.6), (33, 0.8)] {
        snowfall[offset] = amount;
    }
    let precipitation: Vec<f32> = (0..HOURS).map(|i| rain[i] + snowfall[i]).collect();

    let wind: Vec<f32> = (0..HOURS)
        .map(|i| 7.0 + 14.0 * (i as f32 * 0.26).sin().abs())
        .collect();
    let direction: Vec<f32> = (0..HOURS).map(|i| ((i * 23) % 360) as f32).collect();

    let mut daily_dates = Vec::new();
    for time in &times {
        if daily_dates.last() != Some(&time.date()) {
            daily_dates.push(time.date());
        }
    }

    let current_idx = times.iter().position(|t| *t >= now).unwrap_or(0);

    ForecastPayload {
        hourly: HourlyBlock {
            time: times
                .iter()
                .map(|t| t.format("%Y-%m-%dT%H:%M").to_string())
                .collect(),
            temperature_2m: temperature.clone(),
            apparent_temperature: Some(
                temperature
                    .iter()
                    .zip(&wind)
                    .map(|(t, w)| Some(t - w * 0.08))
                    .collect(),
            ),
            dewpoint_2m: Some(dewpoint),
            precipitation: precipitation.clone(),
            rain: Some(rain.into_iter().map(Some).collect()),
            showers: None,
            snowfall: Some(snowfall.into_iter().map(Some).collect()),
            cloudcover: cloud.clone(),
            windspeed_10m: wind.clone(),
            winddirection_10m: direction,
        },
        daily: Some(DailyBlock {
            time: daily_dates
                .iter()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .collect(),
            sunrise: daily_dates
                .iter()
                .map(|d| format!("{}T07:28", d.format("%Y-%m-%d")))
                .collect(),
            sunset: daily_dates
                .iter()
                .map(|d| format!("{}T16:42", d.format("%Y-%m-%d")))
                .collect(),
        }),
        current: Some(CurrentBlock {
            temperature_2m: temperature[current_idx],
            windspeed_10m: wind[current_idx],
            cloudcover: cloud[current_idx],
        }),
    }
}

fn diurnal_temp(time: &NaiveDateTime) -> f32 {
    let hour = time.hour() as f32 + time.minute() as f32 / 60.0;
    let phase = (hour - 14.0) / 24.0 * std::f32::consts::TAU;
    2.5 + 5.5 * phase.cos()
}

fn cloud_cover(i: usize) -> f32 {
    let wave = ((i as f32 * 0.35).sin() + 1.0) / 2.0;
    // Mostly clear late morning on the first day so sunny intervals show up.
    if (4..8).contains(&i) {
        (wave * 20.0).min(15.0)
    } else {
        20.0 + wave * 80.0
    }
}
