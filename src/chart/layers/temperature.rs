use chrono::Datelike;

use crate::chart::curve::monotone_polyline;
use crate::chart::primitives::{FillStyle, LabelStyle, PathStyle, Point, Primitive};
use crate::chart::scale::ChartScales;
use crate::domain::weather::{HourlyRow, UnitSystem, format_temp};

/// Vertical label offsets relative to the anchored curve point.
const MAX_LABEL_DY: f64 = -10.0;
const MIN_LABEL_DY: f64 = 20.0;

/// Temperature layer: dew-point curve (dashed), filled area from the
/// temperature curve down to the plot floor, the stroked temperature curve,
/// and min/max labels per calendar day.
#[must_use]
pub fn render(rows: &[HourlyRow], scales: &ChartScales, units: UnitSystem) -> Vec<Primitive> {
    if rows.is_empty() {
        return Vec::new();
    }

    let temp_knots: Vec<Point> = rows
        .iter()
        .map(|row| {
            (
                scales.time.scale(row.time),
                scales.temperature.scale(f64::from(row.temperature)),
            )
        })
        .collect();
    let dew_knots: Vec<Point> = rows
        .iter()
        .map(|row| {
            (
                scales.time.scale(row.time),
                scales.temperature.scale(f64::from(row.dew_point)),
            )
        })
        .collect();

    let temp_curve = monotone_polyline(&temp_knots);
    let mut primitives = vec![
        Primitive::Path {
            points: monotone_polyline(&dew_knots),
            style: PathStyle::DewPoint,
        },
        Primitive::Area {
            top: temp_curve.clone(),
            baseline: scales.y_max,
            style: FillStyle::TemperatureArea,
        },
        Primitive::Path {
            points: temp_curve,
            style: PathStyle::Temperature,
        },
    ];
    primitives.extend(day_extreme_labels(rows, scales, units));
    primitives
}

/// One max and one min label per local day-of-month, anchored above the
/// day's peak and below its trough. Ties keep the earliest sample.
fn day_extreme_labels(
    rows: &[HourlyRow],
    scales: &ChartScales,
    units: UnitSystem,
) -> Vec<Primitive> {
    let mut days: Vec<u32> = Vec::new();
    for row in rows {
        if !days.contains(&row.time.day()) {
            days.push(row.time.day());
        }
    }

    let mut labels = Vec::new();
    for day in days {
        let mut day_rows = rows.iter().filter(|row| row.time.day() == day);
        let Some(first) = day_rows.next() else {
            continue;
        };
        let mut coldest = first;
        let mut warmest = first;
        for row in day_rows {
            if row.temperature < coldest.temperature {
                coldest = row;
            }
            if row.temperature > warmest.temperature {
                warmest = row;
            }
        }

        labels.push(extreme_label(warmest, scales, units, MAX_LABEL_DY, LabelStyle::DayMax));
        labels.push(extreme_label(coldest, scales, units, MIN_LABEL_DY, LabelStyle::DayMin));
    }
    labels
}

fn extreme_label(
    row: &HourlyRow,
    scales: &ChartScales,
    units: UnitSystem,
    dy: f64,
    style: LabelStyle,
) -> Primitive {
    Primitive::Label {
        x: scales.time.scale(row.time),
        y: scales.temperature.scale(f64::from(row.temperature)) + dy,
        text: format!("{}°", format_temp(row.temperature, units)),
        style,
    }
}
