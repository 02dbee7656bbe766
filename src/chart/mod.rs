pub mod cursor;
pub mod curve;
pub mod jitter;
pub mod layers;
pub mod night;
pub mod outlook;
pub mod precip;
pub mod primitives;
pub mod scale;
pub mod sunny;

use chrono::{NaiveDateTime, Timelike};

use crate::domain::weather::{Dataset, UnitSystem};

use self::night::night_intervals;
use self::primitives::{FillStyle, LabelStyle, PathStyle, Primitive};
use self::scale::ChartScales;

/// Viewports narrower than this render nothing instead of emitting
/// NaN-laden geometry.
const MIN_WIDTH: f64 = 10.0;

/// Axis label inset below the plot floor.
const AXIS_LABEL_DY: f64 = 4.0;
const AXIS_LABEL_DX: f64 = 4.0;

/// Pixel insets around the inner chart box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const MARGIN: Margin = Margin {
    top: 8.0,
    right: 0.0,
    bottom: 8.0,
    left: 0.0,
};

impl Default for Margin {
    fn default() -> Self {
        MARGIN
    }
}

/// Target pixel box handed in by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: MARGIN,
        }
    }
}

/// All drawable primitives of one render, grouped per layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartFrame {
    pub night: Vec<Primitive>,
    pub chrome: Vec<Primitive>,
    pub cloud: Vec<Primitive>,
    pub precipitation: Vec<Primitive>,
    pub temperature: Vec<Primitive>,
    pub wind: Vec<Primitive>,
}

impl ChartFrame {
    /// Layers in paint order, background first.
    #[must_use]
    pub fn layers(&self) -> [&[Primitive]; 6] {
        [
            &self.night,
            &self.chrome,
            &self.cloud,
            &self.precipitation,
            &self.temperature,
            &self.wind,
        ]
    }
}

/// One fully derived meteogram: the scale set plus the primitives of every
/// layer. Rebuilt from scratch whenever the dataset, viewport, unit system,
/// or "now" changes; building twice from identical inputs yields identical
/// output.
#[derive(Debug, Clone, PartialEq)]
pub struct Meteogram {
    pub viewport: Viewport,
    pub scales: ChartScales,
    pub frame: ChartFrame,
}

impl Meteogram {
    /// Runs the whole transform pipeline. Returns `None` for an empty
    /// dataset or a degenerate viewport; both mean "draw nothing", not an
    /// error.
    #[must_use]
    pub fn build(
        dataset: &Dataset,
        viewport: &Viewport,
        units: UnitSystem,
        now: NaiveDateTime,
    ) -> Option<Self> {
        if viewport.width < MIN_WIDTH || viewport.height <= 0.0 {
            return None;
        }
        let scales = ChartScales::build(&dataset.hourly, viewport)?;
        let frame = ChartFrame {
            night: night_layer(dataset, &scales),
            chrome: chrome_layer(&scales, now),
            cloud: layers::cloud::render(&dataset.hourly, &dataset.daily, &scales),
            precipitation: layers::precipitation::render(&dataset.hourly, &scales),
            temperature: layers::temperature::render(&dataset.hourly, &scales, units),
            wind: layers::wind::render(&dataset.hourly, &scales),
        };
        Some(Self {
            viewport: *viewport,
            scales,
            frame,
        })
    }
}

fn night_layer(dataset: &Dataset, scales: &ChartScales) -> Vec<Primitive> {
    night_intervals(&dataset.daily, &scales.time)
        .into_iter()
        .map(|interval| Primitive::Rect {
            x: interval.x0,
            y: 0.0,
            width: interval.width(),
            height: scales.y_max,
            style: FillStyle::NightShade,
        })
        .collect()
}

/// Gridlines and axis labels at time ticks (midnight emphasized with the
/// weekday), plus the current-time marker when "now" is on the chart.
fn chrome_layer(scales: &ChartScales, now: NaiveDateTime) -> Vec<Primitive> {
    let mut primitives = Vec::new();
    for tick in scales.time.ticks(8) {
        let x = scales.time.scale(tick);
        let midnight = tick.hour() == 0;
        primitives.push(Primitive::Path {
            points: vec![(x, 0.0), (x, scales.y_max)],
            style: if midnight {
                PathStyle::GridMajor
            } else {
                PathStyle::GridMinor
            },
        });
        let (text, style) = if midnight {
            (
                tick.format("%a").to_string().to_uppercase(),
                LabelStyle::AxisDay,
            )
        } else {
            (tick.hour().to_string(), LabelStyle::AxisHour)
        };
        primitives.push(Primitive::Label {
            x: x + AXIS_LABEL_DX,
            y: scales.y_max + AXIS_LABEL_DY,
            text,
            style,
        });
    }

    if now >= scales.time.start() && now <= scales.time.end() {
        let x = scales.time.scale(now);
        primitives.push(Primitive::Path {
            points: vec![(x, 0.0), (x, scales.y_max)],
            style: PathStyle::CurrentTime,
        });
    }
    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weather::parse_datetime;
    use crate::test_fixtures::{daily_row, hourly_series};

    fn dataset() -> Dataset {
        let mut rows = hourly_series("2026-02-12T00:00", 48);
        rows[10].precipitation = 1.2;
        rows[10].rain = 1.2;
        Dataset {
            hourly: rows,
            daily: vec![
                daily_row("2026-02-12", "07:30", "16:45"),
                daily_row("2026-02-13", "07:28", "16:47"),
            ],
            current: None,
        }
    }

    fn noon() -> NaiveDateTime {
        parse_datetime("2026-02-12T12:00").expect("fixture time")
    }

    #[test]
    fn build_produces_every_layer() {
        let meteogram = Meteogram::build(
            &dataset(),
            &Viewport::new(470.0, 120.0),
            UnitSystem::Metric,
            noon(),
        )
        .expect("meteogram");
        for layer in meteogram.frame.layers() {
            assert!(!layer.is_empty());
        }
    }

    #[test]
    fn empty_dataset_builds_nothing() {
        let empty = Dataset::default();
        assert!(
            Meteogram::build(&empty, &Viewport::new(470.0, 120.0), UnitSystem::Metric, noon())
                .is_none()
        );
    }

    #[test]
    fn degenerate_viewport_builds_nothing() {
        assert!(
            Meteogram::build(&dataset(), &Viewport::new(9.0, 120.0), UnitSystem::Metric, noon())
                .is_none()
        );
        assert!(
            Meteogram::build(&dataset(), &Viewport::new(470.0, 0.0), UnitSystem::Metric, noon())
                .is_none()
        );
    }

    #[test]
    fn pipeline_is_idempotent() {
        let dataset = dataset();
        let viewport = Viewport::new(470.0, 120.0);
        let a = Meteogram::build(&dataset, &viewport, UnitSystem::Metric, noon());
        let b = Meteogram::build(&dataset, &viewport, UnitSystem::Metric, noon());
        assert_eq!(a, b);
    }

    #[test]
    fn current_time_marker_requires_now_on_chart() {
        let dataset = dataset();
        let viewport = Viewport::new(470.0, 120.0);
        let on_chart =
            Meteogram::build(&dataset, &viewport, UnitSystem::Metric, noon()).expect("meteogram");
        assert!(on_chart.frame.chrome.iter().any(|p| matches!(
            p,
            Primitive::Path {
                style: PathStyle::CurrentTime,
                ..
            }
        )));

        let later = parse_datetime("2026-03-01T00:00").expect("fixture time");
        let off_chart =
            Meteogram::build(&dataset, &viewport, UnitSystem::Metric, later).expect("meteogram");
        assert!(!off_chart.frame.chrome.iter().any(|p| matches!(
            p,
            Primitive::Path {
                style: PathStyle::CurrentTime,
                ..
            }
        )));
    }

    #[test]
    fn midnight_ticks_are_major_with_weekday_labels() {
        let meteogram = Meteogram::build(
            &dataset(),
            &Viewport::new(470.0, 120.0),
            UnitSystem::Metric,
            noon(),
        )
        .expect("meteogram");
        assert!(meteogram.frame.chrome.iter().any(|p| matches!(
            p,
            Primitive::Path {
                style: PathStyle::GridMajor,
                ..
            }
        )));
        assert!(meteogram.frame.chrome.iter().any(|p| matches!(
            p,
            Primitive::Label { text, style: LabelStyle::AxisDay, .. } if text == "THU"
        )));
    }
}
