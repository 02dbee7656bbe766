use crate::chart::curve::{monotone_polyline, occlude_polyline};
use crate::chart::primitives::{GlyphKind, PathStyle, Point, Primitive};
use crate::chart::scale::ChartScales;
use crate::domain::weather::HourlyRow;

/// Directional markers sit at every second sample.
const MARKER_STRIDE: usize = 2;
/// Occlusion radius around each marker so the speed curve doesn't run
/// through the arrows.
const MARKER_GAP_RADIUS: f64 = 10.0;

/// Wind layer: the smoothed speed curve, split into sub-paths that skip a
/// circular gap around every marker, plus one direction arrow per marker.
/// Arrows rotate by `wind_direction + 180` since the bearing is "wind from".
#[must_use]
pub fn render(rows: &[HourlyRow], scales: &ChartScales) -> Vec<Primitive> {
    let knots: Vec<Point> = rows
        .iter()
        .map(|row| {
            (
                scales.time.scale(row.time),
                scales.wind.scale(f64::from(row.wind_speed)),
            )
        })
        .collect();
    let markers: Vec<Point> = knots.iter().copied().step_by(MARKER_STRIDE).collect();

    let mut primitives: Vec<Primitive> =
        occlude_polyline(&monotone_polyline(&knots), &markers, MARKER_GAP_RADIUS)
            .into_iter()
            .map(|points| Primitive::Path {
                points,
                style: PathStyle::Wind,
            })
            .collect();

    for (marker, row) in markers.iter().zip(rows.iter().step_by(MARKER_STRIDE)) {
        primitives.push(Primitive::Glyph {
            x: marker.0,
            y: marker.1,
            kind: GlyphKind::WindArrow {
                degrees: row.wind_direction + 180.0,
            },
        });
    }
    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{hourly_series, viewport};

    fn scales(rows: &[HourlyRow]) -> ChartScales {
        ChartScales::build(rows, &viewport(470.0, 100.0)).expect("scales")
    }

    #[test]
    fn markers_sit_on_every_second_sample() {
        let rows = hourly_series("2026-02-12T00:00", 8);
        let primitives = render(&rows, &scales(&rows));
        let arrows = primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Glyph { .. }))
            .count();
        assert_eq!(arrows, 4);
    }

    #[test]
    fn arrows_point_with_the_wind() {
        let mut rows = hourly_series("2026-02-12T00:00", 2);
        rows[0].wind_direction = 90.0;
        let primitives = render(&rows, &scales(&rows));
        let degrees = primitives
            .iter()
            .find_map(|p| match p {
                Primitive::Glyph {
                    kind: GlyphKind::WindArrow { degrees },
                    ..
                } => Some(*degrees),
                _ => None,
            })
            .expect("arrow");
        assert_eq!(degrees, 270.0);
    }

    #[test]
    fn speed_curve_is_split_around_markers() {
        let rows = hourly_series("2026-02-12T00:00", 12);
        let primitives = render(&rows, &scales(&rows));
        let paths = primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Path { .. }))
            .count();
        // Six markers punch gaps into the curve, leaving several sub-paths.
        assert!(paths > 1, "expected the curve to be split, got {paths} path(s)");
    }

    #[test]
    fn curve_points_stay_outside_the_gaps() {
        let rows = hourly_series("2026-02-12T00:00", 12);
        let scales = scales(&rows);
        let markers: Vec<Point> = rows
            .iter()
            .step_by(MARKER_STRIDE)
            .map(|row| {
                (
                    scales.time.scale(row.time),
                    scales.wind.scale(f64::from(row.wind_speed)),
                )
            })
            .collect();
        for primitive in render(&rows, &scales) {
            let Primitive::Path { points, .. } = primitive else {
                continue;
            };
            for point in points {
                for marker in &markers {
                    let distance = ((point.0 - marker.0).powi(2) + (point.1 - marker.1).powi(2))
                        .sqrt();
                    assert!(distance >= MARKER_GAP_RADIUS - 1e-6);
                }
            }
        }
    }
}
