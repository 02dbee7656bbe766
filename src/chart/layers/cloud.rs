use crate::chart::curve::monotone_polyline;
use crate::chart::jitter::particle_plan;
use crate::chart::precip::snow_ratio;
use crate::chart::primitives::{FillStyle, GlyphKind, Point, Primitive};
use crate::chart::scale::ChartScales;
use crate::chart::sunny::sunny_ranges;
use crate::domain::weather::{DailyRow, HourlyRow};

/// Sunny highlight geometry relative to the band center.
const PILL_DY: f64 = -22.0;
const PILL_HEIGHT: f64 = 8.0;
/// Particle stack geometry below the band's lower envelope.
const PARTICLE_TOP_GAP: f64 = 5.0;
const PARTICLE_SPACING: f64 = 11.0;

/// Cloud layer: a symmetric envelope centered at 12% of plot height,
/// sunny-interval highlights above it, and rain/snow particle glyphs
/// stacked beneath it at each precipitating row. Particle placement is
/// deterministic per row, so re-renders are pixel-identical.
#[must_use]
pub fn render(rows: &[HourlyRow], daily: &[DailyRow], scales: &ChartScales) -> Vec<Primitive> {
    if rows.is_empty() {
        return Vec::new();
    }

    let mut upper: Vec<Point> = Vec::with_capacity(rows.len());
    let mut lower: Vec<Point> = Vec::with_capacity(rows.len());
    for row in rows {
        let x = scales.time.scale(row.time);
        let amplitude = scales.cloud.scale(f64::from(row.cloud_cover));
        upper.push((x, scales.cloud_center_y - amplitude));
        lower.push((x, scales.cloud_center_y + amplitude));
    }

    let mut primitives = vec![Primitive::Band {
        upper: monotone_polyline(&upper),
        lower: monotone_polyline(&lower),
        style: FillStyle::CloudBand,
    }];

    for range in sunny_ranges(rows, daily, &scales.time) {
        primitives.push(Primitive::Rect {
            x: range.x0,
            y: scales.cloud_center_y + PILL_DY,
            width: range.width(),
            height: PILL_HEIGHT,
            style: FillStyle::SunnyHighlight,
        });
    }

    for row in rows {
        if row.precipitation <= 0.0 {
            continue;
        }
        let x = scales.time.scale(row.time);
        let band_bottom = scales.cloud_center_y + scales.cloud.scale(f64::from(row.cloud_cover));
        let plan = particle_plan(&row.time_key(), row.precipitation, snow_ratio(row));
        for (stack, spec) in plan.iter().enumerate() {
            primitives.push(Primitive::Glyph {
                x: x + f64::from(spec.jitter),
                y: band_bottom + PARTICLE_TOP_GAP + stack as f64 * PARTICLE_SPACING,
                kind: if spec.snow {
                    GlyphKind::Snowflake
                } else {
                    GlyphKind::Droplet
                },
            });
        }
    }

    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{daily_row, hourly_series, viewport};

    fn scales(rows: &[HourlyRow]) -> ChartScales {
        ChartScales::build(rows, &viewport(470.0, 100.0)).expect("scales")
    }

    #[test]
    fn band_is_symmetric_around_the_center() {
        let rows = hourly_series("2026-02-12T00:00", 6);
        let scales = scales(&rows);
        let primitives = render(&rows, &[], &scales);
        let Primitive::Band { upper, lower, .. } = &primitives[0] else {
            panic!("expected the cloud band first");
        };
        for (up, low) in upper.iter().zip(lower) {
            let up_offset = scales.cloud_center_y - up.1;
            let low_offset = low.1 - scales.cloud_center_y;
            assert!((up_offset - low_offset).abs() < 1e-6);
        }
    }

    #[test]
    fn particle_count_follows_intensity() {
        let mut rows = hourly_series("2026-02-12T00:00", 4);
        rows[1].precipitation = 1.3;
        rows[1].rain = 1.3;
        let primitives = render(&rows, &[], &scales(&rows));
        let glyphs = primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Glyph { .. }))
            .count();
        assert_eq!(glyphs, 3);
    }

    #[test]
    fn particles_stack_downward_from_the_band() {
        let mut rows = hourly_series("2026-02-12T00:00", 4);
        rows[2].precipitation = 2.0;
        rows[2].snowfall = 2.0;
        let scales = scales(&rows);
        let band_bottom =
            scales.cloud_center_y + scales.cloud.scale(f64::from(rows[2].cloud_cover));
        let ys: Vec<f64> = render(&rows, &[], &scales)
            .iter()
            .filter_map(|p| match p {
                Primitive::Glyph { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(ys.len(), 4);
        for (stack, y) in ys.iter().enumerate() {
            assert!((y - (band_bottom + 5.0 + stack as f64 * 11.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn snow_hours_emit_snowflakes() {
        let mut rows = hourly_series("2026-02-12T00:00", 4);
        rows[1].precipitation = 1.0;
        rows[1].snowfall = 1.0;
        let primitives = render(&rows, &[], &scales(&rows));
        assert!(primitives.iter().any(|p| matches!(
            p,
            Primitive::Glyph {
                kind: GlyphKind::Snowflake,
                ..
            }
        )));
    }

    #[test]
    fn re_rendering_is_pixel_identical() {
        let mut rows = hourly_series("2026-02-12T00:00", 12);
        for idx in [3, 4, 7] {
            rows[idx].precipitation = 1.5;
            rows[idx].rain = 1.5;
        }
        let daily = vec![daily_row("2026-02-12", "07:30", "16:45")];
        let scales = scales(&rows);
        assert_eq!(render(&rows, &daily, &scales), render(&rows, &daily, &scales));
    }

    #[test]
    fn sunny_highlights_sit_above_the_band() {
        let mut rows = hourly_series("2026-02-12T00:00", 24);
        for row in &mut rows {
            row.cloud_cover = 100.0;
        }
        rows[11].cloud_cover = 10.0;
        let daily = vec![daily_row("2026-02-12", "07:30", "16:45")];
        let scales = scales(&rows);
        let primitives = render(&rows, &daily, &scales);
        let Some(Primitive::Rect { y, style, .. }) = primitives
            .iter()
            .find(|p| matches!(p, Primitive::Rect { .. }))
        else {
            panic!("expected a sunny pill");
        };
        assert_eq!(*style, FillStyle::SunnyHighlight);
        assert!((y - (scales.cloud_center_y - 22.0)).abs() < 1e-9);
    }
}
