use crate::chart::precip::snow_ratio;
use crate::chart::primitives::{FillStyle, Primitive};
use crate::chart::scale::ChartScales;
use crate::domain::weather::HourlyRow;

/// Fixed bar width in pixels; bars center on the row's time-scale x.
const BAR_WIDTH: f64 = 6.0;

/// One paired liquid/solid bar per precipitating row. The snow ratio splits
/// the bar into a liquid part anchored at the plot floor and a solid part
/// stacked above it; the liquid part is emitted first.
#[must_use]
pub fn render(rows: &[HourlyRow], scales: &ChartScales) -> Vec<Primitive> {
    let mut primitives = Vec::new();
    for row in rows {
        if row.precipitation <= 0.0 {
            continue;
        }
        let bar_height = scales.y_max - scales.precipitation.scale(f64::from(row.precipitation));
        if bar_height <= 0.0 {
            continue;
        }

        let ratio = f64::from(snow_ratio(row));
        let solid_height = bar_height * ratio;
        let liquid_height = bar_height - solid_height;
        let x = scales.time.scale(row.time) - BAR_WIDTH / 2.0;

        if liquid_height > 0.0 {
            primitives.push(Primitive::Rect {
                x,
                y: scales.y_max - liquid_height,
                width: BAR_WIDTH,
                height: liquid_height,
                style: FillStyle::PrecipLiquid,
            });
        }
        if solid_height > 0.0 {
            primitives.push(Primitive::Rect {
                x,
                y: scales.y_max - bar_height,
                width: BAR_WIDTH,
                height: solid_height,
                style: FillStyle::PrecipSolid,
            });
        }
    }
    primitives
}
