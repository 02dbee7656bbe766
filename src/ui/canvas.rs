use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Context, Line as CanvasLine, Points},
};

use crate::chart::Meteogram;
use crate::chart::cursor::TooltipState;
use crate::chart::primitives::{FillStyle, GlyphKind, LabelStyle, PathStyle, Point, Primitive};

use super::theme::Theme;

/// Braille sub-cell resolution: the plot pixel space is twice as wide and
/// four times as tall as the cell grid.
pub const PX_PER_COL: f64 = 2.0;
pub const PX_PER_ROW: f64 = 4.0;

/// Pixel box corresponding to a terminal rect at braille resolution.
#[must_use]
pub fn plot_size(area: Rect) -> (f64, f64) {
    (
        f64::from(area.width) * PX_PER_COL,
        f64::from(area.height) * PX_PER_ROW,
    )
}

/// Rasterizes the chart frame onto a braille canvas, layers in paint order,
/// with the cursor line on top while the tooltip is active.
pub fn render_chart(
    frame: &mut Frame,
    area: Rect,
    meteogram: &Meteogram,
    tooltip: &TooltipState,
    theme: &Theme,
) {
    let (width, height) = plot_size(area);
    let painter = Painter {
        height,
        left: meteogram.viewport.margin.left,
        top: meteogram.viewport.margin.top,
        theme,
    };

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for layer in meteogram.frame.layers() {
                for primitive in layer {
                    painter.draw(ctx, primitive);
                }
                ctx.layer();
            }
            if let Some(sample) = tooltip.active() {
                painter.draw_cursor(ctx, sample.anchor_x, meteogram.scales.y_max);
            }
        });
    frame.render_widget(canvas, area);
}

struct Painter<'a> {
    height: f64,
    left: f64,
    top: f64,
    theme: &'a Theme,
}

impl Painter<'_> {
    /// Plot coordinates are y-down from the inner box origin; the canvas is
    /// y-up from the bottom-left viewport corner.
    fn to_canvas(&self, point: Point) -> Point {
        (self.left + point.0, self.height - (self.top + point.1))
    }

    fn draw(&self, ctx: &mut Context, primitive: &Primitive) {
        match primitive {
            Primitive::Path { points, style } => self.draw_path(ctx, points, *style),
            Primitive::Area {
                top,
                baseline,
                style,
            } => self.draw_area(ctx, top, *baseline, *style),
            Primitive::Band {
                upper,
                lower,
                style,
            } => self.draw_band(ctx, upper, lower, *style),
            Primitive::Rect {
                x,
                y,
                width,
                height,
                style,
            } => self.draw_rect(ctx, *x, *y, *width, *height, *style),
            Primitive::Glyph { x, y, kind } => self.draw_glyph(ctx, *x, *y, *kind),
            Primitive::Label { x, y, text, style } => self.draw_label(ctx, *x, *y, text, *style),
        }
    }

    fn draw_path(&self, ctx: &mut Context, points: &[Point], style: PathStyle) {
        let color = self.path_color(style);
        let pattern = dash_pattern(style);
        let mut travelled = 0.0;
        for window in points.windows(2) {
            let (a, b) = (window[0], window[1]);
            let length = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
            let draw = match pattern {
                Some((on, off)) => {
                    let phase = (travelled + length / 2.0) % (on + off);
                    phase < on
                }
                None => true,
            };
            travelled += length;
            if draw {
                self.stroke(ctx, a, b, color);
            }
        }
    }

    fn draw_area(&self, ctx: &mut Context, top: &[Point], baseline: f64, style: FillStyle) {
        let color = self.fill_color(style);
        for point in top {
            if point.1 < baseline {
                self.stroke(ctx, *point, (point.0, baseline), color);
            }
        }
    }

    fn draw_band(&self, ctx: &mut Context, upper: &[Point], lower: &[Point], style: FillStyle) {
        let color = self.fill_color(style);
        for (up, low) in upper.iter().zip(lower) {
            self.stroke(ctx, *up, *low, color);
        }
    }

    fn draw_rect(
        &self,
        ctx: &mut Context,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: FillStyle,
    ) {
        let color = self.fill_color(style);
        if style == FillStyle::NightShade {
            // Sparse dot field: a darkening texture instead of a solid fill
            // that would bury the layers above.
            let mut coords = Vec::new();
            let mut px = x;
            while px < x + width {
                let mut py = y;
                while py < y + height {
                    coords.push(self.to_canvas((px, py)));
                    py += 6.0;
                }
                px += 3.0;
            }
            ctx.draw(&Points {
                coords: &coords,
                color,
            });
            return;
        }

        let mut px = x;
        while px < x + width {
            self.stroke(ctx, (px, y), (px, y + height), color);
            px += 1.0;
        }
    }

    fn draw_glyph(&self, ctx: &mut Context, x: f64, y: f64, kind: GlyphKind) {
        let (symbol, color) = match kind {
            GlyphKind::Droplet => ("•", self.theme.precip_liquid),
            GlyphKind::Snowflake => ("❄", self.theme.precip_solid),
            GlyphKind::WindArrow { degrees } => (arrow_glyph(degrees), self.theme.wind),
        };
        let (cx, cy) = self.to_canvas((x, y));
        ctx.print(cx, cy, Line::styled(symbol, Style::default().fg(color)));
    }

    fn draw_label(&self, ctx: &mut Context, x: f64, y: f64, text: &str, style: LabelStyle) {
        let (color, modifier, centered) = match style {
            LabelStyle::DayMax | LabelStyle::DayMin => {
                (self.theme.day_label, Modifier::BOLD, true)
            }
            LabelStyle::AxisDay => (self.theme.text, Modifier::BOLD, false),
            LabelStyle::AxisHour => (self.theme.muted_text, Modifier::empty(), false),
        };
        let (mut cx, cy) = self.to_canvas((x, y));
        if centered {
            cx -= text.chars().count() as f64 * PX_PER_COL / 2.0;
        }
        ctx.print(
            cx,
            cy,
            Line::styled(
                text.to_string(),
                Style::default().fg(color).add_modifier(modifier),
            ),
        );
    }

    fn draw_cursor(&self, ctx: &mut Context, anchor_x: f64, y_max: f64) {
        let pattern = (4.0, 2.0);
        let mut y = 0.0;
        while y < y_max {
            let end = (y + pattern.0).min(y_max);
            self.stroke(ctx, (anchor_x, y), (anchor_x, end), self.theme.cursor);
            y += pattern.0 + pattern.1;
        }
    }

    fn stroke(&self, ctx: &mut Context, a: Point, b: Point, color: Color) {
        let a = self.to_canvas(a);
        let b = self.to_canvas(b);
        ctx.draw(&CanvasLine {
            x1: a.0,
            y1: a.1,
            x2: b.0,
            y2: b.1,
            color,
        });
    }

    fn path_color(&self, style: PathStyle) -> Color {
        match style {
            PathStyle::Temperature => self.theme.temperature,
            PathStyle::DewPoint => self.theme.dew_point,
            PathStyle::Wind => self.theme.wind,
            PathStyle::GridMinor => self.theme.grid_minor,
            PathStyle::GridMajor => self.theme.grid_major,
            PathStyle::CurrentTime => self.theme.current_time,
        }
    }

    fn fill_color(&self, style: FillStyle) -> Color {
        match style {
            FillStyle::TemperatureArea => self.theme.temperature_area,
            FillStyle::NightShade => self.theme.night,
            FillStyle::SunnyHighlight => self.theme.sunny,
            FillStyle::CloudBand => self.theme.cloud,
            FillStyle::PrecipLiquid => self.theme.precip_liquid,
            FillStyle::PrecipSolid => self.theme.precip_solid,
        }
    }
}

fn dash_pattern(style: PathStyle) -> Option<(f64, f64)> {
    match style {
        PathStyle::DewPoint => Some((2.0, 4.0)),
        PathStyle::GridMinor => Some((4.0, 4.0)),
        _ => None,
    }
}

/// Eight-way arrow for a bearing in degrees, 0 pointing up/north.
#[must_use]
pub fn arrow_glyph(degrees: f32) -> &'static str {
    const ARROWS: [&str; 8] = ["↑", "↗", "→", "↘", "↓", "↙", "←", "↖"];
    let index = (degrees.rem_euclid(360.0) / 45.0).round() as usize % 8;
    ARROWS[index]
}
