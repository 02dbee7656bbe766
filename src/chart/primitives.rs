/// Plot-space point. The plot origin is the top-left corner of the inner
/// chart box; y grows downward, matching the inverted value scales.
pub type Point = (f64, f64);

/// A drawable primitive in plot coordinates. Layers emit lists of these;
/// the host maps styles to actual colors and glyph characters.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Stroked polyline.
    Path { points: Vec<Point>, style: PathStyle },
    /// Filled region between a sampled curve and a horizontal baseline.
    Area {
        top: Vec<Point>,
        baseline: f64,
        style: FillStyle,
    },
    /// Filled region between two curves sampled at the same x positions.
    Band {
        upper: Vec<Point>,
        lower: Vec<Point>,
        style: FillStyle,
    },
    /// Axis-aligned filled rectangle.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: FillStyle,
    },
    /// Positioned pictogram.
    Glyph { x: f64, y: f64, kind: GlyphKind },
    /// Positioned text, horizontally centered on x.
    Label {
        x: f64,
        y: f64,
        text: String,
        style: LabelStyle,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Temperature,
    DewPoint,
    Wind,
    GridMinor,
    GridMajor,
    CurrentTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStyle {
    TemperatureArea,
    NightShade,
    SunnyHighlight,
    CloudBand,
    PrecipLiquid,
    PrecipSolid,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphKind {
    Droplet,
    Snowflake,
    /// Marker rotated to the bearing the wind blows toward, in degrees.
    WindArrow { degrees: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    DayMax,
    DayMin,
    AxisDay,
    AxisHour,
}
