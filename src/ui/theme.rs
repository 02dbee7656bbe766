use ratatui::style::Color;

/// Color assignments for the chart layers and chrome. One dark palette,
/// matching the hues of the web incarnation of this chart.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub muted_text: Color,
    pub temperature: Color,
    pub temperature_area: Color,
    pub dew_point: Color,
    pub precip_liquid: Color,
    pub precip_solid: Color,
    pub cloud: Color,
    pub sunny: Color,
    pub night: Color,
    pub wind: Color,
    pub grid_major: Color,
    pub grid_minor: Color,
    pub cursor: Color,
    pub current_time: Color,
    pub day_label: Color,
    pub tooltip_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::White,
            muted_text: Color::DarkGray,
            temperature: Color::Rgb(251, 191, 36),
            temperature_area: Color::Rgb(120, 85, 25),
            dew_point: Color::Rgb(34, 211, 238),
            precip_liquid: Color::Rgb(96, 165, 250),
            precip_solid: Color::Rgb(226, 232, 240),
            cloud: Color::Rgb(148, 163, 184),
            sunny: Color::Rgb(253, 224, 71),
            night: Color::Rgb(51, 65, 85),
            wind: Color::Rgb(239, 68, 68),
            grid_major: Color::Gray,
            grid_minor: Color::Rgb(71, 85, 105),
            cursor: Color::White,
            current_time: Color::Rgb(203, 213, 225),
            day_label: Color::White,
            tooltip_border: Color::Gray,
        }
    }
}
