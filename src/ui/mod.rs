pub mod canvas;
pub mod layout;
pub mod theme;

use chrono::NaiveDateTime;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::state::{AppMode, AppState};
use crate::chart::cursor::ActiveSample;
use crate::chart::outlook::{PrecipEvent, next_precip_event};
use crate::chart::precip::PrecipKind;
use crate::chart::{Meteogram, Viewport};
use crate::domain::weather::{
    UnitSystem, compass_label, format_precip, format_speed, format_temp, precip_unit_label,
    speed_unit_label, temp_unit_label,
};

use self::theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    if layout::is_too_small(area) {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {}x{}.",
            layout::MIN_COLS,
            layout::MIN_ROWS
        ))
        .block(Block::default().borders(Borders::ALL).title("meteogram"));
        frame.render_widget(warning, area);
        return;
    }

    match state.mode {
        AppMode::Loading => {
            frame.render_widget(
                Paragraph::new("Loading forecast...").alignment(Alignment::Center),
                area,
            );
        }
        AppMode::Error => {
            let message = state
                .last_error
                .clone()
                .unwrap_or_else(|| "unknown error".to_string());
            let error = Paragraph::new(message)
                .style(Style::default().fg(ratatui::style::Color::LightRed))
                .block(Block::default().borders(Borders::ALL).title("forecast error"));
            frame.render_widget(error, layout::panes(area).chart);
        }
        AppMode::Ready | AppMode::Quit => render_ready(frame, state, &theme),
    }
}

fn render_ready(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let panes = layout::panes(frame.area());
    render_header(frame, panes.header, state, theme);
    render_footer(frame, panes.footer, state, theme);

    let (width, height) = canvas::plot_size(panes.chart);
    let viewport = Viewport::new(width, height);
    let Some(meteogram) = Meteogram::build(&state.dataset, &viewport, state.units, state.now)
    else {
        frame.render_widget(
            Paragraph::new("No forecast data.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted_text)),
            panes.chart,
        );
        return;
    };

    canvas::render_chart(frame, panes.chart, &meteogram, &state.tooltip, theme);
    if let Some(sample) = state.tooltip.active() {
        render_tooltip(frame, panes.chart, &meteogram, sample, state.units, theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let title = Line::from(vec![
        Span::styled(
            "meteogram",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {}", state.source_label),
            Style::default().fg(theme.muted_text),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);

    if let Some(current) = &state.dataset.current {
        let summary = Line::from(vec![
            Span::styled(
                format!(
                    "{}{}",
                    format_temp(current.temperature, state.units),
                    temp_unit_label(state.units)
                ),
                Style::default().fg(theme.temperature),
            ),
            Span::styled(
                format!(
                    "  wind {} {}",
                    format_speed(current.wind_speed, state.units),
                    speed_unit_label(state.units)
                ),
                Style::default().fg(theme.muted_text),
            ),
            Span::styled(
                format!("  cloud {:.0}%", current.cloud_cover),
                Style::default().fg(theme.muted_text),
            ),
        ]);
        let width = summary.width() as u16;
        frame.render_widget(Paragraph::new(summary), right_aligned(area, width));
    }
}

/// Content-sized sub-rect hugging the right edge, so right-hand overlays
/// don't blank the text underneath the rest of the row.
fn right_aligned(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height: area.height,
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if let Some(event) = next_precip_event(&state.dataset.hourly, state.now) {
        let color = match event {
            PrecipEvent::Starts {
                kind: PrecipKind::Snow,
                ..
            }
            | PrecipEvent::Ends {
                kind: PrecipKind::Snow,
                ..
            }
            | PrecipEvent::Changes {
                to: PrecipKind::Snow,
                ..
            } => theme.precip_solid,
            _ => theme.precip_liquid,
        };
        frame.render_widget(
            Paragraph::new(Line::styled(
                outlook_line(&event, state.now),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            area,
        );
    }

    let hints = Line::styled("u units · q quit", Style::default().fg(theme.muted_text));
    let width = hints.width() as u16;
    frame.render_widget(Paragraph::new(hints), right_aligned(area, width));
}

fn render_tooltip(
    frame: &mut Frame,
    chart: Rect,
    meteogram: &Meteogram,
    sample: &ActiveSample,
    units: UnitSystem,
    theme: &Theme,
) {
    let row = &sample.row;
    let lines = vec![
        Line::from(format!(
            "Temp  {}{}",
            format_temp(row.temperature, units),
            temp_unit_label(units)
        )),
        Line::from(format!(
            "Rain  {} {}",
            format_precip(row.precipitation, units),
            precip_unit_label(units)
        )),
        Line::from(format!(
            "Wind  {} {} {}",
            format_speed(row.wind_speed, units),
            speed_unit_label(units),
            compass_label(row.wind_direction)
        )),
        Line::from(format!("Cloud {:.0}%", row.cloud_cover)),
    ];
    let width = 18u16;
    let height = lines.len() as u16 + 2;

    let margin = meteogram.viewport.margin;
    let anchor_col = chart.x
        + ((margin.left + sample.anchor_x) / canvas::PX_PER_COL).round() as u16;
    let anchor_row = chart.y
        + ((margin.top + sample.anchor_y) / canvas::PX_PER_ROW).round() as u16;

    // Prefer the right side of the cursor; flip when it would overflow.
    let x = if anchor_col + 2 + width <= chart.right() {
        anchor_col + 2
    } else {
        anchor_col.saturating_sub(width + 2).max(chart.x)
    };
    let y = anchor_row
        .min(chart.bottom().saturating_sub(height))
        .max(chart.y);
    let popup = Rect::new(x, y, width.min(chart.width), height.min(chart.height));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.tooltip_border))
        .title(Span::styled(
            row.time.format("%H:%M").to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Status-line text for the next precipitation change, e.g.
/// "Rain ending in ~2 h".
#[must_use]
pub fn outlook_line(event: &PrecipEvent, now: NaiveDateTime) -> String {
    let when = relative_label(now, event.time());
    match event {
        PrecipEvent::Starts { kind, .. } => format!("{} {when}", kind_label(*kind)),
        PrecipEvent::Ends { kind, .. } => format!("{} ending {when}", kind_label(*kind)),
        PrecipEvent::Changes { from, to, .. } => {
            format!("{} → {} {when}", kind_label(*from), kind_label(*to))
        }
    }
}

fn kind_label(kind: PrecipKind) -> &'static str {
    match kind {
        PrecipKind::Rain => "Rain",
        PrecipKind::Snow => "Snow",
    }
}

fn relative_label(now: NaiveDateTime, time: NaiveDateTime) -> String {
    let minutes = (time - now).num_minutes();
    if minutes <= 0 {
        "now".to_string()
    } else if minutes < 60 {
        format!("in {minutes} min")
    } else {
        let hours = (minutes as f64 / 60.0).round() as i64;
        format!("in ~{hours} h")
    }
}
