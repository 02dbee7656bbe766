//! Full-app render checks through a test backend.

use clap::Parser;
use meteogram_tui::app::events::AppEvent;
use meteogram_tui::app::state::{AppMode, AppState};
use meteogram_tui::cli::Cli;
use meteogram_tui::domain::weather::parse_datetime;
use meteogram_tui::ui;
use ratatui::{Terminal, backend::TestBackend, layout::Rect};

fn ready_state(width: u16, height: u16) -> (AppState, Cli) {
    let cli = Cli::try_parse_from(["meteogram-tui", "--demo", "--no-persist"]).expect("cli");
    let now = parse_datetime("2026-02-12T12:30").expect("fixture time");
    let mut state = AppState::new(&cli, now, Rect::new(0, 0, width, height));
    state.handle_event(AppEvent::Bootstrap, &cli);
    assert_eq!(state.mode, AppMode::Ready);
    (state, cli)
}

fn render_to_string(width: u16, height: u16, state: &AppState) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|frame| ui::render(frame, state))
        .expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let mut lines = Vec::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

#[test]
fn ready_screen_shows_header_chart_and_hints() {
    let (state, _cli) = ready_state(100, 30);
    let screen = render_to_string(100, 30, &state);
    assert!(screen.contains("meteogram"));
    assert!(screen.contains("demo forecast"));
    assert!(screen.contains("u units · q quit"));
    // The braille canvas leaves visible marks in the chart pane.
    assert!(screen.lines().skip(1).any(|line| !line.is_empty()));
}

#[test]
fn tiny_terminal_asks_for_a_resize() {
    let (state, _cli) = ready_state(100, 30);
    let screen = render_to_string(30, 8, &state);
    assert!(screen.contains("Terminal too small"));
}

#[test]
fn hovering_the_chart_opens_the_tooltip() {
    let (mut state, _cli) = ready_state(100, 30);
    state.pointer_at(50, 12);
    assert!(state.tooltip.active().is_some());

    let screen = render_to_string(100, 30, &state);
    assert!(screen.contains("Temp"));
    assert!(screen.contains("Cloud"));
}

#[test]
fn unit_toggle_changes_rendered_labels() {
    let (mut state, _cli) = ready_state(100, 30);
    state.pointer_at(50, 12);
    let metric = render_to_string(100, 30, &state);
    assert!(metric.contains("°C"));

    state.units = state.units.toggled();
    let imperial = render_to_string(100, 30, &state);
    assert!(imperial.contains("°F"));
}

#[test]
fn renders_do_not_panic_across_sizes() {
    let (state, _cli) = ready_state(200, 50);
    for (width, height) in [(40, 12), (80, 24), (120, 40), (200, 50)] {
        let _ = render_to_string(width, height, &state);
    }
}

#[test]
fn error_mode_shows_the_failure() {
    let cli = Cli::try_parse_from([
        "meteogram-tui",
        "--input",
        "/nonexistent/forecast.json",
        "--no-persist",
    ])
    .expect("cli");
    let now = parse_datetime("2026-02-12T12:30").expect("fixture time");
    let mut state = AppState::new(&cli, now, Rect::new(0, 0, 100, 30));
    state.handle_event(AppEvent::Bootstrap, &cli);
    assert_eq!(state.mode, AppMode::Error);

    let screen = render_to_string(100, 30, &state);
    assert!(screen.contains("forecast error"));
}
