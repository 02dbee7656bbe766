use std::path::PathBuf;

use chrono::NaiveDateTime;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::{
    app::events::AppEvent,
    app::settings::{RuntimeSettings, load_runtime_settings, save_runtime_settings},
    chart::{MARGIN, Viewport, cursor::TooltipState, scale::ChartScales},
    cli::Cli,
    data::{
        demo::demo_payload,
        payload::{ForecastPayload, normalize},
    },
    domain::weather::{Dataset, UnitSystem},
    ui::{canvas, layout},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Error,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub last_error: Option<String>,
    pub dataset: Dataset,
    pub units: UnitSystem,
    pub tooltip: TooltipState,
    pub now: NaiveDateTime,
    pub source_label: String,
    pub terminal: Rect,
    settings_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(cli: &Cli, now: NaiveDateTime, terminal: Rect) -> Self {
        let (settings, settings_path) = load_runtime_settings(cli);
        Self {
            mode: AppMode::Loading,
            running: true,
            last_error: None,
            dataset: Dataset::default(),
            units: settings.units,
            tooltip: TooltipState::default(),
            now,
            source_label: String::new(),
            terminal,
            settings_path,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent, cli: &Cli) {
        match event {
            AppEvent::Bootstrap => self.bootstrap(cli),
            AppEvent::Input(input) => self.handle_input(input),
        }
    }

    /// Loads and normalizes the forecast payload. A malformed payload is
    /// fatal for the render: the app surfaces the error instead of drawing
    /// a chart from misaligned arrays.
    fn bootstrap(&mut self, cli: &Cli) {
        let loaded: anyhow::Result<(Dataset, String)> = (|| {
            let (payload, label) = match &cli.input {
                Some(path) => (ForecastPayload::from_path(path)?, path.display().to_string()),
                None => (demo_payload(self.now), "demo forecast".to_string()),
            };
            Ok((normalize(&payload)?, label))
        })();

        match loaded {
            Ok((dataset, label)) => {
                self.dataset = dataset;
                self.source_label = label;
                self.tooltip.pointer_leave();
                self.mode = AppMode::Ready;
            }
            Err(error) => {
                self.last_error = Some(format!("{error:#}"));
                self.mode = AppMode::Error;
            }
        }
    }

    fn handle_input(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.mode = AppMode::Quit,
                KeyCode::Char('u') => self.toggle_units(),
                _ => {}
            },
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                self.terminal = Rect::new(0, 0, width, height);
            }
            Event::FocusLost => self.tooltip.pointer_leave(),
            _ => {}
        }
    }

    fn toggle_units(&mut self) {
        self.units = self.units.toggled();
        if let Some(path) = &self.settings_path {
            // Persistence is best-effort; the toggle applies either way.
            let _ = save_runtime_settings(path, RuntimeSettings { units: self.units });
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if matches!(
            mouse.kind,
            MouseEventKind::Moved | MouseEventKind::Drag(_)
        ) {
            self.pointer_at(mouse.column, mouse.row);
        }
    }

    /// Maps a terminal cell position onto the plot pixel space and feeds the
    /// bisection engine; positions outside the chart clear the tooltip.
    pub fn pointer_at(&mut self, column: u16, row: u16) {
        if self.mode != AppMode::Ready {
            return;
        }
        let chart = layout::panes(self.terminal).chart;
        if !chart.contains(Position::new(column, row)) {
            self.tooltip.pointer_leave();
            return;
        }

        let (width, height) = canvas::plot_size(chart);
        let viewport = Viewport::new(width, height);
        let Some(scales) = ChartScales::build(&self.dataset.hourly, &viewport) else {
            self.tooltip.pointer_leave();
            return;
        };

        // Cell center at braille resolution.
        let px = f64::from(column - chart.x) * canvas::PX_PER_COL + 1.0;
        self.tooltip
            .pointer_move(&self.dataset.hourly, &scales, px - MARGIN.left);
    }
}
