use crate::domain::weather::HourlyRow;

use super::scale::ChartScales;

/// The sample currently under the pointer plus its anchor on the
/// temperature curve, in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSample {
    pub index: usize,
    pub row: HourlyRow,
    pub anchor_x: f64,
    pub anchor_y: f64,
}

/// Two-state pointer machine: idle (no active sample) or active (one row
/// selected). Every pointer-move recomputes the state synchronously; no
/// debouncing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    active: Option<ActiveSample>,
}

impl TooltipState {
    #[must_use]
    pub fn active(&self) -> Option<&ActiveSample> {
        self.active.as_ref()
    }

    /// Idle→active / active→active. Inverts the time scale at the pointer x
    /// and selects the nearest sample; a zero-width plot never activates.
    pub fn pointer_move(&mut self, rows: &[HourlyRow], scales: &ChartScales, x: f64) {
        self.active = nearest_sample(rows, scales, x);
    }

    /// Active→idle.
    pub fn pointer_leave(&mut self) {
        self.active = None;
    }
}

/// Bisection lookup: binary-search the insertion point of the inverted
/// pointer instant (lower bound 1 so a left neighbor always exists), then
/// pick the closer of the two neighbors. Ties favor the later sample.
#[must_use]
pub fn nearest_sample(rows: &[HourlyRow], scales: &ChartScales, x: f64) -> Option<ActiveSample> {
    if rows.is_empty() || scales.x_max <= 0.0 {
        return None;
    }

    let target = scales.time.invert(x);
    let insertion = rows.partition_point(|row| row.time < target).max(1);

    let index = if insertion < rows.len() {
        let before = (target - rows[insertion - 1].time).num_milliseconds();
        let after = (rows[insertion].time - target).num_milliseconds();
        if before >= after { insertion } else { insertion - 1 }
    } else {
        rows.len() - 1
    };

    let row = rows[index].clone();
    Some(ActiveSample {
        index,
        anchor_x: scales.time.scale(row.time),
        anchor_y: scales.temperature.scale(f64::from(row.temperature)),
        row,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Viewport;
    use crate::test_fixtures::{hourly_series, viewport};

    fn scales(rows: &[HourlyRow], width: f64) -> ChartScales {
        ChartScales::build(rows, &viewport(width, 100.0)).expect("scales")
    }

    #[test]
    fn pointer_selects_the_nearest_sample() {
        let rows = hourly_series("2026-02-12T00:00", 48);
        let scales = scales(&rows, 470.0);
        // 470 px over 47 hours: 10 px per hour.
        let sample = nearest_sample(&rows, &scales, 52.0).expect("sample");
        assert_eq!(sample.index, 5);
        let sample = nearest_sample(&rows, &scales, 58.0).expect("sample");
        assert_eq!(sample.index, 6);
    }

    #[test]
    fn midpoint_tie_prefers_the_later_sample() {
        let rows = hourly_series("2026-02-12T00:00", 48);
        let scales = scales(&rows, 470.0);
        let sample = nearest_sample(&rows, &scales, 55.0).expect("sample");
        assert_eq!(sample.index, 6);
    }

    #[test]
    fn pointer_outside_the_plot_clamps_to_the_edges() {
        let rows = hourly_series("2026-02-12T00:00", 48);
        let scales = scales(&rows, 470.0);
        assert_eq!(nearest_sample(&rows, &scales, -40.0).expect("sample").index, 0);
        assert_eq!(nearest_sample(&rows, &scales, 9999.0).expect("sample").index, 47);
    }

    #[test]
    fn zero_width_plot_never_activates() {
        let rows = hourly_series("2026-02-12T00:00", 48);
        let viewport = Viewport {
            width: 0.0,
            height: 100.0,
            margin: crate::chart::Margin::default(),
        };
        let scales = ChartScales::build(&rows, &viewport).expect("scales");
        assert!(nearest_sample(&rows, &scales, 10.0).is_none());
    }

    #[test]
    fn anchor_sits_on_the_temperature_curve() {
        let rows = hourly_series("2026-02-12T00:00", 48);
        let scales = scales(&rows, 470.0);
        let sample = nearest_sample(&rows, &scales, 100.0).expect("sample");
        assert_eq!(sample.anchor_x, scales.time.scale(sample.row.time));
        assert_eq!(
            sample.anchor_y,
            scales.temperature.scale(f64::from(sample.row.temperature))
        );
    }

    #[test]
    fn state_machine_transitions() {
        let rows = hourly_series("2026-02-12T00:00", 48);
        let scales = scales(&rows, 470.0);
        let mut state = TooltipState::default();
        assert!(state.active().is_none());

        state.pointer_move(&rows, &scales, 52.0);
        assert_eq!(state.active().expect("active").index, 5);

        state.pointer_move(&rows, &scales, 100.0);
        assert_eq!(state.active().expect("active").index, 10);

        state.pointer_leave();
        assert!(state.active().is_none());
    }

    #[test]
    fn single_row_still_selects() {
        let rows = hourly_series("2026-02-12T00:00", 1);
        let scales = scales(&rows, 470.0);
        // Degenerate time domain: every pointer x resolves to the only row.
        assert_eq!(nearest_sample(&rows, &scales, 200.0).expect("sample").index, 0);
    }
}
