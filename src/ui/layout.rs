use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Smallest terminal the chart renders into.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panes {
    pub header: Rect,
    pub chart: Rect,
    pub footer: Rect,
}

/// Splits the terminal into header, chart, and footer. Pure so the input
/// layer can map mouse positions with the same arithmetic the renderer
/// uses.
#[must_use]
pub fn panes(area: Rect) -> Panes {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    Panes {
        header: chunks[0],
        chart: chunks[1],
        footer: chunks[2],
    }
}

#[must_use]
pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_COLS || area.height < MIN_ROWS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panes_cover_the_whole_area() {
        let area = Rect::new(0, 0, 80, 24);
        let panes = panes(area);
        assert_eq!(panes.header.height, 1);
        assert_eq!(panes.footer.height, 1);
        assert_eq!(panes.chart.height, 22);
        assert_eq!(panes.chart.y, 1);
    }

    #[test]
    fn size_gate() {
        assert!(is_too_small(Rect::new(0, 0, 39, 24)));
        assert!(is_too_small(Rect::new(0, 0, 80, 11)));
        assert!(!is_too_small(Rect::new(0, 0, 40, 12)));
    }
}
