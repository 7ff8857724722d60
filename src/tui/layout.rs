//! Layout definitions for the TUI
//!
//! Forms on top, balance and search below them, history filling the rest.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    pub income_form: Rect,
    pub expense_form: Rect,
    pub balance: Rect,
    pub search: Rect,
    pub history: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Forms
                Constraint::Length(3), // Balance and search
                Constraint::Min(3),    // History
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let forms = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[0]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(36), Constraint::Min(20)])
            .split(vertical[1]);

        Self {
            income_form: forms[0],
            expense_form: forms[1],
            balance: middle[0],
            search: middle[1],
            history: vertical[2],
            status_bar: vertical[3],
        }
    }
}

/// Split a bordered form's inner area into one row per field
pub fn form_rows(inner: Rect) -> [Rect; 2] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);
    [rows[0], rows[1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.income_form.height, 4);
        assert_eq!(layout.income_form.width + layout.expense_form.width, 100);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.history.height, 30 - 4 - 3 - 1);
    }
}
