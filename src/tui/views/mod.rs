//! TUI Views module

pub mod forms;
pub mod history;
pub mod status_bar;

use ratatui::Frame;

use crate::models::TransactionType;

use super::app::App;
use super::layout::AppLayout;
use super::widgets::{error_dialog_area, ErrorDialog};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    forms::render_form(frame, app, TransactionType::Income, layout.income_form);
    forms::render_form(frame, app, TransactionType::Expense, layout.expense_form);
    forms::render_balance(frame, app, layout.balance);
    forms::render_search(frame, app, layout.search);
    history::render(frame, app, layout.history);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(ref error) = app.error {
        let area = error_dialog_area(frame.area());
        frame.render_widget(ErrorDialog::new(error), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::Ledger;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_shows_balance_and_history() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp_dir.path().join("transactions.json"));
        ledger.add_income("50000", "gaji").unwrap();
        ledger.add_expense("15000", "makan").unwrap();
        let settings = Settings::default();
        let app = App::new(&mut ledger, &settings);

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Rp 35,000"));
        assert!(text.contains("gaji"));
        assert!(text.contains("makan"));
    }

    #[test]
    fn test_render_error_popup() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp_dir.path().join("transactions.json"));
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings);
        app.focus = crate::tui::app::Focus::ExpenseAmount;
        app.expense_amount.content = "10".to_string();
        app.expense_description.content = "kopi".to_string();
        app.submit();

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        assert!(screen_text(&terminal).contains("Invalid Entry"));
    }
}
