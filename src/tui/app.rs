//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::Settings;
use crate::error::TrackerError;
use crate::models::{Transaction, TransactionType};
use crate::services::Ledger;

use super::widgets::{ErrorInfo, TextInput};

/// Which field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    IncomeAmount,
    IncomeDescription,
    ExpenseAmount,
    ExpenseDescription,
    Search,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::IncomeAmount,
        Focus::IncomeDescription,
        Focus::ExpenseAmount,
        Focus::ExpenseDescription,
        Focus::Search,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field in tab order (wraps)
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous field in tab order (wraps)
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// Whether the field only takes an amount
    pub fn is_amount(self) -> bool {
        matches!(self, Focus::IncomeAmount | Focus::ExpenseAmount)
    }

    /// The form this field belongs to, if any
    pub fn form(self) -> Option<TransactionType> {
        match self {
            Focus::IncomeAmount | Focus::IncomeDescription => Some(TransactionType::Income),
            Focus::ExpenseAmount | Focus::ExpenseDescription => Some(TransactionType::Expense),
            Focus::Search => None,
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// The ledger being edited
    pub ledger: &'a mut Ledger,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Focused field
    pub focus: Focus,

    pub income_amount: TextInput,
    pub income_description: TextInput,
    pub expense_amount: TextInput,
    pub expense_description: TextInput,
    pub search: TextInput,

    /// Error popup, if one is open
    pub error: Option<ErrorInfo>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Rows scrolled past at the top of the history table
    pub scroll_offset: usize,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(ledger: &'a mut Ledger, settings: &'a Settings) -> Self {
        Self {
            ledger,
            settings,
            should_quit: false,
            focus: Focus::default(),
            income_amount: TextInput::new().label("Amount").placeholder("e.g. 50000"),
            income_description: TextInput::new()
                .label("Description")
                .placeholder("e.g. gaji"),
            expense_amount: TextInput::new().label("Amount").placeholder("e.g. 15000"),
            expense_description: TextInput::new()
                .label("Description")
                .placeholder("e.g. makan"),
            search: TextInput::new()
                .label("Search")
                .placeholder("type to filter"),
            error: None,
            status_message: None,
            scroll_offset: 0,
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The input for a given field
    pub fn input(&self, focus: Focus) -> &TextInput {
        match focus {
            Focus::IncomeAmount => &self.income_amount,
            Focus::IncomeDescription => &self.income_description,
            Focus::ExpenseAmount => &self.expense_amount,
            Focus::ExpenseDescription => &self.expense_description,
            Focus::Search => &self.search,
        }
    }

    /// The input that currently has focus
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            Focus::IncomeAmount => &mut self.income_amount,
            Focus::IncomeDescription => &mut self.income_description,
            Focus::ExpenseAmount => &mut self.expense_amount,
            Focus::ExpenseDescription => &mut self.expense_description,
            Focus::Search => &mut self.search,
        }
    }

    /// Open the error popup
    pub fn show_error(&mut self, error: &TrackerError) {
        self.error = Some(ErrorInfo::from_error(error));
    }

    /// Close the error popup
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Submit the form that owns the focused field
    ///
    /// Inputs are cleared only when the entry was accepted.
    pub fn submit(&mut self) {
        let Some(kind) = self.focus.form() else {
            return;
        };

        let (amount, description) = match kind {
            TransactionType::Income => (&self.income_amount, &self.income_description),
            TransactionType::Expense => (&self.expense_amount, &self.expense_description),
        };

        match self.ledger.record(kind, amount.value(), description.value()) {
            Ok(recorded) => {
                match kind {
                    TransactionType::Income => {
                        self.income_amount.clear();
                        self.income_description.clear();
                        self.focus = Focus::IncomeAmount;
                    }
                    TransactionType::Expense => {
                        self.expense_amount.clear();
                        self.expense_description.clear();
                        self.focus = Focus::ExpenseAmount;
                    }
                }
                self.scroll_offset = 0;
                self.set_status(format!(
                    "Recorded {} of {}",
                    kind.as_str(),
                    recorded
                        .transaction
                        .amount()
                        .format_with_symbol(&self.settings.currency_symbol)
                ));
                if let Some(err) = recorded.save_error {
                    self.show_error(&TrackerError::Persistence(err));
                }
            }
            Err(err) => self.show_error(&TrackerError::Validation(err)),
        }
    }

    /// History filtered by the search box, newest first
    pub fn visible_history(&self) -> Vec<&Transaction> {
        let mut history = self.ledger.ordered_history(Some(self.search.value()));
        history.reverse();
        history
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let max = self.visible_history().len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + rows).min(max);
    }

    /// Reset scrolling after the filter changes
    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut focus = Focus::IncomeAmount;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::IncomeAmount);
        assert_eq!(Focus::IncomeAmount.prev(), Focus::Search);
        assert_eq!(Focus::Search.next(), Focus::IncomeAmount);
    }

    #[test]
    fn test_submit_income_clears_form() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp_dir.path().join("transactions.json"));
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings);

        app.income_amount = TextInput::new().content("50000");
        app.income_description = TextInput::new().content("gaji");
        app.focus = Focus::IncomeDescription;
        app.submit();

        assert!(!app.has_error());
        assert_eq!(app.income_amount.value(), "");
        assert_eq!(app.focus, Focus::IncomeAmount);
        assert_eq!(app.ledger.current_balance(), Money::from_units(50000));
    }

    #[test]
    fn test_submit_overdraft_keeps_input() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp_dir.path().join("transactions.json"));
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings);

        app.expense_amount = TextInput::new().content("100");
        app.expense_description = TextInput::new().content("kopi");
        app.focus = Focus::ExpenseAmount;
        app.submit();

        assert!(app.has_error());
        assert_eq!(app.expense_amount.value(), "100");
        assert!(app.ledger.is_empty());
    }

    #[test]
    fn test_submit_from_search_does_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp_dir.path().join("transactions.json"));
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings);

        app.focus = Focus::Search;
        app.submit();

        assert!(!app.has_error());
        assert!(app.ledger.is_empty());
    }

    #[test]
    fn test_visible_history_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp_dir.path().join("transactions.json"));
        ledger.add_income("50000", "gaji").unwrap();
        ledger.add_expense("15000", "makan").unwrap();
        let settings = Settings::default();
        let app = App::new(&mut ledger, &settings);

        let history = app.visible_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].description(), "makan");
        assert_eq!(history[1].description(), "gaji");
    }
}
