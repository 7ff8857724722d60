//! Error dialog widget
//!
//! Displays a rejected entry or a storage failure with recovery suggestions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::{PersistenceError, TrackerError, ValidationError};

/// An error dialog with details and suggestions
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// The error title/summary
    pub title: String,
    /// Detailed error message
    pub details: String,
    /// Suggested recovery actions
    pub suggestions: Vec<String>,
}

impl ErrorInfo {
    /// Create error info from a TrackerError
    pub fn from_error(error: &TrackerError) -> Self {
        match error {
            TrackerError::Validation(err) => Self::from_validation(err),
            TrackerError::Persistence(err) => Self::from_persistence(err),
            TrackerError::Config(msg) => Self::simple("Configuration Error", msg.as_str())
                .with_suggestion("Check config.json for syntax errors"),
            TrackerError::Io(msg) => Self::simple("I/O Error", msg.as_str())
                .with_suggestion("Check that the data directory is accessible"),
            TrackerError::Export(msg) => Self::simple("Export Error", msg.as_str())
                .with_suggestion("Check the CSV file and output path"),
        }
    }

    fn from_validation(error: &ValidationError) -> Self {
        let suggestion = match error {
            ValidationError::InvalidAmount { .. } => "Enter digits only, e.g. 50000 or 12.50",
            ValidationError::EmptyDescription { .. } => "Describe what the entry is for",
            ValidationError::Overdraft { .. } => "Record income first or lower the amount",
            ValidationError::TotalOverflow { .. } => "Split the amount or start a new ledger file",
        };
        Self::simple("Invalid Entry", error.to_string()).with_suggestion(suggestion)
    }

    fn from_persistence(error: &PersistenceError) -> Self {
        let info = Self::simple("Storage Error", error.to_string());
        match error {
            PersistenceError::Unwritable { .. } => info
                .with_suggestion("The entry is kept for this session only")
                .with_suggestion("Check write permissions and free disk space"),
            PersistenceError::Unreadable { .. } | PersistenceError::Corrupt { .. } => {
                info.with_suggestion("Started with an empty ledger")
            }
        }
    }

    /// Create a simple error info
    pub fn simple(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            suggestions: vec![],
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

/// Widget for rendering an error dialog
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
}

impl<'a> ErrorDialog<'a> {
    /// Create a new error dialog widget
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self { error }
    }
}

impl<'a> Widget for ErrorDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" Error: {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.error.details.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        if !self.error.suggestions.is_empty() {
            let mut lines: Vec<Line> = vec![Line::from(Span::styled(
                "Suggestions:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];

            for suggestion in &self.error.suggestions {
                lines.push(Line::from(vec![
                    Span::raw("  - "),
                    Span::raw(suggestion.as_str()),
                ]));
            }

            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        Paragraph::new("Press Esc or Enter to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Calculate the area for an error dialog (centered in parent)
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width * 70 / 100).clamp(40, 80).min(parent.width);
    let height = (parent.height * 50 / 100).clamp(10, 16).min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}
