//! Transaction history table
//!
//! Newest first, filtered by the search box.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::format_timestamp;
use crate::models::TransactionType;
use crate::tui::app::App;

/// Render the history table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let history = app.visible_history();
    let keyword = app.search.value().trim();

    let title = if keyword.is_empty() {
        format!(" History ({}) ", history.len())
    } else {
        format!(
            " History: {} of {} match '{}' ",
            history.len(),
            app.ledger.len(),
            keyword
        )
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if history.is_empty() {
        let message = if app.ledger.is_empty() {
            "No transactions yet. Fill in a form and press Enter."
        } else {
            "No transactions match the search."
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(8),  // Type
        Constraint::Length(20), // Date
        Constraint::Length(18), // Amount
        Constraint::Min(10),    // Description
    ];

    let header = Row::new(vec![
        Cell::from("Type"),
        Cell::from("Date"),
        Cell::from("Amount"),
        Cell::from("Description"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let symbol = &app.settings.currency_symbol;
    let rows: Vec<Row> = history
        .iter()
        .skip(app.scroll_offset)
        .map(|txn| {
            let (sign, color) = match txn.kind() {
                TransactionType::Income => ("+", Color::Green),
                TransactionType::Expense => ("-", Color::Red),
            };

            Row::new(vec![
                Cell::from(txn.kind().to_string()),
                Cell::from(format_timestamp(txn, app.settings)),
                Cell::from(format!("{}{}", sign, txn.amount().format_with_symbol(symbol))),
                Cell::from(txn.description().to_string()),
            ])
            .style(Style::default().fg(color))
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}
