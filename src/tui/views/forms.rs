//! Entry forms, balance line and search box

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::TransactionType;
use crate::tui::app::{App, Focus};
use crate::tui::layout::form_rows;

fn border_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Render the income or expense form
pub fn render_form(frame: &mut Frame, app: &App, kind: TransactionType, area: Rect) {
    let (title, title_color, fields) = match kind {
        TransactionType::Income => (
            " Income ",
            Color::Green,
            [Focus::IncomeAmount, Focus::IncomeDescription],
        ),
        TransactionType::Expense => (
            " Expense ",
            Color::Red,
            [Focus::ExpenseAmount, Focus::ExpenseDescription],
        ),
    };

    let active = app.focus.form() == Some(kind);
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(title_color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style(active));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (field, row) in fields.into_iter().zip(form_rows(inner)) {
        let mut input = app.input(field).clone();
        input.focused = app.focus == field;
        frame.render_widget(&input, row);
    }
}

/// Render the current balance
pub fn render_balance(frame: &mut Frame, app: &App, area: Rect) {
    let balance = app.ledger.current_balance();
    let color = if balance.is_zero() {
        Color::Yellow
    } else {
        Color::Green
    };

    let line = Line::from(vec![
        Span::styled("Balance: ", Style::default().fg(Color::White)),
        Span::styled(
            balance.format_with_symbol(&app.settings.currency_symbol),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(false));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the search box
pub fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.focus == Focus::Search;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(active));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut input = app.search.clone();
    input.focused = active;
    frame.render_widget(&input, inner);
}
