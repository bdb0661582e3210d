use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::{App, FeedStep};
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    render_step_indicator(f, chunks[0], app);

    match app.feed_step {
        FeedStep::SelectFile => render_file_browser(f, chunks[1], app),
        FeedStep::Review => render_review(f, chunks[1], app),
    }
}

fn render_step_indicator(f: &mut Frame, area: Rect, app: &App) {
    let steps = [(FeedStep::SelectFile, "1:File"), (FeedStep::Review, "2:Review")];
    let current_idx = steps
        .iter()
        .position(|(s, _)| *s == app.feed_step)
        .unwrap_or(0);

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(" ", Style::default().bg(theme::HEADER_BG)));
    for (i, (_, label)) in steps.iter().enumerate() {
        let style = if i == current_idx {
            Style::default()
                .fg(theme::HEADER_BG)
                .bg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else if i < current_idx {
            Style::default().fg(theme::GREEN).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT_DIM)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        if i < steps.len() - 1 {
            let connector_style = if i < current_idx {
                Style::default().fg(theme::GREEN)
            } else {
                Style::default().fg(theme::TEXT_DIM)
            };
            spans.push(Span::styled(" > ", connector_style));
        }
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(bar, area);
}

fn render_file_browser(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let path_display = Paragraph::new(Line::from(vec![
        Span::styled(" Path: ", Style::default().fg(theme::TEXT_DIM)),
        Span::styled(
            app.file_browser_path.display().to_string(),
            Style::default().fg(theme::ACCENT),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Select CSV Feed ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(path_display, chunks[0]);

    let items: Vec<ListItem> = app
        .file_browser_entries
        .iter()
        .enumerate()
        .skip(app.file_browser_scroll)
        .take(area.height.saturating_sub(5) as usize)
        .map(|(i, path)| {
            let name = if Some(path.as_path()) == app.file_browser_path.parent() {
                "📁 ..".to_string()
            } else if path.is_dir() {
                format!(
                    "📁 {}",
                    path.file_name().and_then(|n| n.to_str()).unwrap_or("?")
                )
            } else {
                format!(
                    "📄 {}",
                    path.file_name().and_then(|n| n.to_str()).unwrap_or("?")
                )
            };

            let style = if i == app.file_browser_index {
                theme::selected_style()
            } else {
                theme::normal_style()
            };

            ListItem::new(Line::from(Span::styled(name, style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " j/k to navigate, Enter to select, :sample for the demo feed ",
                theme::dim_style(),
            )),
    );
    f.render_widget(list, chunks[1]);
}

fn render_review(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(5)])
        .split(area);

    render_raw_preview(f, chunks[0], app);
    render_parsed_preview(f, chunks[1], app);
}

fn render_raw_preview(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .csv_text
        .lines()
        .take(area.height.saturating_sub(2) as usize)
        .map(|l| Line::from(Span::styled(truncate(l, area.width.saturating_sub(2) as usize), theme::dim_style())))
        .collect();

    let preview = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Raw Feed: {} ", app.feed_path),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(preview, area);
}

fn render_parsed_preview(f: &mut Frame, area: Rect, app: &App) {
    let title = Span::styled(
        format!(
            " Parsed ({}) | Enter to run the audit sequence ",
            app.transactions.len()
        ),
        Style::default()
            .fg(theme::TEXT_DIM)
            .add_modifier(Modifier::BOLD),
    );

    if app.transactions.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(title);
        let msg = Paragraph::new(Line::from(Span::styled(
            "Nothing parsed from this feed",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let header_cells = ["Date", "Description", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .transactions
        .iter()
        .take(area.height.saturating_sub(3) as usize)
        .enumerate()
        .map(|(i, txn)| {
            let amount_style = if txn.is_income() {
                theme::income_style()
            } else {
                theme::expense_style()
            };
            let amount_str = if txn.is_income() {
                format!("+{}", format_amount(txn.amount))
            } else {
                format_amount(txn.amount)
            };
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(txn.date.clone()),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(truncate(&txn.category, 18)),
                Cell::from(Span::styled(amount_str, amount_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(18),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(title),
    );
    f.render_widget(table, area);
}
