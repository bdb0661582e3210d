use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, Paragraph},
    Frame,
};

use crate::history::HistoryStore;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_percent, format_score};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, history: &HistoryStore) {
    if history.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Audit History (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No historical data found", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Every completed audit lands here automatically",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_entry_list(f, chunks[0], app, history);
    render_trend_chart(f, chunks[1], history);
}

fn render_entry_list(f: &mut Frame, area: Rect, app: &App, history: &HistoryStore) {
    let items: Vec<ListItem> = history
        .entries()
        .iter()
        .enumerate()
        .skip(app.history_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, entry)| {
            let burn_style = if entry.report.burn_is_critical() {
                Style::default().fg(theme::RED)
            } else {
                Style::default().fg(theme::GREEN)
            };
            let line = if i == app.history_index {
                Line::from(Span::styled(
                    format!(
                        " {}  verdict {:>3}  {:>6} burn ",
                        entry.short_timestamp(),
                        format_score(entry.report.vola_verdict_score),
                        format_percent(entry.report.burn_rate_percentage),
                    ),
                    theme::selected_style(),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!(" {}  ", entry.short_timestamp()),
                        theme::dim_style(),
                    ),
                    Span::styled(
                        format!(
                            "verdict {:>3}",
                            format_score(entry.report.vola_verdict_score)
                        ),
                        Style::default().fg(theme::score_color(entry.report.vola_verdict_score)),
                    ),
                    Span::styled(
                        format!(
                            "  {:>6} burn ",
                            format_percent(entry.report.burn_rate_percentage)
                        ),
                        burn_style,
                    ),
                ])
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Audit History ({}) | Enter to load ", history.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(list, area);
}

fn render_trend_chart(f: &mut Frame, area: Rect, history: &HistoryStore) {
    let title = Span::styled(
        " Health Trends (oldest → latest) ",
        Style::default()
            .fg(theme::TEXT_DIM)
            .add_modifier(Modifier::BOLD),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(title);

    if history.len() < 2 {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Run more audits to chart a trend",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    // Entries are stored newest-first; the chart reads oldest → latest.
    let score_points: Vec<(f64, f64)> = history
        .entries()
        .iter()
        .rev()
        .enumerate()
        .map(|(i, e)| (i as f64, e.report.vola_verdict_score))
        .collect();
    let burn_points: Vec<(f64, f64)> = history
        .entries()
        .iter()
        .rev()
        .enumerate()
        .map(|(i, e)| (i as f64, e.report.burn_rate_percentage))
        .collect();
    let max_x = (history.len() - 1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("verdict")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::ACCENT))
            .data(&score_points),
        Dataset::default()
            .name("burn %")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::RED))
            .data(&burn_points),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme::TEXT_DIM))
                .bounds([0.0, max_x])
                .labels([
                    Span::styled("oldest", theme::dim_style()),
                    Span::styled("latest", theme::dim_style()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme::TEXT_DIM))
                .bounds([0.0, 100.0])
                .labels([
                    Span::styled("0", theme::dim_style()),
                    Span::styled("50", theme::dim_style()),
                    Span::styled("100", theme::dim_style()),
                ]),
        );

    f.render_widget(chart, area);
}
