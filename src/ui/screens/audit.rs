use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::AuditReport;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_percent, format_score, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(report) = &app.report else {
        render_placeholder(f, area, app);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Metric cards
            Constraint::Min(10),   // Category spending chart
            Constraint::Length(4), // Asset accumulation
        ])
        .split(area);

    render_metric_cards(f, chunks[0], app, report);
    render_spending_chart(f, chunks[1], report);
    render_asset_summary(f, chunks[2], report);
}

fn render_placeholder(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Awaiting telemetry data",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Load a CSV feed with :feed (or :sample for a demo),",
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            "then run the audit sequence with :audit",
            theme::dim_style(),
        )),
    ];
    if app.auditing {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Audit in flight...",
            Style::default().fg(theme::YELLOW),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Vola Verdict ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).centered().block(block), area);
}

fn render_metric_cards(f: &mut Frame, area: Rect, app: &App, report: &AuditReport) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        "Vola Verdict",
        format!("{}/100", format_score(report.vola_verdict_score)),
        theme::score_color(report.vola_verdict_score),
        Some("health score".into()),
    );

    let (burn_label, burn_color) = if report.burn_is_critical() {
        ("CRITICAL", theme::RED)
    } else {
        ("EFFICIENT", theme::GREEN)
    };
    render_card(
        f,
        cards[1],
        "Burn Rate",
        format_percent(report.burn_rate_percentage),
        burn_color,
        Some(burn_label.into()),
    );

    render_card(
        f,
        cards[2],
        "Leakage",
        format!("{}", report.leakage_items.len()),
        if report.leakage_items.is_empty() {
            theme::GREEN
        } else {
            theme::YELLOW
        },
        Some("items flagged".into()),
    );

    render_card(
        f,
        cards[3],
        "Feed",
        format!("{}", app.transactions.len()),
        theme::CYAN,
        Some("transactions".into()),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.unwrap_or_default(), theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_spending_chart(f: &mut Frame, area: Rect, report: &AuditReport) {
    let title = Span::styled(
        " Category Spending ",
        Style::default()
            .fg(theme::TEXT_DIM)
            .add_modifier(Modifier::BOLD),
    );

    if report.category_spending.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(title);
        let msg = Paragraph::new(Line::from(Span::styled(
            "No category aggregation in this report",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = report
        .category_spending
        .iter()
        .take(12)
        .map(|entry| {
            let val = entry.total.abs().round() as u64;
            let label = truncate(&entry.category, 10);
            Bar::default()
                .value(val)
                .label(Line::from(label))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(title),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_asset_summary(f: &mut Frame, area: Rect, report: &AuditReport) {
    let summary = Paragraph::new(Line::from(Span::styled(
        report.asset_accumulation_summary.as_str(),
        Style::default().fg(theme::GREEN),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Capital Deployment (Assets) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(summary, area);
}
