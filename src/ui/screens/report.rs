use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = Span::styled(
        " Executive Analysis ",
        Style::default()
            .fg(theme::TEXT_DIM)
            .add_modifier(Modifier::BOLD),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(title);

    let Some(report) = &app.report else {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No audit yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Run one with :audit to see the full narrative here",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    // Markdown narrative, shown as plain text.
    for raw in report.detailed_reasoning.lines() {
        lines.push(Line::from(Span::styled(
            raw.to_string(),
            theme::normal_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(section_header("Capital Deployment (Assets)"));
    lines.push(Line::from(Span::styled(
        report.asset_accumulation_summary.clone(),
        Style::default().fg(theme::GREEN),
    )));

    lines.push(Line::from(""));
    lines.push(section_header("Efficiency Leakage"));
    if report.leakage_items.is_empty() {
        lines.push(Line::from(Span::styled(
            "No leakage detected. Maximum efficiency achieved.",
            theme::dim_style(),
        )));
    } else {
        for leak in &report.leakage_items {
            lines.push(Line::from(Span::styled(
                format!("• {}", leak.item),
                Style::default()
                    .fg(theme::RED)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", leak.reason),
                theme::dim_style(),
            )));
            lines.push(Line::from(Span::styled(
                format!("  → {}", leak.alternative),
                Style::default().fg(theme::GREEN),
            )));
            lines.push(Line::from(""));
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.report_scroll as u16, 0))
        .block(block);
    f.render_widget(paragraph, area);
}

fn section_header(label: &str) -> Line<'static> {
    Line::from(Span::styled(
        label.to_string(),
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    ))
}
