use ratatui::style::{Color, Modifier, Style};

pub(crate) const HEADER_BG: Color = Color::Rgb(5, 5, 5);
pub(crate) const HEADER_FG: Color = Color::Rgb(229, 231, 235);
pub(crate) const ACCENT: Color = Color::Rgb(79, 172, 254);
pub(crate) const CYAN: Color = Color::Rgb(0, 242, 254);
pub(crate) const GREEN: Color = Color::Rgb(52, 211, 153);
pub(crate) const RED: Color = Color::Rgb(251, 113, 133);
pub(crate) const YELLOW: Color = Color::Rgb(245, 158, 11);
pub(crate) const SURFACE: Color = Color::Rgb(17, 17, 20);
pub(crate) const TEXT: Color = Color::Rgb(229, 231, 235);
pub(crate) const TEXT_DIM: Color = Color::Rgb(113, 119, 131);
pub(crate) const OVERLAY: Color = Color::Rgb(38, 38, 46);
pub(crate) const COMMAND_BG: Color = Color::Rgb(10, 10, 12);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn income_style() -> Style {
    Style::default().fg(GREEN)
}

pub(crate) fn expense_style() -> Style {
    Style::default().fg(RED)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

pub(crate) fn error_style() -> Style {
    Style::default().fg(RED).bg(COMMAND_BG).add_modifier(Modifier::BOLD)
}

/// Verdict scores read green above 70, amber down to 40, red below.
pub(crate) fn score_color(score: f64) -> Color {
    if score >= 70.0 {
        GREEN
    } else if score >= 40.0 {
        YELLOW
    } else {
        RED
    }
}
