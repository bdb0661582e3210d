use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::history::HistoryStore;
use crate::ui::app::{App, FeedStep, InputMode, PendingAction, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

/// How often the event loop wakes to drain the audit worker channel.
const TICK: Duration = Duration::from_millis(150);

pub(crate) fn as_tui(history: &mut HistoryStore) -> Result<()> {
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, history);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    history: &mut HistoryStore,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(5) as usize; // tab + status + cmd bars + borders
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app, history);
        })?;

        // The one suspension point: a finished audit lands here. Polling on
        // a short tick keeps the interface responsive while it is in flight.
        app.poll_audit(history);

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, history)?,
                InputMode::Command => handle_command_input(key, app, history)?,
                InputMode::Confirm => handle_confirm_input(key, app, history)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(
    key: event::KeyEvent,
    app: &mut App,
    history: &mut HistoryStore,
) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_down(app, history);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_up(app);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app, history),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, Screen::Audit),
        KeyCode::Char('2') => switch_screen(app, Screen::Report),
        KeyCode::Char('3') => switch_screen(app, Screen::Transactions),
        KeyCode::Char('4') => switch_screen(app, Screen::Feed),
        KeyCode::Char('5') => switch_screen(app, Screen::History),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            switch_screen(app, screens[(idx + 1) % screens.len()]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, screens[prev]);
        }
        KeyCode::Char('a') => app.start_audit(),
        KeyCode::Enter => handle_enter(app, history),
        KeyCode::Esc => handle_escape(app),
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app, history),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(
    key: event::KeyEvent,
    app: &mut App,
    history: &mut HistoryStore,
) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, history)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(
    key: event::KeyEvent,
    app: &mut App,
    history: &mut HistoryStore,
) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                match action {
                    PendingAction::ClearHistory => {
                        history.clear()?;
                        app.history_index = 0;
                        app.history_scroll = 0;
                        app.set_status("History cleared");
                    }
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            // Any other key = cancel
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
    Ok(())
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    if screen == Screen::Feed && app.feed_step == FeedStep::SelectFile {
        app.refresh_file_browser();
    }
}

fn handle_move_down(app: &mut App, history: &HistoryStore) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Transactions => scroll_down(
            &mut app.transaction_index,
            &mut app.transaction_scroll,
            app.transactions.len(),
            page,
        ),
        Screen::Report => {
            let max = app.report_line_count().saturating_sub(1);
            if app.report_scroll < max {
                app.report_scroll += 1;
            }
        }
        Screen::Feed if app.feed_step == FeedStep::SelectFile => scroll_down(
            &mut app.file_browser_index,
            &mut app.file_browser_scroll,
            app.file_browser_entries.len(),
            page,
        ),
        Screen::History => scroll_down(
            &mut app.history_index,
            &mut app.history_scroll,
            history.len(),
            page,
        ),
        _ => {}
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Transactions => scroll_up(&mut app.transaction_index, &mut app.transaction_scroll),
        Screen::Report => app.report_scroll = app.report_scroll.saturating_sub(1),
        Screen::Feed if app.feed_step == FeedStep::SelectFile => {
            scroll_up(&mut app.file_browser_index, &mut app.file_browser_scroll)
        }
        Screen::History => scroll_up(&mut app.history_index, &mut app.history_scroll),
        _ => {}
    }
}

fn handle_enter(app: &mut App, history: &mut HistoryStore) {
    match app.screen {
        Screen::Feed => match app.feed_step {
            FeedStep::SelectFile => {
                if let Some(path) = app
                    .file_browser_entries
                    .get(app.file_browser_index)
                    .cloned()
                {
                    if path.is_dir() {
                        app.file_browser_path = path;
                        app.refresh_file_browser();
                    } else {
                        app.load_feed_file(&path);
                    }
                }
            }
            FeedStep::Review => app.start_audit(),
        },
        Screen::History => {
            if let Some(entry) = history.entries().get(app.history_index).cloned() {
                app.load_history_entry(&entry);
            }
        }
        _ => {}
    }
}

fn handle_escape(app: &mut App) {
    match app.screen {
        Screen::Feed => match app.feed_step {
            FeedStep::Review => app.feed_step = FeedStep::SelectFile,
            FeedStep::SelectFile => app.screen = Screen::Audit,
        },
        _ => {
            app.last_error = None;
            app.status_message.clear();
        }
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll)
        }
        Screen::Report => app.report_scroll = 0,
        Screen::Feed if app.feed_step == FeedStep::SelectFile => {
            scroll_to_top(&mut app.file_browser_index, &mut app.file_browser_scroll)
        }
        Screen::History => scroll_to_top(&mut app.history_index, &mut app.history_scroll),
        _ => {}
    }
}

fn handle_goto_bottom(app: &mut App, history: &HistoryStore) {
    let page = app.visible_rows.max(1);
    match app.screen {
        Screen::Transactions => scroll_to_bottom(
            &mut app.transaction_index,
            &mut app.transaction_scroll,
            app.transactions.len(),
            page,
        ),
        Screen::Report => app.report_scroll = app.report_line_count().saturating_sub(1),
        Screen::Feed if app.feed_step == FeedStep::SelectFile => scroll_to_bottom(
            &mut app.file_browser_index,
            &mut app.file_browser_scroll,
            app.file_browser_entries.len(),
            page,
        ),
        Screen::History => scroll_to_bottom(
            &mut app.history_index,
            &mut app.history_scroll,
            history.len(),
            page,
        ),
        _ => {}
    }
}
