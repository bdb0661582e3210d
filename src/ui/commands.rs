use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, FeedStep, InputMode, PendingAction, Screen};
use crate::history::HistoryStore;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut HistoryStore) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit VolaTUI", cmd_quit, r);
    register_command!("quit", "Quit VolaTUI", cmd_quit, r);
    register_command!("a", "Run the audit sequence", cmd_audit, r);
    register_command!("audit", "Run the audit sequence", cmd_audit, r);
    register_command!("d", "Go to the Audit dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to the Audit dashboard", cmd_dashboard, r);
    register_command!("report", "Go to the full Report", cmd_report, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("f", "Load a CSV feed file", cmd_feed, r);
    register_command!("feed", "Load a CSV feed file", cmd_feed, r);
    register_command!(
        "load",
        "Load a feed by path (e.g. :load ~/bank.csv)",
        cmd_load,
        r
    );
    register_command!("sample", "Load the built-in sample feed", cmd_sample, r);
    register_command!("history", "Go to audit History", cmd_history, r);
    register_command!(
        "clear-history",
        "Delete all recorded audits",
        cmd_clear_history,
        r
    );
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    history: &mut HistoryStore,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, history)
    } else {
        app.set_status(format!("Unknown command: {cmd_name}"));
        Ok(())
    }
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_: &str, app: &mut App, _: &mut HistoryStore) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_audit(_: &str, app: &mut App, _: &mut HistoryStore) -> anyhow::Result<()> {
    app.start_audit();
    Ok(())
}

fn cmd_dashboard(_: &str, app: &mut App, _: &mut HistoryStore) -> anyhow::Result<()> {
    app.screen = Screen::Audit;
    Ok(())
}

fn cmd_report(_: &str, app: &mut App, _: &mut HistoryStore) -> anyhow::Result<()> {
    app.screen = Screen::Report;
    Ok(())
}

fn cmd_transactions(_: &str, app: &mut App, _: &mut HistoryStore) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    Ok(())
}

fn cmd_feed(_: &str, app: &mut App, _: &mut HistoryStore) -> anyhow::Result<()> {
    app.screen = Screen::Feed;
    app.feed_step = FeedStep::SelectFile;
    app.refresh_file_browser();
    Ok(())
}

fn cmd_load(args: &str, app: &mut App, _: &mut HistoryStore) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :load <path/to/feed.csv>");
        return Ok(());
    }
    let path = crate::run::cli::shellexpand(args);
    app.load_feed_file(std::path::Path::new(&path));
    if app.last_error.is_none() {
        app.screen = Screen::Feed;
    }
    Ok(())
}

fn cmd_sample(_: &str, app: &mut App, _: &mut HistoryStore) -> anyhow::Result<()> {
    app.load_sample_feed();
    Ok(())
}

fn cmd_history(_: &str, app: &mut App, history: &mut HistoryStore) -> anyhow::Result<()> {
    app.screen = Screen::History;
    if app.history_index >= history.len() {
        app.history_index = history.len().saturating_sub(1);
        app.history_scroll = 0;
    }
    Ok(())
}

fn cmd_clear_history(_: &str, app: &mut App, history: &mut HistoryStore) -> anyhow::Result<()> {
    if history.is_empty() {
        app.set_status("History is already empty");
        return Ok(());
    }
    app.confirm_message = format!("Clear all {} recorded audits?", history.len());
    app.pending_action = Some(PendingAction::ClearHistory);
    app.input_mode = InputMode::Confirm;
    Ok(())
}

fn cmd_help(_: &str, app: &mut App, _: &mut HistoryStore) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}
