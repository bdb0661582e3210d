use std::path::{Path, PathBuf};
use std::sync::mpsc;

use crate::audit::{AuditClient, AuditError};
use crate::history::HistoryStore;
use crate::import::{CsvFeed, SAMPLE_FEED};
use crate::models::{AuditReport, HistoryEntry, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Audit,
    Report,
    Transactions,
    Feed,
    History,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Audit,
            Self::Report,
            Self::Transactions,
            Self::Feed,
            Self::History,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Audit => write!(f, "Audit"),
            Self::Report => write!(f, "Report"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Feed => write!(f, "Feed"),
            Self::History => write!(f, "History"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    ClearHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FeedStep {
    SelectFile,
    Review,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) last_error: Option<String>,
    pub(crate) show_help: bool,

    // Audit flow
    pub(crate) client: AuditClient,
    pub(crate) csv_text: String,
    pub(crate) report: Option<AuditReport>,
    pub(crate) report_scroll: usize,
    pub(crate) auditing: bool,
    pub(crate) audit_rx: Option<mpsc::Receiver<Result<AuditReport, AuditError>>>,

    // Transactions
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Feed loading
    pub(crate) feed_step: FeedStep,
    pub(crate) feed_path: String,
    pub(crate) file_browser_path: PathBuf,
    pub(crate) file_browser_entries: Vec<PathBuf>,
    pub(crate) file_browser_index: usize,
    pub(crate) file_browser_scroll: usize,

    // History
    pub(crate) history_index: usize,
    pub(crate) history_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Audit,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            last_error: None,
            show_help: false,

            client: AuditClient::from_env(),
            csv_text: String::new(),
            report: None,
            report_scroll: 0,
            auditing: false,
            audit_rx: None,

            transactions: Vec::new(),
            transaction_index: 0,
            transaction_scroll: 0,

            feed_step: FeedStep::SelectFile,
            feed_path: String::new(),
            file_browser_path: directories::UserDirs::new()
                .map(|d| d.home_dir().to_path_buf())
                .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"))),
            file_browser_entries: Vec::new(),
            file_browser_index: 0,
            file_browser_scroll: 0,

            history_index: 0,
            history_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn set_error(&mut self, msg: impl Into<String>) {
        self.last_error = Some(msg.into());
    }

    /// Replace the feed buffer with the contents of a user-selected file.
    /// Read failures surface a generic message; parse failures keep the
    /// buffer so the raw text can still be inspected on the review step.
    pub(crate) fn load_feed_file(&mut self, path: &Path) {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "feed file read failed");
                self.set_error("Failed to read the file.");
                return;
            }
        };

        self.csv_text = content;
        self.feed_path = path.display().to_string();
        self.last_error = None;
        self.refresh_transactions();
        self.feed_step = FeedStep::Review;
    }

    /// Fill the feed buffer with the built-in demo feed.
    pub(crate) fn load_sample_feed(&mut self) {
        self.csv_text = SAMPLE_FEED.to_string();
        self.feed_path = "(sample feed)".into();
        self.last_error = None;
        self.refresh_transactions();
        self.screen = Screen::Feed;
        self.feed_step = FeedStep::Review;
    }

    /// Re-parse the feed buffer into the transaction table.
    fn refresh_transactions(&mut self) {
        self.transaction_index = 0;
        self.transaction_scroll = 0;
        match CsvFeed::parse(&self.csv_text) {
            Ok(txns) => {
                self.set_status(format!("Loaded {} transactions from {}", txns.len(), self.feed_path));
                self.transactions = txns;
            }
            Err(err) => {
                self.transactions.clear();
                self.set_error(format!("Could not parse feed: {err:#}"));
            }
        }
    }

    /// Kick off one audit of the current feed buffer on a worker thread.
    /// Refused while another audit is in flight; an empty buffer fails
    /// without the service ever being invoked.
    pub(crate) fn start_audit(&mut self) {
        if self.auditing {
            self.set_status("Audit already in flight");
            return;
        }
        if self.csv_text.trim().is_empty() {
            self.set_error(AuditError::EmptyInput.to_string());
            return;
        }
        match CsvFeed::parse(&self.csv_text) {
            Ok(txns) => {
                self.transactions = txns;
                self.transaction_index = 0;
                self.transaction_scroll = 0;
            }
            Err(err) => {
                self.set_error(format!("Could not parse feed: {err:#}"));
                return;
            }
        }

        let (tx, rx) = mpsc::channel();
        let client = self.client.clone();
        let raw = self.csv_text.clone();
        std::thread::spawn(move || {
            let _ = tx.send(client.audit(&raw));
        });

        self.audit_rx = Some(rx);
        self.auditing = true;
        self.last_error = None;
        self.set_status("Running audit sequence...");
    }

    /// Drain the audit worker channel, if one is outstanding. Called once
    /// per event-loop tick; all state stays owned by the UI thread.
    pub(crate) fn poll_audit(&mut self, history: &mut HistoryStore) {
        let Some(rx) = &self.audit_rx else { return };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.auditing = false;
                self.audit_rx = None;
                self.set_error("Audit worker exited unexpectedly");
                return;
            }
        };

        self.auditing = false;
        self.audit_rx = None;
        match outcome {
            Ok(report) => {
                if let Err(err) = history.record(report.clone(), &self.csv_text) {
                    tracing::warn!(%err, "failed to persist audit history");
                }
                self.report = Some(report);
                self.report_scroll = 0;
                self.last_error = None;
                self.screen = Screen::Audit;
                self.set_status("Audit complete");
            }
            // Prior report, feed, and history stay untouched on failure.
            Err(err) => self.set_error(err.to_string()),
        }
    }

    /// Bring a past audit back into the main screens.
    pub(crate) fn load_history_entry(&mut self, entry: &HistoryEntry) {
        self.report = Some(entry.report.clone());
        self.report_scroll = 0;
        self.csv_text = entry.raw_csv.clone();
        self.feed_path = format!("(history {})", entry.short_timestamp());
        self.transactions = CsvFeed::parse(&self.csv_text).unwrap_or_default();
        self.transaction_index = 0;
        self.transaction_scroll = 0;
        self.screen = Screen::Audit;
        self.set_status(format!("Loaded audit from {}", entry.short_timestamp()));
    }

    pub(crate) fn refresh_file_browser(&mut self) {
        let mut entries: Vec<PathBuf> = Vec::new();

        if let Some(parent) = self.file_browser_path.parent() {
            entries.push(parent.to_path_buf());
        }

        if let Ok(read_dir) = std::fs::read_dir(&self.file_browser_path) {
            let is_hidden = |p: &PathBuf| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with('.'))
            };

            let all: Vec<PathBuf> = read_dir
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    !is_hidden(p)
                        && (p.is_dir()
                            || p.extension().and_then(|e| e.to_str()).is_some_and(|ext| {
                                matches!(ext.to_ascii_lowercase().as_str(), "csv" | "tsv")
                            }))
                })
                .collect();

            // Dirs first, then files, each sorted alphabetically
            let mut dirs: Vec<PathBuf> = all.iter().filter(|p| p.is_dir()).cloned().collect();
            let mut files: Vec<PathBuf> = all.iter().filter(|p| !p.is_dir()).cloned().collect();
            dirs.sort();
            files.sort();
            entries.extend(dirs);
            entries.extend(files);
        }

        self.file_browser_entries = entries;
        self.file_browser_index = 0;
        self.file_browser_scroll = 0;
    }

    /// Number of lines the report screen can scroll over. Approximate
    /// (pre-wrap), used only to clamp the scroll offset.
    pub(crate) fn report_line_count(&self) -> usize {
        let Some(report) = &self.report else { return 0 };
        let narrative = report.detailed_reasoning.lines().count();
        let leakage = report.leakage_items.len() * 4;
        narrative + leakage + 8
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
