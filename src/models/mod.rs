mod audit;
mod history;
mod transaction;

pub use audit::{AuditReport, CategorySpending, LeakageItem};
pub use history::HistoryEntry;
pub use transaction::Transaction;

#[cfg(test)]
mod tests;
