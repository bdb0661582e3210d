use serde::{Deserialize, Serialize};

use super::AuditReport;

/// One persisted audit: the report plus the feed that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// UUID v4, assigned at record time.
    pub id: String,
    /// RFC 3339, UTC.
    pub timestamp: String,
    pub raw_csv: String,
    pub report: AuditReport,
}

impl HistoryEntry {
    pub fn new(report: AuditReport, raw_csv: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            raw_csv,
            report,
        }
    }

    /// Timestamp reduced to "YYYY-MM-DD HH:MM" for list displays.
    pub fn short_timestamp(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| self.timestamp.clone())
    }
}
