use thiserror::Error;

use super::wire;
use crate::models::AuditReport;

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const SYSTEM_INSTRUCTION: &str = r#"
Role: You are Vola, a strategic financial AI designed to automate "adulting" and accelerate financial independence.
Task: Analyze provided transaction logs.

Instructions:
1. Calculate the "Burn Rate": What percentage of income was spent immediately? (Total Spend / Total Income).
2. Identify "Leakage": Spot emotional or frictionless spending (e.g., dining out, excessive coffee, impulse tech buys, unused subscriptions).
   - Provide a specific reason WHY it's leakage (e.g., "Frequent high-margin retail spend vs home utility").
   - Suggest a concrete, "Actionable Alternative" to reduce or replace this spend (e.g., "Cancel unused subscriptions like Netflix for immediate $18.99/mo savings" or "Switch to bulk-buy coffee to reduce cost by 85%").
3. The "Vola Verdict": Give a harsh but constructive score (0-100) on their financial health. 100 is perfect discipline.
4. Crypto/Asset Check: Acknowledge asset accumulation (like Coinbase, stocks, or gold) as "deploying capital" rather than "spending." Do not count these as Burn Rate expenses if possible, treat them as transfers to wealth.
5. Tone: Direct, data-driven, slightly futuristic, cold but helpful. No fluff.

Return the result strictly as a JSON object matching the provided schema.
"#;

/// Everything that can go wrong between a loaded feed and a typed report.
#[derive(Debug, Error)]
pub(crate) enum AuditError {
    #[error("Data feed is empty. Provide CSV transactions first.")]
    EmptyInput,
    #[error("Audit service call failed: {0}")]
    Service(#[from] reqwest::Error),
    #[error("No response from the audit service")]
    NoResponse,
    #[error("Audit reply is not a valid report: {0}")]
    MalformedReply(#[from] serde_json::Error),
}

/// One-shot client for the hosted audit model. The service is an opaque,
/// fallible, non-deterministic black box: prompt and schema go in, a typed
/// report or a typed failure comes out. No retries, no streaming.
#[derive(Clone)]
pub(crate) struct AuditClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl AuditClient {
    /// Read the credential and optional model override from the
    /// environment. A missing credential is not pre-validated; the first
    /// call surfaces the service's own authentication error.
    pub(crate) fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .unwrap_or_default();
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self {
            http: reqwest::blocking::Client::new(),
            api_key,
            model,
        }
    }

    /// Run one audit over the raw feed text: exactly one request, and
    /// either a full report or a typed failure. Blank feeds are refused
    /// before any request is built.
    pub(crate) fn audit(&self, raw_csv: &str) -> Result<AuditReport, AuditError> {
        if raw_csv.trim().is_empty() {
            return Err(AuditError::EmptyInput);
        }

        let request = wire::build_request(SYSTEM_INSTRUCTION, raw_csv);
        let url = format!("{ENDPOINT}/{}:generateContent", self.model);
        tracing::debug!(model = %self.model, "issuing audit request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()?
            .error_for_status()?;
        let body: wire::GenerateContentResponse = response.json()?;

        let text = body.first_text().ok_or(AuditError::NoResponse)?.to_string();
        parse_reply(&text)
    }
}

/// Parse the service's reply text. Text that is not JSON, or JSON missing a
/// mandatory report field, fails here as a malformed reply.
pub(crate) fn parse_reply(text: &str) -> Result<AuditReport, AuditError> {
    Ok(serde_json::from_str(text.trim())?)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
