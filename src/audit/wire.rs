//! Request/response bodies for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub(crate) contents: Vec<Content>,
    pub(crate) system_instruction: Content,
    pub(crate) generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub(crate) parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Part {
    pub(crate) text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub(crate) response_mime_type: &'static str,
    pub(crate) response_schema: Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub(crate) content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, if the service returned any at all.
    pub(crate) fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.as_str())
            .filter(|t| !t.trim().is_empty())
    }
}

pub(crate) fn build_request(system_instruction: &str, csv_data: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: format!("Analyze this CSV data:\n\n{csv_data}"),
            }],
        }],
        system_instruction: Content {
            parts: vec![Part {
                text: system_instruction.to_string(),
            }],
        },
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: response_schema(),
        },
    }
}

/// Declarative schema for the reply: every report field, its type, and the
/// six mandatory ones. The service is asked (not forced) to honor it; typed
/// deserialization on our side is the enforcement.
pub(crate) fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "burnRatePercentage": {
                "type": "NUMBER",
                "description": "Percentage of income spent (0-100)"
            },
            "leakageItems": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "item": { "type": "STRING" },
                        "reason": { "type": "STRING" },
                        "alternative": {
                            "type": "STRING",
                            "description": "Actionable step to reduce this leakage"
                        }
                    },
                    "required": ["item", "reason", "alternative"]
                }
            },
            "volaVerdictScore": {
                "type": "NUMBER",
                "description": "Health score (0-100)"
            },
            "assetAccumulationSummary": { "type": "STRING" },
            "detailedReasoning": {
                "type": "STRING",
                "description": "Markdown summary of the audit"
            },
            "categorySpending": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "category": { "type": "STRING" },
                        "total": { "type": "NUMBER" }
                    },
                    "required": ["category", "total"]
                }
            }
        },
        "required": [
            "burnRatePercentage",
            "leakageItems",
            "volaVerdictScore",
            "assetAccumulationSummary",
            "detailedReasoning",
            "categorySpending"
        ]
    })
}
