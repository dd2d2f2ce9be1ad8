//! Availability Data Types

use serde::{Deserialize, Serialize};

/// Whether the external catalog's subscription plan covers the queried song,
/// as judged from the AI answer's verdict marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    Available,
    NotAvailable,
    Unknown,
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub query: String,
}

/// Structured form of the AI answer: the verdict, the remaining explanation
/// text, and whatever grounding sources the upstream API attached.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub result: Verdict,
    pub details: String,
    pub sources: Vec<serde_json::Value>,
}
