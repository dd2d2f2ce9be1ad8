//! External Catalog Integration
//!
//! URL construction for the sheet-music catalog and the call to the AI
//! search API, including the classification of its free-text answer.

use super::types::{CheckResponse, Verdict};
use crate::config::Config;
use anyhow::Result;
use serde_json::json;

/// Verdict markers the prompt instructs the AI to lead its answer with.
const MARKER_AVAILABLE: &str = "【対象】";
const MARKER_NOT_AVAILABLE: &str = "【対象外】";
const MARKER_UNKNOWN: &str = "【不明】";

/// Builds the external sheet-music catalog search URL for a term.
pub fn catalog_search_url(term: &str) -> String {
    format!(
        "https://www.print-gakufu.com/search/result/keyword__{}/",
        urlencoding::encode(term.trim())
    )
}

/// Classifies an AI answer by the verdict marker on its first line.
///
/// When a marker is present the remaining lines become the details; an answer
/// without any marker is `Unknown` with the full text kept as details.
pub fn parse_verdict(text: &str) -> (Verdict, String) {
    let trimmed = text.trim();
    let first_line = trimmed.lines().next().unwrap_or("");

    let verdict = if first_line.contains(MARKER_NOT_AVAILABLE) {
        Some(Verdict::NotAvailable)
    } else if first_line.contains(MARKER_AVAILABLE) {
        Some(Verdict::Available)
    } else if first_line.contains(MARKER_UNKNOWN) {
        Some(Verdict::Unknown)
    } else {
        None
    };

    match verdict {
        Some(verdict) => {
            let details = trimmed
                .lines()
                .skip(1)
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string();
            (verdict, details)
        }
        None => (Verdict::Unknown, trimmed.to_string()),
    }
}

fn build_prompt(query: &str) -> String {
    format!(
        "ヤマハの「プリント楽譜」ウェブサイト (www.print-gakufu.com) の情報を検索し、検索クエリ「{}」に関連する楽曲が**アプリ見放題プラン**の対象か調べてください。回答は以下の形式で厳密に従ってください。1. **判定結果:** 最初の行に、判定結果を「【対象】」「【対象外】」「【不明】」のいずれかで必ず記述してください。2. **サマリー:** 次の行に、判定結果の簡単な理由を記述してください。3. **関連楽曲リスト:** アーティストの対象曲を、見つかったものだけでいいので、曲名の前に必ず「♫」をつけて箇条書きでリストアップしてください。",
        query
    )
}

/// Asks the external AI search whether the catalog's subscription plan covers
/// `query`, returning the classified verdict and the grounding sources.
pub async fn check_catalog(
    client: &reqwest::Client,
    config: &Config,
    query: &str,
) -> Result<CheckResponse> {
    let api_key = config
        .ai_api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("AI_API_KEY is not configured"))?;
    let url = format!("{}?key={}", config.ai_endpoint, api_key);

    let body = json!({
        "contents": [{ "parts": [{ "text": build_prompt(query) }] }],
        "tools": [{ "googleSearch": {} }],
    });

    let response = client.post(&url).json(&body).send().await?;
    if !response.status().is_success() {
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        return Err(anyhow::anyhow!("AI API error {}: {}", status, detail));
    }

    let payload: serde_json::Value = response.json().await?;
    let text = payload["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .unwrap_or("");
    let sources = payload["candidates"][0]["groundingMetadata"]["groundingChunks"]
        .as_array()
        .cloned()
        .unwrap_or_default();

    let (result, details) = parse_verdict(text);
    Ok(CheckResponse {
        result,
        details,
        sources,
    })
}
