//! Response extractor — recovers structure from the model's free-text reply.
//!
//! The reply has no guaranteed grammar, so extraction works over a small set
//! of named markers. Each sub-extraction is an independent `Option`-returning
//! lookup; a miss in one never affects the others, and `extract` composes the
//! three into a `ParsedAnalysis` with per-field defaults. Extraction never
//! fails and performs no range validation of the score.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Neutral midpoint used when no score statement is found in the reply.
pub const DEFAULT_SCORE: &str = "3.00";

lazy_static! {
    /// Score statement: "Career Level Index", optional "(CLI)" or "CLI",
    /// "=", then a decimal of the form digits.digits.
    static ref SCORE_STMT: Regex = Regex::new(
        r"(?i)Career\s+Level\s+Index\s*(?:\(\s*CLI\s*\)|CLI)?\s*=\s*(\d+\.\d+)"
    )
    .unwrap();
    /// Explanation: the run of text after the score statement, up to a blank
    /// line, a trailing newline, or end of input.
    static ref EXPLANATION: Regex = Regex::new(
        r"(?i)Career\s+Level\s+Index\s*(?:\(\s*CLI\s*\)|CLI)?\s*=\s*\d+\.\d+\s*(.+?)(?:\n\n|\n$|$)"
    )
    .unwrap();
    /// Start of the category breakdown section.
    static ref CATEGORY_HEADER: Regex = Regex::new(r"(?i)Category Breakdown").unwrap();
    /// The header label itself, stripped from the captured section.
    static ref CATEGORY_LABEL: Regex = Regex::new(r"(?i)^Category Breakdown[:\s]*").unwrap();
    /// End marker: the breakdown runs up to (excluding) this, else end of input.
    static ref RAW_SCORE_MARKER: Regex = Regex::new(r"(?i)\n\nRaw Score:").unwrap();
    /// Delimiter between numbered categories: digits, a period, whitespace.
    static ref ITEM_MARKER: Regex = Regex::new(r"\d+\.\s+").unwrap();
}

/// Structured fields recovered from one raw model reply.
/// A pure function of the input text; absent sections get defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedAnalysis {
    /// CLI value as a 2-decimal string. Defaults to [`DEFAULT_SCORE`].
    pub cli: String,
    /// Sentence(s) following the score statement. Possibly empty.
    pub explanation: String,
    /// HTML fragment with one block per scoring category. Possibly empty.
    pub category_breakdown: String,
}

/// Best-effort extraction of score, explanation, and category breakdown.
/// Never fails: each field falls back to its default on a miss.
pub fn extract(raw_text: &str) -> ParsedAnalysis {
    let cli = match extract_score(raw_text) {
        Some(score) => score,
        None => {
            debug!("No score statement in reply; defaulting CLI to {DEFAULT_SCORE}");
            DEFAULT_SCORE.to_string()
        }
    };

    let explanation = extract_explanation(raw_text).unwrap_or_default();
    let category_breakdown = extract_category_breakdown(raw_text).unwrap_or_default();

    ParsedAnalysis {
        cli,
        explanation,
        category_breakdown,
    }
}

/// Finds the score statement and returns the captured value, right-padded to
/// two decimal places ("3.5" becomes "3.50").
fn extract_score(raw_text: &str) -> Option<String> {
    let captured = SCORE_STMT.captures(raw_text)?.get(1)?.as_str();
    Some(pad_to_two_places(captured))
}

fn pad_to_two_places(value: &str) -> String {
    match value.split_once('.') {
        Some((_, fraction)) if fraction.len() == 1 => format!("{value}0"),
        _ => value.to_string(),
    }
}

/// Captures the text immediately following the score statement, trimmed.
/// `None` when the score statement itself is absent.
fn extract_explanation(raw_text: &str) -> Option<String> {
    let captured = EXPLANATION.captures(raw_text)?.get(1)?.as_str();
    Some(captured.trim().to_string())
}

/// Captures the category breakdown section and renders it as HTML blocks.
/// `None` when no "Category Breakdown" header exists in the reply.
fn extract_category_breakdown(raw_text: &str) -> Option<String> {
    let start = CATEGORY_HEADER.find(raw_text)?.start();
    let section = &raw_text[start..];

    // Section ends before "\n\nRaw Score:" when present, else at end of input
    let end = RAW_SCORE_MARKER
        .find(section)
        .map(|m| m.start())
        .unwrap_or(section.len());
    let body = CATEGORY_LABEL.replace(&section[..end], "");
    let body = body.trim();

    let mut html = String::new();
    for fragment in ITEM_MARKER.split(body) {
        if fragment.trim().is_empty() {
            continue;
        }

        let lines: Vec<&str> = fragment
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let Some((name, details)) = lines.split_first() else {
            continue;
        };

        let name = name.trim_end_matches(':');
        let details = details.join("<br>");
        html.push_str(&format!(
            r#"<div class="category"><span class="category-title">{name}:</span><div class="category-details">{details}</div></div>"#
        ));
    }

    Some(html)
}
