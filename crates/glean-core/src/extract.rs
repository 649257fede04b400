//! Record Extractor — recovers raw JSON objects from sanitized text.
//!
//! Model outputs are inconsistent: sometimes one JSON object, sometimes a
//! JSON-Lines stream. The extraction mode is fixed per run
//! ([`ExtractMode`]), and a failed line or block never blocks extraction
//! of its siblings.

use crate::types::ExtractMode;
use serde_json::{Map, Value};

/// An untyped object recovered from one JSON-parseable span.
pub type RawObject = Map<String, Value>;

/// Result of parsing one candidate span.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Object(RawObject),
    /// The span was not a JSON object; carries the offending text.
    Failure(String),
}

/// Run the configured extraction strategy over the sanitized lines.
pub fn extract(lines: &[String], mode: ExtractMode) -> Vec<Parsed> {
    match mode {
        ExtractMode::Lines => extract_lines(lines),
        ExtractMode::Block => extract_block(lines),
    }
}

/// Multi-line mode: each line is an independent JSON-parse candidate.
///
/// If not a single line parses, the joined block is tried once before
/// giving up — outputs that pretty-print one object across several lines
/// would otherwise be lost.
fn extract_lines(lines: &[String]) -> Vec<Parsed> {
    let parsed: Vec<Parsed> = lines.iter().map(|line| parse_span(line)).collect();
    let any_object = parsed.iter().any(|p| matches!(p, Parsed::Object(_)));
    if !any_object && lines.len() > 1 {
        let block = extract_block(lines);
        if matches!(block.first(), Some(Parsed::Object(_))) {
            return block;
        }
    }
    parsed
}

/// Whole-block mode: the joined lines are one JSON-parse candidate.
fn extract_block(lines: &[String]) -> Vec<Parsed> {
    if lines.is_empty() {
        return Vec::new();
    }
    vec![parse_span(&lines.join("\n"))]
}

fn parse_span(text: &str) -> Parsed {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(obj)) => Parsed::Object(obj),
        // A span that parses but is not an object (a bare string, number,
        // array) is still a parse failure for our purposes.
        Ok(_) | Err(_) => Parsed::Failure(text.to_string()),
    }
}
