//! Test builders — ergonomic constructors for eval logs and samples.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning
//! `Result`.

use glean_core::{CanonicalRecord, EvalLog};
use std::path::Path;

/// Build an [`EvalLog`] from `(raw_text, target)` pairs, going through the
/// same JSON document shape the external harness writes.
pub fn eval_log(samples: &[(&str, &str)]) -> EvalLog {
    serde_json::from_value(log_json(samples)).expect("test log document must deserialize")
}

/// The raw JSON document for `(raw_text, target)` pairs, shaped like the
/// external harness output.
pub fn log_json(samples: &[(&str, &str)]) -> serde_json::Value {
    let samples: Vec<serde_json::Value> = samples
        .iter()
        .map(|(content, target)| {
            serde_json::json!({
                "output": { "choices": [ { "message": { "content": content } } ] },
                "target": target,
            })
        })
        .collect();
    serde_json::json!({ "samples": samples })
}

/// Write a harness-shaped log document to `dir/input.json` and return its
/// path.
pub fn write_log_file(dir: &Path, samples: &[(&str, &str)]) -> std::path::PathBuf {
    let path = dir.join("input.json");
    std::fs::write(&path, log_json(samples).to_string()).expect("write test log file");
    path
}

/// Build a QA record.
pub fn qa_record(question: &str, answer: &str, label: &str) -> CanonicalRecord {
    CanonicalRecord::Qa {
        question: question.to_string(),
        answer: answer.to_string(),
        label: label.to_string(),
    }
}

/// Build a Reason record.
pub fn reason_record(reasoning: &str, counter_example: &str, label: &str) -> CanonicalRecord {
    CanonicalRecord::Reason {
        reasoning: reasoning.to_string(),
        counter_example: counter_example.to_string(),
        label: label.to_string(),
    }
}
