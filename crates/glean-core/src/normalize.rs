//! Field Normalizer — maps a raw extracted object into a canonical record.
//!
//! Field lookup is case-sensitive with an empty-string default, matching
//! the upstream prompt contract exactly. A missing or empty required field
//! means the candidate is silently dropped (a [`FieldSkip`], not a
//! failure): incomplete extractions are expected noise, not bugs.
//!
//! [`FieldSkip`]: crate::types::Outcome::FieldSkip

use crate::extract::RawObject;
use crate::types::{CanonicalRecord, Schema};

/// Build a canonical record from `obj` under `schema`, tagging it with the
/// sample's `label`. Returns `None` when any required field resolves to an
/// empty string.
pub fn normalize(schema: Schema, obj: &RawObject, label: &str) -> Option<CanonicalRecord> {
    match schema {
        Schema::Qa => {
            let question = field(obj, "question");
            let answer = field(obj, "answer");
            if question.is_empty() || answer.is_empty() {
                return None;
            }
            Some(CanonicalRecord::Qa {
                question,
                answer,
                label: label.to_string(),
            })
        }
        Schema::Reason => {
            let reasoning = field(obj, "reasoning");
            let counter_example = field(obj, "negative_example");
            if reasoning.is_empty() || counter_example.is_empty() {
                return None;
            }
            Some(CanonicalRecord::Reason {
                reasoning,
                counter_example,
                label: label.to_string(),
            })
        }
    }
}

/// String value of `key`, empty when absent or not a JSON string.
fn field(obj: &RawObject, key: &str) -> String {
    obj.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}
