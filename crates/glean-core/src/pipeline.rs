//! Batch Coordinator — drives Sanitizer → Extractor → Normalizer over
//! every sample in an eval log.
//!
//! Failure containment is the whole point: no error escapes a single
//! sample's processing. Per-line parse failures and field skips are
//! aggregated into the [`RunReport`] counters; a sample that yields zero
//! valid records is counted and its raw text logged for triage, and the
//! batch moves on.

use crate::extract::{self, Parsed};
use crate::log::EvalLog;
use crate::normalize;
use crate::sanitize::sanitize;
use crate::types::{ExtractMode, Outcome, RunReport, Schema};

/// Extraction configuration, resolved once per run.
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub mode: ExtractMode,
    pub schema: Schema,
}

/// Process every sample in `log` in document order and return the
/// accumulated records and failure counters.
pub fn run(log: &EvalLog, opts: &PipelineOptions) -> RunReport {
    let mut report = RunReport::default();

    for sample in &log.samples {
        let Some(raw_text) = sample.raw_text() else {
            tracing::warn!(label = %sample.target, "sample has no model output");
            report.failed_samples += 1;
            continue;
        };

        let mut found_valid = false;
        for outcome in process_sample(raw_text, &sample.target, opts) {
            match outcome {
                Outcome::Record(record) => {
                    report.records.push(record);
                    found_valid = true;
                }
                Outcome::LineFailure { text } => {
                    tracing::warn!(line = %text, "failed to parse output line as JSON");
                    report.line_failures += 1;
                }
                Outcome::FieldSkip => {
                    tracing::debug!("parsed object missing a required field, skipped");
                    report.field_skips += 1;
                }
            }
        }

        if !found_valid {
            tracing::warn!(
                label = %sample.target,
                raw = %raw_text,
                "failed to extract any record from sample"
            );
            report.failed_samples += 1;
        }
    }

    report
}

/// Run one sample's raw text through the full per-sample pipeline,
/// returning the tagged outcome of every candidate span in order.
pub fn process_sample(raw_text: &str, label: &str, opts: &PipelineOptions) -> Vec<Outcome> {
    let lines = sanitize(raw_text);
    extract::extract(&lines, opts.mode)
        .into_iter()
        .map(|parsed| match parsed {
            Parsed::Object(obj) => match normalize::normalize(opts.schema, &obj, label) {
                Some(record) => Outcome::Record(record),
                None => Outcome::FieldSkip,
            },
            Parsed::Failure(text) => Outcome::LineFailure { text },
        })
        .collect()
}
