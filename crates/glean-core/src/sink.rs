//! Sink Writer — serializes accumulated records to a JSONL or CSV file.
//!
//! The whole payload is rendered in memory first and written with a
//! single `fs::write`, so a failed run leaves either the previous file or
//! nothing — never a half-serialized result. Parent directories are
//! created as needed.

use crate::error::Error;
use crate::types::CanonicalRecord;
use serde::Serialize;
use std::path::Path;

/// Output file format, fixed per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkFormat {
    /// Newline-delimited JSON.
    Jsonl,
    /// Comma-separated values with a header row.
    Csv,
}

impl std::fmt::Display for SinkFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkFormat::Jsonl => write!(f, "jsonl"),
            SinkFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Serialize `records` to `path` in `format`.
pub fn write(records: &[CanonicalRecord], path: &Path, format: SinkFormat) -> Result<(), Error> {
    let payload = match format {
        SinkFormat::Jsonl => render_jsonl(records),
        SinkFormat::Csv => render_csv(records),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| Error::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(path, payload).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// JSONL
// ---------------------------------------------------------------------------

/// One JSONL line for a QA record: the fine-tuning `messages` wrapper with
/// alternating user/assistant entries, plus the label under `metadata`.
#[derive(Serialize)]
struct QaLine<'a> {
    messages: [ChatMessage<'a>; 2],
    metadata: Metadata<'a>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct Metadata<'a> {
    pattern: &'a str,
}

/// One JSONL line for a Reason record: flat fields.
#[derive(Serialize)]
struct ReasonLine<'a> {
    reasoning: &'a str,
    negative_example: &'a str,
    pattern: &'a str,
}

fn render_jsonl(records: &[CanonicalRecord]) -> Vec<u8> {
    let mut out = String::new();
    for record in records {
        let line = match record {
            CanonicalRecord::Qa {
                question,
                answer,
                label,
            } => serde_json::to_string(&QaLine {
                messages: [
                    ChatMessage {
                        role: "user",
                        content: question,
                    },
                    ChatMessage {
                        role: "assistant",
                        content: answer,
                    },
                ],
                metadata: Metadata { pattern: label },
            }),
            CanonicalRecord::Reason {
                reasoning,
                counter_example,
                label,
            } => serde_json::to_string(&ReasonLine {
                reasoning,
                negative_example: counter_example,
                pattern: label,
            }),
        };
        // Serialization of plain string fields cannot fail.
        out.push_str(&line.unwrap_or_default());
        out.push('\n');
    }
    out.into_bytes()
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

fn render_csv(records: &[CanonicalRecord]) -> Vec<u8> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let header: [&str; 3] = match records.first() {
        Some(CanonicalRecord::Reason { .. }) | None => ["reasoning", "negative_example", "pattern"],
        Some(CanonicalRecord::Qa { .. }) => ["question", "answer", "pattern"],
    };
    // Writes to an in-memory Vec, which cannot fail.
    let _ = writer.write_record(header);
    for record in records {
        let row: [&str; 3] = match record {
            CanonicalRecord::Qa {
                question,
                answer,
                label,
            } => [question, answer, label],
            CanonicalRecord::Reason {
                reasoning,
                counter_example,
                label,
            } => [reasoning, counter_example, label],
        };
        let _ = writer.write_record(row);
    }
    writer.into_inner().unwrap_or_default()
}
