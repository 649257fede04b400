//! Input document model — the eval log produced by the external
//! LLM-invocation harness.
//!
//! The log is a single JSON document of the shape
//! `{ "samples": [ { "output": { "choices": [ { "message": { "content": … } } ] }, "target": … } ] }`.
//! It is read once, whole-file, at the start of a run and never mutated.
//! Extra keys the harness records alongside this shape are ignored.

use crate::error::Error;
use serde::Deserialize;
use std::path::Path;

/// The full eval log: an ordered sequence of samples.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalLog {
    pub samples: Vec<Sample>,
}

/// One evaluation item: the model's raw output plus a category label.
#[derive(Debug, Clone, Deserialize)]
pub struct Sample {
    pub output: SampleOutput,
    /// Category tag (e.g. a behavior-pattern name), carried through to
    /// every record extracted from this sample.
    pub target: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleOutput {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Message,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub content: String,
}

impl Sample {
    /// The model's raw output text, taken from the first choice. `None`
    /// when the harness recorded no choices for this sample.
    pub fn raw_text(&self) -> Option<&str> {
        self.output
            .choices
            .first()
            .map(|c| c.message.content.as_str())
    }
}

impl EvalLog {
    /// Read and parse the eval log at `path`. Both an unreadable file and
    /// a structurally invalid document are fatal.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let bytes = std::fs::read(path).map_err(|source| Error::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| Error::InputParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
