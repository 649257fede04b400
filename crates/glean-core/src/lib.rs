//! glean-core — structured records out of LLM eval-run logs.
//!
//! This crate exposes the pipeline stages as public modules so that the
//! CLI binary and the integration harnesses can import them directly.
//!
//! # Architecture
//!
//! ```text
//! EvalLog ──► Sanitizer ──► Extractor ──► Normalizer ──► Pipeline ──► Sink
//! ```
//!
//! The pipeline is single-threaded and batch-oriented: one complete eval
//! log in, one report (records plus failure counters) out. Per-line and
//! per-sample failures never abort a batch; only a structurally broken
//! input document or an output write error is fatal.

pub mod config;
pub mod error;
pub mod extract;
pub mod log;
pub mod normalize;
pub mod pipeline;
pub mod sanitize;
pub mod sink;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use log::{EvalLog, Sample};
pub use pipeline::{run, PipelineOptions};
pub use sink::SinkFormat;
pub use types::{CanonicalRecord, ExtractMode, Outcome, RunReport, Schema};
