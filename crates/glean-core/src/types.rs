//! Core types shared across all pipeline stages: the extraction
//! configuration enums, the [`CanonicalRecord`] output shape, the tagged
//! per-candidate [`Outcome`], and the [`RunReport`] accumulator.

/// How the extractor treats a sample's sanitized text.
///
/// Resolved once per run from config or CLI flags, never guessed per
/// sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    /// Each sanitized line is an independent JSON-parse candidate. If no
    /// line parses, the joined block is tried once as a fallback.
    Lines,
    /// The sanitized lines are joined and parsed as one JSON document.
    Block,
}

impl std::fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractMode::Lines => write!(f, "lines"),
            ExtractMode::Block => write!(f, "block"),
        }
    }
}

/// Which record shape the normalizer builds from a raw object.
///
/// Key names are case-sensitive and fixed by the upstream prompt contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// `question` / `answer` pairs.
    Qa,
    /// `reasoning` / `negative_example` pairs.
    Reason,
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Schema::Qa => write!(f, "qa"),
            Schema::Reason => write!(f, "reason"),
        }
    }
}

/// A validated, fully-populated record in the pipeline's output schema.
///
/// Constructed only by the normalizer, and only when every required field
/// is non-empty. `label` is the sample's category tag, carried through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalRecord {
    Qa {
        question: String,
        answer: String,
        label: String,
    },
    Reason {
        reasoning: String,
        counter_example: String,
        label: String,
    },
}

impl CanonicalRecord {
    /// The category label this record was extracted under.
    pub fn label(&self) -> &str {
        match self {
            CanonicalRecord::Qa { label, .. } => label,
            CanonicalRecord::Reason { label, .. } => label,
        }
    }
}

/// Per-candidate result of running one JSON-parseable span through the
/// extractor and normalizer.
///
/// Line failures and field skips are genuinely different kinds of noise:
/// the first is text that was not JSON at all, the second is a parsed
/// object missing a required field. Keeping them as distinct variants lets
/// tests and diagnostics assert on each independently.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A valid record was produced.
    Record(CanonicalRecord),
    /// The span was not a JSON object. Carries the offending text for
    /// operator triage.
    LineFailure { text: String },
    /// The span parsed but a required field was missing or empty. Silently
    /// dropped, by policy — an incomplete extraction is expected noise.
    FieldSkip,
}

/// Everything one pipeline run produces: the ordered records plus the
/// failure counters, returned as values rather than printed, so the
/// pipeline is callable and testable without capturing process output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// All valid records, in sample order and, within a sample, in the
    /// order their spans occurred in the raw text.
    pub records: Vec<CanonicalRecord>,
    /// Samples that yielded zero valid records.
    pub failed_samples: usize,
    /// Spans that failed to parse as a JSON object.
    pub line_failures: usize,
    /// Parsed objects dropped for a missing or empty required field.
    pub field_skips: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_accessor_covers_both_variants() {
        let qa = CanonicalRecord::Qa {
            question: "q".into(),
            answer: "a".into(),
            label: "sneaking".into(),
        };
        let reason = CanonicalRecord::Reason {
            reasoning: "r".into(),
            counter_example: "c".into(),
            label: "sycophancy".into(),
        };
        assert_eq!(qa.label(), "sneaking");
        assert_eq!(reason.label(), "sycophancy");
    }

    #[test]
    fn enums_deserialize_from_config_strings() {
        let mode: ExtractMode = serde_json::from_str("\"lines\"").unwrap();
        assert_eq!(mode, ExtractMode::Lines);
        let schema: Schema = serde_json::from_str("\"reason\"").unwrap();
        assert_eq!(schema, Schema::Reason);
    }
}
