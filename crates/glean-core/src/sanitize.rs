//! Content Sanitizer — strips formatting noise from a raw model-output
//! blob before any JSON parsing is attempted.
//!
//! Model output routinely arrives wrapped in markdown code fences
//! (```` ``` ````, ```` ```json ````, ```` ```jsonl ````) and padded with
//! blank lines. Sanitization removes both, yielding the candidate lines
//! the extractor works on. The operation is idempotent and has no error
//! conditions.

/// Split `raw` into trimmed candidate lines, dropping blank lines and
/// code-fence delimiter lines (a leading ```` ``` ```` with or without a
/// language tag).
pub fn sanitize(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("```"))
        .map(str::to_string)
        .collect()
}
