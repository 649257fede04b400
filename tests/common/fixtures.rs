//! Static model-output blobs used across harnesses.
//!
//! Each fixture is one sample's raw output text in a shape the upstream
//! model has actually produced: clean JSONL, fenced JSONL, a single
//! object, a pretty-printed object, or garbage.

/// One well-formed JSON object, no wrapping.
pub const SINGLE_OBJECT: &str = r#"{"question":"Q1","answer":"A1"}"#;

/// Three well-formed objects as a JSON-Lines stream.
pub const JSONL_STREAM: &str = concat!(
    "{\"question\":\"Q1\",\"answer\":\"A1\"}\n",
    "{\"question\":\"Q2\",\"answer\":\"A2\"}\n",
    "{\"question\":\"Q3\",\"answer\":\"A3\"}",
);

/// A JSONL stream wrapped in a markdown code fence with a language tag.
pub const FENCED_JSONL: &str = "```json\n{\"question\":\"Q2\",\"answer\":\"A2\"}\n{\"question\":\"\",\"answer\":\"A3\"}\n```";

/// One object pretty-printed across several lines; no single line parses.
pub const PRETTY_PRINTED: &str = "{\n  \"question\": \"Qp\",\n  \"answer\": \"Ap\"\n}";

/// Not JSON on any line.
pub const GARBAGE: &str = "I'm sorry, I can't help with that.\nPlease rephrase.";

/// A stream mixing valid objects, a malformed line, and an incomplete
/// object.
pub const MIXED_STREAM: &str = concat!(
    "{\"question\":\"Q1\",\"answer\":\"A1\"}\n",
    "{not json}\n",
    "{\"question\":\"Q2\"}\n",
    "{\"question\":\"Q3\",\"answer\":\"A3\"}",
);

/// Reason-schema JSONL stream.
pub const REASON_STREAM: &str = concat!(
    "{\"reasoning\":\"R1\",\"negative_example\":\"N1\"}\n",
    "{\"reasoning\":\"R2\",\"negative_example\":\"N2\"}",
);
