//! Output normalizers.
//!
//! Coerce raw model text into typed fields. The model is an untrusted,
//! non-deterministic text source, so every normalizer is total: malformed
//! input produces a default, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

static CONFIDENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(\.\d+)?").unwrap());

/// Split a raw multi-line field into a list: one entry per non-empty line,
/// trimmed.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Extract a confidence score from raw model text.
///
/// A plain numeric string passes through unchanged, sign and exponent
/// included; otherwise the first unsigned numeric substring wins; with no
/// digits at all the score defaults to 0.0.
pub fn parse_confidence(raw: &str) -> f64 {
    if let Some(value) = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()) {
        return value;
    }

    CONFIDENCE_RE
        .find(raw)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}
