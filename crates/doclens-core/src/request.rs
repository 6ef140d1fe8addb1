//! Incoming analysis request and validation.

use serde::{Deserialize, Serialize};

use crate::error::{DoclensError, DoclensResult};

/// Minimum number of whitespace-separated words a document must contain.
pub const MIN_DOCUMENT_WORDS: usize = 5;

const TOO_SHORT_MESSAGE: &str =
    "Please provide a more substantial text for analysis (at least 5 words).";

/// Body of `POST /analyze`.
///
/// `document` defaults to empty when the key is absent so that absence is
/// reported by [`validate_document`] with the human-readable message rather
/// than rejected by the JSON layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub document: String,
}

/// Trim the document and require at least [`MIN_DOCUMENT_WORDS`] words.
///
/// Returns the trimmed document on success.
pub fn validate_document(raw: &str) -> DoclensResult<String> {
    let document = raw.trim();

    if document.is_empty() || document.split_whitespace().count() < MIN_DOCUMENT_WORDS {
        return Err(DoclensError::validation(TOO_SHORT_MESSAGE));
    }

    Ok(document.to_string())
}
