//! Analysis report records.
//!
//! One record per analysis task, plus the aggregate report returned by
//! `POST /analyze`. Each section serializes either as its record or as an
//! `{"error": "..."}` object, so a failed task never hides the others.

use serde::{Deserialize, Serialize};

/// Entities and relationships extracted from the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityExtraction {
    pub entities: Vec<String>,
    pub relationships: Vec<String>,
}

/// Document sentiment with a confidence score.
///
/// `sentiment` is the model's own label (nominally positive/negative/neutral,
/// passed through unvalidated); `confidence` is nominally in [0, 1].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub sentiment: String,
    pub confidence: f64,
}

/// Short summary of the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summarization {
    pub summary: String,
}

/// Outcome of one analysis section.
///
/// Serializes untagged: `Ok` flattens to the record itself, `Failed` to an
/// `{"error": "..."}` object.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SectionResult<T> {
    Ok(T),
    Failed { error: String },
}

impl<T> SectionResult<T> {
    /// Create a failed section with the given message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// Whether this section completed.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}

/// Aggregate result of one analysis request.
///
/// Always serializes to exactly three top-level keys.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub entity_extraction: SectionResult<EntityExtraction>,
    pub sentiment_analysis: SectionResult<SentimentAnalysis>,
    pub summarization: SectionResult<Summarization>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_section_serializes_as_record() {
        let section = SectionResult::Ok(EntityExtraction {
            entities: vec!["Alice".to_string()],
            relationships: vec!["Alice knows Bob".to_string()],
        });

        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["entities"][0], "Alice");
        assert_eq!(value["relationships"][0], "Alice knows Bob");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failed_section_serializes_as_error_object() {
        let section: SectionResult<Summarization> = SectionResult::failed("Summarization failed: boom");

        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["error"], "Summarization failed: boom");
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_report_has_exactly_three_keys() {
        let report = AnalysisReport {
            entity_extraction: SectionResult::Ok(EntityExtraction::default()),
            sentiment_analysis: SectionResult::failed("Sentiment analysis failed: boom"),
            summarization: SectionResult::Ok(Summarization {
                summary: "short".to_string(),
            }),
        };

        let value = serde_json::to_value(&report).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec!["entity_extraction", "sentiment_analysis", "summarization"]
        );
    }

    #[test]
    fn test_confidence_serializes_as_number() {
        let section = SectionResult::Ok(SentimentAnalysis {
            sentiment: "positive".to_string(),
            confidence: 0.87,
        });

        let value = serde_json::to_value(&section).unwrap();
        assert!(value["confidence"].is_f64());
        assert_eq!(value["sentiment"], "positive");
    }
}
