//! Document analysis orchestrator.
//!
//! Runs the three prompt tasks strictly in order. Each section has its own
//! failure boundary: a failed model call or unusable completion turns into
//! that section's error entry while the remaining sections still run.

use std::sync::Arc;

use tracing::{error, info};

use doclens_core::{
    normalize, AnalysisReport, DoclensResult, EntityExtraction, SectionResult, SentimentAnalysis,
    Summarization,
};

use crate::client::CompletionClient;
use crate::task::{run_task, ENTITY_EXTRACTION, SENTIMENT_ANALYSIS, SUMMARIZATION};

/// Orchestrates the three analysis tasks over a single document.
pub struct DocumentAnalyzer {
    client: Arc<dyn CompletionClient>,
}

impl DocumentAnalyzer {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Analyze a validated document.
    ///
    /// Always produces a full three-section report; per-section failures are
    /// logged and embedded in the report rather than propagated.
    pub async fn analyze(&self, document: &str) -> DoclensResult<AnalysisReport> {
        info!(chars = document.len(), "Analyzing document");

        let entity_extraction = match self.extract_entities(document).await {
            Ok(section) => SectionResult::Ok(section),
            Err(e) => {
                error!(error = %e, "Entity extraction failed");
                SectionResult::failed(format!("Entity extraction failed: {e}"))
            }
        };

        let sentiment_analysis = match self.analyze_sentiment(document).await {
            Ok(section) => SectionResult::Ok(section),
            Err(e) => {
                error!(error = %e, "Sentiment analysis failed");
                SectionResult::failed(format!("Sentiment analysis failed: {e}"))
            }
        };

        let summarization = match self.summarize(document).await {
            Ok(section) => SectionResult::Ok(section),
            Err(e) => {
                error!(error = %e, "Summarization failed");
                SectionResult::failed(format!("Summarization failed: {e}"))
            }
        };

        Ok(AnalysisReport {
            entity_extraction,
            sentiment_analysis,
            summarization,
        })
    }

    async fn extract_entities(&self, document: &str) -> DoclensResult<EntityExtraction> {
        let output = run_task(self.client.as_ref(), &ENTITY_EXTRACTION, document).await?;
        Ok(EntityExtraction {
            entities: normalize::split_list(output.field("entities").unwrap_or_default()),
            relationships: normalize::split_list(output.field("relationships").unwrap_or_default()),
        })
    }

    async fn analyze_sentiment(&self, document: &str) -> DoclensResult<SentimentAnalysis> {
        let output = run_task(self.client.as_ref(), &SENTIMENT_ANALYSIS, document).await?;
        Ok(SentimentAnalysis {
            sentiment: output.field("sentiment").unwrap_or_default().to_string(),
            confidence: normalize::parse_confidence(output.field("confidence").unwrap_or_default()),
        })
    }

    async fn summarize(&self, document: &str) -> DoclensResult<Summarization> {
        let output = run_task(self.client.as_ref(), &SUMMARIZATION, document).await?;
        Ok(Summarization {
            summary: output.field("summary").unwrap_or_default().to_string(),
        })
    }
}
