//! Doclens Core Library
//!
//! Domain records, validation, and output normalization for the
//! document analysis service.

pub mod error;
pub mod normalize;
pub mod report;
pub mod request;

pub use error::{DoclensError, DoclensResult};
pub use report::{AnalysisReport, EntityExtraction, SectionResult, SentimentAnalysis, Summarization};
pub use request::{validate_document, AnalysisRequest, MIN_DOCUMENT_WORDS};
