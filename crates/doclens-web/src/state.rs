//! Application state.

use doclens_llm::DocumentAnalyzer;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<DocumentAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<DocumentAnalyzer>) -> Self {
        Self { analyzer }
    }
}
