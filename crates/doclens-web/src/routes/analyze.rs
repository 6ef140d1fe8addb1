//! Analyze route handler.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::error;

use doclens_core::{validate_document, AnalysisReport, AnalysisRequest, DoclensError};

use crate::state::AppState;

const ANALYSIS_FAILED: &str =
    "An error occurred during analysis. Please try again with a different input.";

/// JSON error body for 4xx/5xx responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// POST /analyze - Run the three analysis tasks over a document.
///
/// Responds 400 when the document is missing or too short (no model calls
/// are made), 200 with the three-section report otherwise. Failures inside
/// a section are reported within that section of the 200 response; only
/// failures outside all sections become a 500.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisReport>, (StatusCode, Json<ErrorBody>)> {
    let document = match validate_document(&request.document) {
        Ok(document) => document,
        Err(DoclensError::Validation(message)) => {
            return Err((StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })));
        }
        Err(e) => return Err(internal_error(e)),
    };

    let report = state
        .analyzer
        .analyze(&document)
        .await
        .map_err(internal_error)?;

    Ok(Json(report))
}

fn internal_error(e: DoclensError) -> (StatusCode, Json<ErrorBody>) {
    error!(error = %e, "Analysis failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: ANALYSIS_FAILED.to_string(),
        }),
    )
}
