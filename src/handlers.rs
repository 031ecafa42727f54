use crate::config::Config;
use crate::errors::AppError;
use crate::models::{
    DiagnosticoRow, EvaluationRequest, EvaluationResponse, SubmissionRequest, SubmissionResponse,
};
use crate::questions;
use crate::scoring;
use crate::storage::DiagnosticStorage;
use crate::validation::is_plausible_email;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: PgPool,
    /// Application configuration.
    pub config: Config,
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "zw-diagnostic-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /api/v1/diagnosticos
///
/// Persists one completed diagnostic session.
///
/// Flow:
/// 1. Validate that the answer set carries an email (the only required field).
/// 2. Log data-quality anomalies (implausible email, unanswered required
///    questions) without rejecting - presence of the email is the whole
///    contract.
/// 3. Insert one append-only row and return the generated id.
///
/// A persistence failure surfaces as 500, but the collector shows results to
/// the respondent regardless; there is no retry here.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `payload` - JSON body with the answer set plus the client-computed
///   percentage (`score`) and tier (`nivel`).
///
/// # Returns
///
/// * `Result<(StatusCode, Json<SubmissionResponse>), AppError>` - The
///   generated row id or an error.
pub async fn submit_diagnostic(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmissionRequest>,
) -> Result<(StatusCode, Json<SubmissionResponse>), AppError> {
    tracing::info!(
        "POST /diagnosticos - nivel: {:?}, score: {:?}",
        payload.nivel,
        payload.score
    );

    // Step 1: Email is the only hard requirement
    let email = payload
        .answers
        .single("email")
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::BadRequest("Email es requerido".to_string()))?
        .to_string();

    // Step 2: Data-quality warnings, never rejections
    if !is_plausible_email(&email) {
        tracing::warn!("Storing diagnostic with implausible email");
    }
    let missing = questions::missing_required(&payload.answers);
    if !missing.is_empty() {
        tracing::warn!("Diagnostic submitted with unanswered questions: {:?}", missing);
    }

    // Step 3: Append-only insert
    let storage = DiagnosticStorage::new(state.db.clone());
    let id = storage
        .insert_diagnostic(
            &email,
            &payload.answers,
            payload.score,
            payload.nivel.as_deref(),
        )
        .await?;

    tracing::info!("Diagnostic stored: {}", id);

    Ok((
        StatusCode::OK,
        Json(SubmissionResponse { success: true, id }),
    ))
}

/// POST /api/v1/diagnosticos/evaluar
///
/// Computes the full diagnostic for an answer set without persisting
/// anything. Scoring is pure and total over arbitrary answer shapes, so this
/// endpoint always answers 200.
pub async fn evaluate_diagnostic(
    Json(payload): Json<EvaluationRequest>,
) -> Json<EvaluationResponse> {
    let result = scoring::compute_diagnostic(&payload.answers);
    let insight = scoring::insight_for(&payload.answers);

    tracing::info!(
        "Evaluated diagnostic - percentage: {:?}, nivel: {}",
        result.percentage,
        result.level.as_str()
    );

    Json(EvaluationResponse { result, insight })
}

/// GET /api/v1/diagnosticos/:id
///
/// Retrieves a persisted diagnostic by its generated id.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `id` - The UUID of the diagnostic row.
///
/// # Returns
///
/// * `Result<Json<DiagnosticoRow>, AppError>` - The stored row or a 404.
pub async fn get_diagnostic(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DiagnosticoRow>, AppError> {
    tracing::info!("GET /diagnosticos/{}", id);

    let storage = DiagnosticStorage::new(state.db.clone());
    let row = storage
        .fetch_diagnostic(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Diagnostic with id {} not found", id)))?;

    Ok(Json(row))
}

/// GET /api/v1/preguntas
///
/// Serves the ordered question catalog so any collector front-end can render
/// the quiz without duplicating it.
pub async fn list_questions() -> Json<&'static [questions::Question]> {
    Json(questions::catalog())
}
