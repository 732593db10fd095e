//! Axum route handlers for the Assessment API.

use axum::{body::Bytes, extract::State, Json};
use serde_json::{Map, Value};

use crate::assessment::pipeline::{score_and_rank, AssessmentReport};
use crate::errors::AppError;
use crate::state::AppState;

/// A quiz submission, normalised from either accepted payload shape:
/// `{"answers": {...}, "text": "..."}` or the flat `{"Q1": 2, ..., "text": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub answers: Map<String, Value>,
    pub text: String,
}

impl Submission {
    pub fn from_json(body: Value) -> Result<Self, AppError> {
        let Value::Object(mut fields) = body else {
            return Err(AppError::Validation(
                "request body must be a JSON object".to_string(),
            ));
        };

        let text = match fields.remove("text") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.trim().to_string(),
            Some(other) => other.to_string().trim().to_string(),
        };

        let answers = if fields.contains_key("answers") {
            match fields.remove("answers") {
                Some(Value::Object(answers)) => answers,
                Some(Value::Null) | None => Map::new(),
                Some(_) => {
                    return Err(AppError::Validation(
                        "answers must be an object of question_id → score".to_string(),
                    ))
                }
            }
        } else {
            fields
        };

        Ok(Self { answers, text })
    }
}

/// POST /api/submit
///
/// Scores quiz answers plus optional free text and returns ranked careers.
/// The body is parsed by hand so malformed JSON and a missing content type
/// both come back as `VALIDATION_ERROR`.
pub async fn handle_submit(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AssessmentReport>, AppError> {
    let body: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("request body is not valid JSON: {e}")))?;
    let submission = Submission::from_json(body)?;

    let catalog = state.catalog.current().await;
    if !catalog.is_loaded() {
        return Err(AppError::CatalogUnavailable);
    }

    let report = score_and_rank(
        &submission.answers,
        Some(submission.text.as_str()),
        &catalog,
        &state.config.scoring,
    );
    Ok(Json(report))
}
