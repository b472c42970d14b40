use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ConvertError;
use crate::llm::{CompletionBackend, GroqClient, ModelError};
use crate::prompt::build_prompt;
use crate::render::{render_code, Outcome};
use crate::request::{ConversionRequest, Submission};
use crate::state::AppState;

/// POST /api/convert. Outcome category is data, not transport status: the
/// page renders every kind into the same output region, so the handler
/// always answers 200 with a tagged payload.
pub async fn convert(
    State(state): State<AppState>,
    Json(submission): Json<Submission>,
) -> Json<Outcome> {
    let submission_id = Uuid::new_v4();
    info!(
        %submission_id,
        source = %submission.source_language,
        target = %submission.target_language,
        chars = submission.source_code.chars().count(),
        "processing conversion submission"
    );

    let model_config = state.config.model_config.clone();
    let outcome = process_submission(&submission, |api_key| {
        GroqClient::new(api_key, &model_config)
            .map(|client| Arc::new(client) as Arc<dyn CompletionBackend>)
    })
    .await;

    info!(%submission_id, outcome = outcome_kind(&outcome), "submission finished");
    Json(outcome)
}

/// Run one submission through the whole flow: screen the input, build the
/// prompt, invoke the backend once, wrap the reply for display. Exactly one
/// outcome comes back, and no backend is even constructed unless every
/// precondition holds.
pub async fn process_submission<F>(submission: &Submission, make_backend: F) -> Outcome
where
    F: FnOnce(&str) -> Result<Arc<dyn CompletionBackend>, ModelError>,
{
    let request = match ConversionRequest::from_submission(submission) {
        Ok(Some(request)) => request,
        Ok(None) => return Outcome::Idle,
        Err(err) => return Outcome::from(err),
    };

    let backend = match make_backend(request.api_key()) {
        Ok(backend) => backend,
        Err(err) => return Outcome::from(ConvertError::Remote(err)),
    };

    let prompt = build_prompt(
        request.source_language(),
        request.target_language(),
        request.source_code(),
    );

    match backend.complete(&prompt).await {
        Ok(reply) => render_code(reply, request.target_language()),
        Err(err) => {
            warn!("completion request failed: {}", err);
            Outcome::from(ConvertError::Remote(err))
        }
    }
}

fn outcome_kind(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Idle => "idle",
        Outcome::Error { .. } => "error",
        Outcome::Warning { .. } => "warning",
        Outcome::Info { .. } => "info",
        Outcome::Code { .. } => "code",
    }
}
