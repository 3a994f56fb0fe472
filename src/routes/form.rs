use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::response::Redirect;
use std::time::Duration;

use axum_extra::extract::CookieJar;
use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::form::{FieldInput, Phase, Submission, SubmitRejected};
use crate::state::SharedState;

type FormResponse = Result<(CookieJar, Redirect), AppError>;

fn session_gone() -> AppError {
    AppError::Internal("Session vanished during request".to_string())
}

/// Apply the posted fields, validate, and forward. Always lands back on `/`.
pub async fn submit(
    State(state): State<SharedState>,
    jar: CookieJar,
    input: Result<Form<FieldInput>, FormRejection>,
) -> FormResponse {
    let Form(input) = input.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let (jar, id) = state.sessions.resolve_jar(jar, state.config.secure_cookie);

    let begun = state
        .sessions
        .with(id, |session| {
            session.edit(&input);
            session.begin_submit(Utc::now())
        })
        .ok_or_else(session_gone)?;

    match begun {
        Ok(submission) => deliver(&state, id, submission).await?,
        Err(SubmitRejected::InFlight) => {
            tracing::debug!(session = %id, "Submission already in flight, waiting for its outcome");
            wait_for_outcome(&state, id).await;
        }
        Err(rejected) => tracing::debug!(session = %id, "Submission not sent: {rejected}"),
    }

    Ok((jar, Redirect::to("/")))
}

/// Forward outside the session lock, then record the outcome.
async fn deliver(state: &SharedState, id: Uuid, submission: Submission) -> Result<(), AppError> {
    tracing::info!(
        session = %id,
        language = %submission.language,
        complaint_type = submission.complaint_type.value(),
        "Forwarding submission"
    );

    // Spawned so the session leaves `Submitting` even if the client disconnects.
    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let outcome = task_state.forwarder.forward(&submission).await;
        match &outcome {
            Ok(()) => tracing::info!(
                session = %id,
                forwarder = task_state.forwarder.name(),
                "Submission delivered"
            ),
            Err(e) => tracing::warn!(
                session = %id,
                forwarder = task_state.forwarder.name(),
                "Submission delivery failed: {e}"
            ),
        }
        task_state
            .sessions
            .with(id, |session| session.finish_submit(&outcome));
    });

    task.await
        .map_err(|e| AppError::Internal(format!("Forwarding task failed: {e}")))
}

/// Block until the session leaves `Submitting`, bounded by the forward timeout.
async fn wait_for_outcome(state: &SharedState, id: Uuid) {
    let limit = state.config.forward_timeout + Duration::from_secs(1);
    let settled = tokio::time::timeout(limit, async {
        while state.sessions.phase(id) == Some(Phase::Submitting) {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    })
    .await;

    if settled.is_err() {
        tracing::warn!(session = %id, "Gave up waiting for in-flight submission");
    }
}

/// Switch language, keeping whatever the user has typed so far.
pub async fn toggle_language(
    State(state): State<SharedState>,
    jar: CookieJar,
    input: Result<Form<FieldInput>, FormRejection>,
) -> FormResponse {
    let (jar, id) = state.sessions.resolve_jar(jar, state.config.secure_cookie);
    let input = input.map(|Form(input)| input).unwrap_or_default();

    let language = state
        .sessions
        .with(id, |session| {
            if !input.is_empty() {
                session.edit(&input);
            }
            session.toggle_language()
        })
        .ok_or_else(session_gone)?;

    tracing::debug!(session = %id, %language, "Language switched");
    Ok((jar, Redirect::to("/")))
}

/// "Send another": clear the form and return to editing.
pub async fn reset(State(state): State<SharedState>, jar: CookieJar) -> FormResponse {
    let (jar, id) = state.sessions.resolve_jar(jar, state.config.secure_cookie);
    state
        .sessions
        .with(id, |session| session.send_another())
        .ok_or_else(session_gone)?;

    Ok((jar, Redirect::to("/")))
}
