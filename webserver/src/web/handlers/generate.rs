//! `POST /generate` (alias `POST /api/ask`)

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;

use super::session_id;
use crate::core::SessionContext;
use crate::error::{WebServerError, WebServerResult};
use crate::traits::FileMaterializer;
use crate::webserver_impl::WebServer;
use shared::{GenerateRequest, GenerateResponse, ProcessId, logging, process_info};

/// Classify the prompt, materialize any bundle, and answer with the JSON envelope
pub async fn generate<M>(
    State(webserver): State<WebServer<M>>,
    headers: HeaderMap,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> WebServerResult<Json<GenerateResponse>>
where
    M: FileMaterializer + 'static,
{
    let Json(request) = payload.map_err(|e| WebServerError::validation(e.body_text()))?;
    let prompt = request
        .prompt()
        .ok_or_else(|| WebServerError::validation("Prompt is required"))?;
    let request_type = request.request_type();

    let classification = webserver.state().classifier.classify(prompt, request_type);

    if !classification.files.is_empty() {
        let written = webserver
            .materializer()
            .materialize(&classification.files)
            .await
            .map_err(|e| {
                logging::log_error(ProcessId::current(), "Bundle materialization", &e);
                e
            })?;

        let session = session_id(&headers);
        logging::log_progress(
            ProcessId::current(),
            "Materialized bundle",
            &format!("{} files for session '{}' ({} request)", written.len(), session, request_type),
        );
        webserver
            .state()
            .record_generation(&session, SessionContext::new(prompt, classification.files.clone(), written))
            .await;
    } else {
        process_info!(ProcessId::current(), "💬 Answered {} request with no files", request_type);
    }

    Ok(Json(classification.into_response()))
}
