//! File endpoints: `POST /files`, `GET /files`, `GET /files/recent`

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;

use super::session_id;
use crate::error::{WebServerError, WebServerResult};
use crate::traits::FileMaterializer;
use crate::types::RecentGeneration;
use crate::webserver_impl::WebServer;
use shared::{CreateFileRequest, CreateFileResponse, FileListing, ProcessId, logging, process_debug, process_info};

const MISSING_FIELDS: &str = "fileName and content are required";

/// Write a single file into the output directory
pub async fn create_file<M>(
    State(webserver): State<WebServer<M>>,
    payload: Result<Json<CreateFileRequest>, JsonRejection>,
) -> WebServerResult<Json<CreateFileResponse>>
where
    M: FileMaterializer + 'static,
{
    let Json(request) = payload.map_err(|e| WebServerError::validation(e.body_text()))?;
    let file_name = request
        .file_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| WebServerError::validation(MISSING_FIELDS))?;
    let content = request
        .content
        .as_deref()
        .filter(|content| !content.is_empty())
        .ok_or_else(|| WebServerError::validation(MISSING_FIELDS))?;

    let language = request.resolved_language(file_name);
    let path = webserver
        .materializer()
        .write_file(file_name, content)
        .await
        .map_err(|e| {
            logging::log_error(ProcessId::current(), "File creation", &e);
            e
        })?;

    process_info!(ProcessId::current(), "📝 Created {} file {}", language, path.display());
    Ok(Json(CreateFileResponse {
        success: true,
        file_name: file_name.to_string(),
        path: path.display().to_string(),
    }))
}

/// List every visible file under the output directory
pub async fn list_files<M>(State(webserver): State<WebServer<M>>) -> Json<FileListing>
where
    M: FileMaterializer + 'static,
{
    let listing = webserver.materializer().list_files().await;
    process_debug!(ProcessId::current(), "📂 Listed {} files", listing.files.len());
    Json(listing)
}

/// The caller's most recent generation, empty when there is none
pub async fn recent_files<M>(State(webserver): State<WebServer<M>>, headers: HeaderMap) -> Json<RecentGeneration>
where
    M: FileMaterializer + 'static,
{
    let session = session_id(&headers);
    let recent = match webserver.state().last_generation(&session).await {
        Some(context) => RecentGeneration {
            prompt: Some(context.prompt),
            files: context.bundle,
            written: context.written,
        },
        None => RecentGeneration::default(),
    };
    Json(recent)
}
