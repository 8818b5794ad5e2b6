//! `GET /health`

use axum::extract::State;
use axum::response::Json;
use serde_json::{Value, json};

use crate::traits::FileMaterializer;
use crate::webserver_impl::WebServer;

/// Health check endpoint
pub async fn health_check<M>(State(webserver): State<WebServer<M>>) -> Json<Value>
where
    M: FileMaterializer + 'static,
{
    Json(json!({
        "status": "healthy",
        "uptime": webserver.state().get_uptime_seconds(),
        "sessions": webserver.state().session_count().await,
        "outputDir": webserver.materializer().output_dir().display().to_string(),
    }))
}
