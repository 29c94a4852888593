use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, warn};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

// AppState is shared by every request, the catalog service behind it is built once
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub async fn new(config: Configuration) -> AppState {
        let catalog = create_catalog_service(&config).await;
        AppState {
            config,
            catalog,
        }
    }
}

pub(crate) type ServerError = (StatusCode, Json<Value>);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    warn!(error = %err, "malformed request body");
    (StatusCode::BAD_REQUEST, Json(json!({ "message": format!("{}", err) })))
}

fn internal_error(err: &CommandError) -> ServerError {
    // details stay in the logs, callers get a generic message
    error!(error = ?err, "An error occurred");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": "An unexpected error occurred" })))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::InvalidInput { ref violations } => {
                let errors = violations.iter().map(|v| v.to_string()).collect::<Vec<String>>();
                (StatusCode::BAD_REQUEST, Json(json!({ "message": "Validation failed", "errors": errors })))
            }
            CommandError::NotFound { ref message } => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message })))
            }
            CommandError::Database { .. } => {
                internal_error(&err)
            }
            CommandError::Serialization { .. } => {
                internal_error(&err)
            }
            CommandError::Runtime { .. } => {
                internal_error(&err)
            }
        }
    }
}
