//! HTTP surface for the contact relay

use crate::config::MailConfig;
use crate::email::EmailDispatch;
use crate::schema::{FieldErrors, RawSubmission};
use crate::submit::{handle_submission, SubmissionResult};
use anyhow::Result;
use axum::{
    extract::{Form, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// HTTP server wrapping the submission pipeline.
pub struct ContactServer {
    dispatch: Arc<dyn EmailDispatch>,
    config: MailConfig,
    addr: SocketAddr,
}

impl ContactServer {
    /// Create a server with an injected dispatch client.
    pub fn new(dispatch: Arc<dyn EmailDispatch>, config: MailConfig, addr: SocketAddr) -> Self {
        Self {
            dispatch,
            config,
            addr,
        }
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> Result<()> {
        let addr = self.addr;
        let app = self.build_router();

        info!("Starting contact relay on {addr}");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Build the router; split out so tests can drive it without a socket.
    pub fn build_router(self) -> Router {
        let shared_state = Arc::new(AppState {
            dispatch: self.dispatch,
            config: self.config,
        });

        Router::new()
            .route("/api/health", get(health_check))
            .route("/api/contact", post(submit_contact))
            .layer(CorsLayer::permissive())
            .with_state(shared_state)
    }
}

/// Shared per-server state; submissions themselves share nothing.
pub struct AppState {
    pub dispatch: Arc<dyn EmailDispatch>,
    pub config: MailConfig,
}

/// Wire form of the submission outcome, mirroring the form-state object the
/// site's client component consumes.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl From<SubmissionResult> for SubmitResponse {
    fn from(result: SubmissionResult) -> Self {
        match result {
            SubmissionResult::Accepted => Self {
                success: true,
                errors: None,
                message: Some("success"),
            },
            SubmissionResult::Rejected { field_errors } => Self {
                success: false,
                errors: Some(field_errors),
                message: None,
            },
            SubmissionResult::ServerError => Self {
                success: false,
                errors: None,
                message: Some("server_error"),
            },
        }
    }
}

async fn health_check() -> Json<&'static str> {
    Json("ok")
}

/// Accept a contact-form post. Always HTTP 200: the outcome lives in the
/// body, matching the original client contract.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<RawSubmission>,
) -> Json<SubmitResponse> {
    let result = handle_submission(state.dispatch.as_ref(), &state.config, &raw).await;
    Json(SubmitResponse::from(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_response_shape() {
        let response = SubmitResponse::from(SubmissionResult::Accepted);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "message": "success"}));
    }

    #[test]
    fn rejected_response_carries_field_errors() {
        let mut field_errors = FieldErrors::new();
        field_errors.insert("email", vec!["invalid_email"]);
        let response = SubmitResponse::from(SubmissionResult::Rejected { field_errors });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "errors": {"email": ["invalid_email"]}})
        );
    }

    #[test]
    fn server_error_response_hides_details() {
        let response = SubmitResponse::from(SubmissionResult::ServerError);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "server_error"})
        );
    }
}
