//! HTTP API Module
//!
//! The boundary between the agent and its clients (the orchestrator, or a
//! human with curl). Validation happens here; nothing past the handlers ever
//! sees a malformed request.
//!
//! ## Submodules
//! - **`protocol`**: Request/response DTOs and the endpoint path constants.
//! - **`handlers`**: The axum handlers for task submission and status polling.

pub mod handlers;
pub mod protocol;


use crate::registry::store::TaskStore;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// Builds the agent's HTTP router.
///
/// Shared between `main` and the end-to-end tests so both serve the exact
/// same wiring.
pub fn router(store: Arc<TaskStore>) -> Router {
    Router::new()
        .route(protocol::ENDPOINT_EXECUTE, post(handlers::handle_execute))
        .route(
            &format!("{}/:task_id", protocol::ENDPOINT_TASK_STATUS),
            get(handlers::handle_task_status),
        )
        .layer(Extension(store))
}
