use super::protocol::*;
use crate::registry::store::TaskStore;
use crate::registry::types::{TaskId, TaskStatus};

use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

/// `POST /execute` — accept a computation request and start it asynchronously.
///
/// The record is registered as `Pending` before the response is written, so a
/// client that polls the returned id immediately always finds it. Rejected
/// bodies create nothing: no record, no background work.
pub async fn handle_execute(
    Extension(store): Extension<Arc<TaskStore>>,
    body: Result<Json<ExecuteRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = body else {
        tracing::debug!("Rejected submission: unparseable body");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid JSON body".to_string(),
            }),
        )
            .into_response();
    };

    let Some(arguments) = req.arguments else {
        tracing::debug!("Rejected submission: missing arguments");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing arguments".to_string(),
            }),
        )
            .into_response();
    };

    let task_id = TaskId::new();
    store.insert(task_id.clone(), arguments.number);

    tracing::info!(
        "Task submitted: {} (number: {})",
        task_id.0,
        arguments.number
    );

    (
        StatusCode::OK,
        Json(ExecuteResponse {
            task_id,
            status: TaskStatus::Pending,
        }),
    )
        .into_response()
}

/// `GET /task_status/:task_id` — return the full current record, or 404.
pub async fn handle_task_status(
    Extension(store): Extension<Arc<TaskStore>>,
    Path(task_id_str): Path<String>,
) -> Response {
    let task_id = TaskId(task_id_str);

    match store.get(&task_id) {
        Some(record) => {
            tracing::debug!("Task status query: {} -> {:?}", task_id.0, record.status);
            (StatusCode::OK, Json(record)).into_response()
        }
        None => {
            tracing::debug!("Task not found: {}", task_id.0);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Task not found".to_string(),
                }),
            )
                .into_response()
        }
    }
}
