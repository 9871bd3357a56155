//! API Protocol Definitions
//!
//! Defines the Data Transfer Objects (DTOs) used on the agent's HTTP surface.
//! The shapes follow the orchestrator's agent contract: submission returns
//! `{task_id, status}`, status polling returns the full task record, and
//! error responses carry a JSON `{"error": ...}` body.

use crate::registry::types::{TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

pub const ENDPOINT_EXECUTE: &str = "/execute";
pub const ENDPOINT_TASK_STATUS: &str = "/task_status";

/// Body of `POST /execute`.
///
/// `arguments` is required; a body without it is rejected before any task is
/// created. `number` inside it is optional and defaults to zero.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub arguments: Option<ExecuteArguments>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExecuteArguments {
    #[serde(default)]
    pub number: i64,
}

/// Immediate response to an accepted submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExecuteResponse {
    pub task_id: TaskId,
    pub status: TaskStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
