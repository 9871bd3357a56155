use serde::{Deserialize, Serialize};

/// Fixed message attached to every successful result payload.
pub const RESULT_MESSAGE: &str = "Hello from Rust";

/// Unique identifier for a task within the agent.
///
/// Wrapper around a UUID string with an agent-identifying prefix, so ids from
/// different agents in the same orchestration are distinguishable at a glance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TaskId(pub String);

impl TaskId {
    /// Generates a new random UUID v4-based TaskId.
    pub fn new() -> Self {
        Self(format!("math-{}", uuid::Uuid::new_v4()))
    }
}

/// Represents the lifecycle state of a task.
///
/// Transitions are strictly forward: `Pending -> Running -> (Completed | Failed)`.
/// Serialized lowercase to match the orchestrator wire format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task has been accepted but not yet picked up by any worker.
    Pending,
    /// Task is currently being processed by a worker.
    Running,
    /// Task finished successfully; the record carries a result payload.
    Completed,
    /// Task execution failed; the record carries an error message.
    Failed,
}

/// The result payload of a completed computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskResult {
    /// The number the client submitted.
    pub input: i64,
    /// `input * input`.
    pub square: i64,
    /// Fixed greeting, see [`RESULT_MESSAGE`].
    pub message: String,
}

/// The full task record stored in the registry.
///
/// This is also the wire shape returned by the status endpoint: `result` and
/// `error` are omitted from the JSON while absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub task_id: TaskId,
    /// Current execution status.
    pub status: TaskStatus,
    /// The submitted number.
    pub input: i64,
    /// Present exactly when `status == Completed`. Write-once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TaskResult>,
    /// Present exactly when `status == Failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Timestamp (ms) when the task was submitted.
    pub created_at: u64,
}

/// Helper to get the current system time in milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}
