//! Task Store
//!
//! Concurrent in-memory storage for task records. Used `DashMap` so that
//! unrelated tasks never contend on one global lock: each operation only
//! locks the shard (or entry) it touches, and no lock is ever held across
//! an await point.

use super::types::*;

use anyhow::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// The central component managing task state.
pub struct TaskStore {
    /// Local storage for tasks. Structure: `Task ID -> TaskRecord`.
    tasks: DashMap<TaskId, TaskRecord>,
}

impl TaskStore {
    /// Creates a new, empty store.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            tasks: DashMap::new(),
        })
    }

    /// Registers a newly submitted task as `Pending`.
    ///
    /// Only inserts if the id is not already present (idempotency); the id
    /// generation scheme makes collisions practically impossible, but an
    /// accidental duplicate must never clobber an existing record.
    pub fn insert(&self, task_id: TaskId, input: i64) {
        if self.tasks.contains_key(&task_id) {
            tracing::warn!("Duplicate task id {} ignored", task_id.0);
            return;
        }

        self.tasks.insert(
            task_id.clone(),
            TaskRecord {
                task_id,
                status: TaskStatus::Pending,
                input,
                result: None,
                error: None,
                created_at: now_ms(),
            },
        );
    }

    /// Retrieves all tasks eligible for execution (status `Pending`).
    ///
    /// Returns a snapshot; by the time a worker tries to claim one of these,
    /// another worker may already have taken it.
    pub fn pending_tasks(&self) -> Vec<(TaskId, i64)> {
        self.tasks
            .iter()
            .filter(|entry| entry.status == TaskStatus::Pending)
            .map(|entry| (entry.key().clone(), entry.input))
            .collect()
    }

    /// Attempts to lock a pending task for execution by a worker.
    ///
    /// Sets the task status to `Running`. The check-and-set runs under the
    /// entry lock, so exactly one of several racing workers wins.
    pub fn try_claim(&self, task_id: &TaskId) -> bool {
        if let Some(mut entry) = self.tasks.get_mut(task_id) {
            // Ensure task is still Pending (another worker might have raced us)
            if entry.status != TaskStatus::Pending {
                return false;
            }

            entry.status = TaskStatus::Running;
            tracing::debug!("Claimed task {}", task_id.0);
            return true;
        }

        false
    }

    /// Marks a running task as `Completed` and attaches its result.
    ///
    /// Status and result are written under the same entry lock, so a concurrent
    /// reader can never observe `Completed` without the result present.
    pub fn complete(&self, task_id: &TaskId, result: TaskResult) -> Result<()> {
        if let Some(mut entry) = self.tasks.get_mut(task_id) {
            if entry.status != TaskStatus::Running {
                return Err(anyhow::anyhow!(
                    "Task not running (status: {:?})",
                    entry.status
                ));
            }

            entry.status = TaskStatus::Completed;
            entry.result = Some(result);
            tracing::info!("Task {} completed", task_id.0);
            return Ok(());
        }

        Err(anyhow::anyhow!("Task not found"))
    }

    /// Marks a running task as `Failed` with an error message.
    pub fn fail(&self, task_id: &TaskId, error: String) -> Result<()> {
        if let Some(mut entry) = self.tasks.get_mut(task_id) {
            if entry.status != TaskStatus::Running {
                return Err(anyhow::anyhow!(
                    "Task not running (status: {:?})",
                    entry.status
                ));
            }

            entry.status = TaskStatus::Failed;
            entry.error = Some(error.clone());
            tracing::error!("Task {} failed: {}", task_id.0, error);
            return Ok(());
        }

        Err(anyhow::anyhow!("Task not found"))
    }

    /// Read-only lookup of a task's current record.
    pub fn get(&self, task_id: &TaskId) -> Option<TaskRecord> {
        self.tasks.get(task_id).map(|entry| entry.value().clone())
    }

    /// Returns the total number of records in the store.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Counts records per status, for the periodic stats reporter.
    pub fn status_counts(&self) -> (usize, usize, usize, usize) {
        let mut pending = 0;
        let mut running = 0;
        let mut completed = 0;
        let mut failed = 0;

        for entry in self.tasks.iter() {
            match entry.status {
                TaskStatus::Pending => pending += 1,
                TaskStatus::Running => running += 1,
                TaskStatus::Completed => completed += 1,
                TaskStatus::Failed => failed += 1,
            }
        }

        (pending, running, completed, failed)
    }
}
