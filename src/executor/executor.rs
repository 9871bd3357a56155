//! Worker Pool Implementation
//!
//! Manages the lifecycle of task execution. It spawns background workers that
//! continuously poll the `TaskStore` for pending tasks.
//!
//! ## Responsibilities
//! - **Polling**: continuously checking for `Pending` tasks in the registry.
//! - **Claiming**: atomically marking a task `Running` before touching it.
//! - **Execution**: running the computation and writing the terminal state.

use crate::registry::store::TaskStore;
use crate::registry::types::{TaskId, TaskResult, RESULT_MESSAGE};

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

/// The engine that drives task execution.
pub struct TaskExecutor {
    /// Reference to the task registry (source of work and sink of results).
    store: Arc<TaskStore>,
    /// Number of concurrent workers.
    worker_count: usize,
    /// Simulated duration of the computation.
    compute_delay: Duration,
}

impl TaskExecutor {
    /// Creates a new TaskExecutor.
    ///
    /// # Arguments
    /// * `worker_count`: Upper bound on concurrently running computations.
    /// * `compute_delay`: How long each computation is simulated to take.
    pub fn new(store: Arc<TaskStore>, worker_count: usize, compute_delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            store,
            worker_count,
            compute_delay,
        })
    }

    /// Spawns the workers and returns immediately.
    /// Each worker runs independently in an infinite loop.
    pub async fn start(self: Arc<Self>) {
        tracing::info!("Starting {} task workers", self.worker_count);

        for worker_id in 0..self.worker_count {
            let executor = self.clone();
            tokio::spawn(async move {
                executor.worker_loop(worker_id).await;
            });
        }
    }

    /// The main loop for a single worker.
    ///
    /// 1. Fetches pending tasks from the registry.
    /// 2. Attempts to "claim" one (atomic state change).
    /// 3. If claimed, runs it to a terminal state, then refreshes the list.
    async fn worker_loop(&self, worker_id: usize) {
        tracing::info!("Worker {} started", worker_id);

        loop {
            let tasks = self.store.pending_tasks();

            if tasks.is_empty() {
                // Sleep if no work to avoid busy-waiting
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            }

            tracing::trace!("Worker {} found {} pending tasks", worker_id, tasks.len());

            let mut claimed = false;
            for (task_id, input) in tasks {
                if self.store.try_claim(&task_id) {
                    tracing::info!(
                        "Worker {} claimed task {} (number: {})",
                        worker_id,
                        task_id.0,
                        input
                    );

                    self.run_task(&task_id, input).await;

                    claimed = true;
                    break; // Move to next iteration to refresh task list
                }

                tracing::trace!("Task {} already claimed by another worker", task_id.0);
            }

            // If we didn't successfully claim anything in the list, wait briefly
            if !claimed {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        }
    }

    /// Runs one claimed task to a terminal state.
    ///
    /// The simulated delay suspends only this worker; no registry lock is held
    /// across it. The task always ends `Completed` or `Failed`, never stuck at
    /// `Running`.
    async fn run_task(&self, task_id: &TaskId, input: i64) {
        tokio::time::sleep(self.compute_delay).await;

        let outcome = match compute_square(input) {
            Ok(square) => self.store.complete(
                task_id,
                TaskResult {
                    input,
                    square,
                    message: RESULT_MESSAGE.to_string(),
                },
            ),
            Err(e) => self.store.fail(task_id, e.to_string()),
        };

        if let Err(e) = outcome {
            tracing::error!("Failed to finalize task {}: {}", task_id.0, e);
        }
    }
}

/// The placeholder business computation.
///
/// Overflow is the one way this can fail; it routes the task to `Failed`
/// instead of wrapping silently.
pub fn compute_square(input: i64) -> Result<i64> {
    input
        .checked_mul(input)
        .ok_or_else(|| anyhow::anyhow!("Arithmetic overflow computing square of {}", input))
}
