//! Task Registry Module
//!
//! The single source of truth for task state. Every task submitted through the
//! HTTP boundary gets a record here, and every observer (status handler, worker
//! pool, stats reporter) reads the same store.
//!
//! ## Architecture Overview
//! 1. **Submission**: The submission handler inserts a `Pending` record before
//!    responding, so a returned task id is always immediately queryable.
//! 2. **Claiming**: Workers atomically flip a record from `Pending` to `Running`.
//!    The entry-level locking of the underlying concurrent map makes the claim
//!    race-free without a store-wide lock.
//! 3. **Finalization**: The worker that owns a task writes the terminal state
//!    (`Completed` with a result, or `Failed` with an error) as a single entry
//!    update, so status and result are always observed together.
//!
//! Records are never evicted; they live for the lifetime of the process.
//!
//! ## Submodules
//! - **`types`**: Task identifiers, statuses, records, and the result payload.
//! - **`store`**: The concurrent map and its state-transition operations.

pub mod store;
pub mod types;
