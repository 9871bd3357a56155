//! Task Executor Module
//!
//! The background execution engine of the agent. Submitted tasks are not run
//! on the request path; they are picked up and driven to a terminal state by
//! a bounded pool of workers.
//!
//! ## Architecture Overview
//! The executor follows a **pull-based** model:
//! 1. **Submission**: The HTTP handler only inserts a `Pending` record and
//!    returns; it never blocks on the computation.
//! 2. **Claiming**: Each worker polls the registry for pending tasks and claims
//!    one via an atomic `Pending -> Running` state change, so two workers can
//!    never execute the same task.
//! 3. **Execution**: The worker simulates the long-running computation, then
//!    squares the input.
//! 4. **Finalization**: Whatever the outcome, the worker records a terminal
//!    state: `Completed` with the result payload, or `Failed` with the error.
//!
//! The pool size bounds how many computations run at once; excess pending
//! tasks simply wait in the registry until a worker frees up.

pub mod executor;
