//! Math Agent Service Library
//!
//! This library crate defines the core modules of the asynchronous math agent.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled subsystems:
//!
//! - **`registry`**: The task state layer. An in-memory, concurrently accessible
//!   store mapping task identifiers to their current record (status, input, result).
//! - **`executor`**: The task processing engine. A bounded pool of background
//!   workers that claim pending tasks, run the computation, and record the outcome.
//! - **`api`**: The HTTP boundary. Request/response DTOs and the axum handlers
//!   for task submission and status polling.

pub mod api;
pub mod executor;
pub mod registry;
