//! Corkboard: in-memory kanban board state store.
//!
//! This crate is the single source of truth for a task-board
//! application: tasks live in ordered columns within boards, and the
//! store applies create/update/delete/move operations while preserving
//! the structural invariants (store-wide unique task identifiers,
//! single-column residency, stable insertion order). A session manager
//! owns the signed-in user and its authentication transitions.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (mock credential
//!   verifier, recording and tracing notification sinks)
//!
//! # Modules
//!
//! - [`board`]: Board store and the board/column/task domain
//! - [`session`]: Session identity and authentication transitions
//! - [`notify`]: User-facing notification boundary
//! - [`demo`]: Seed fixtures mirroring the product's demo data

pub mod board;
pub mod demo;
pub mod notify;
pub mod session;
