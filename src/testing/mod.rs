//! Test support utilities
//!
//! Shared fixtures for unit and integration tests: in-memory databases
//! with migrations applied, a fast password hasher and a full actix
//! service instance via the [`service!`](crate::service) macro.

pub mod instance;
pub mod setup;
