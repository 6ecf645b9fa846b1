//! Core domain types
//!
//! Records decoded from the source-hosting API. They are immutable values,
//! decoded fresh per response and never persisted.

pub mod branch;
pub mod repository;
