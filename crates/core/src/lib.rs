//! Domain logic for the contact service.
//!
//! This crate has zero internal deps so it can be used by both the
//! API/repository layer and any future CLI or worker tooling. Everything
//! here is pure: no I/O, no database, no HTTP.

pub mod birthday;
pub mod contact;
pub mod error;
pub mod search;
pub mod types;
pub mod update;
