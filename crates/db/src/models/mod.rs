//! Database models: row structs and create/update DTOs.

pub mod contact;
