//! upda-core
//!
//! Pure domain types for the UPDA score sheet: the capture `Packet`, the
//! per-patient score table, score validation, and on-disk path conventions.
//! No PDF dependency — this is the shared vocabulary of the reporting tools.

pub mod encoding;
pub mod error;
pub mod models;
pub mod paths;
pub mod scoring;
