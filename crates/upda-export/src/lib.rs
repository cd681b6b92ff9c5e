//! upda-export
//!
//! Score-sheet PDF rendering and template overlay for UPDA reports.

pub mod config;
pub mod error;
pub mod layout;
pub mod merge;
pub mod reporter;
pub mod score_sheet;
