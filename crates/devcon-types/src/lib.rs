//! Foundation types for devcon.
//!
//! This crate contains the view-agnostic types shared by the console crates:
//! the error taxonomy, key events and their fixed bindings, log severities,
//! and the init-time configuration.

pub mod config;
pub mod error;
pub mod input;
pub mod severity;
