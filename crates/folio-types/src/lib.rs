//! Foundation types for folio.
//!
//! This crate contains the types shared by every folio crate: input events,
//! the static content document, shell configuration, and error types.

pub mod config;
pub mod content;
pub mod error;
pub mod input;
