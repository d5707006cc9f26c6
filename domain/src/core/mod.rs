//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — the completion model identifier value object
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
