//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_campaign;
pub mod list_models;
