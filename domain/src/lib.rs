//! Domain layer for fundcraft
//!
//! This crate contains the core entities and pure logic of the campaign
//! copy generator. It has no dependencies on infrastructure or CLI concerns
//! and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Campaign
//!
//! A [`CampaignRequest`] describes what copy to generate: the event, its
//! date, the desired tone, and how many fundraising emails and social
//! captions are wanted.
//!
//! ## Prompt
//!
//! [`PromptTemplate`] turns a validated campaign request into the single
//! natural-language instruction sent to the completion provider. The
//! composition is deterministic: identical requests always yield the
//! identical prompt.

pub mod campaign;
pub mod core;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use campaign::CampaignRequest;
pub use crate::core::{error::DomainError, model::Model};
pub use prompt::PromptTemplate;
pub use util::truncate_str;
