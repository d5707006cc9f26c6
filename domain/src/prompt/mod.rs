//! Prompt domain
//!
//! Composition of the instruction sent to the completion provider.

mod template;

pub use template::PromptTemplate;
