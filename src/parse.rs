//! Text parsing module for Lectio.
//!
//! This module turns raw text plus a per-language configuration into an
//! ordered stream of classified tokens, with auxiliary transforms for case
//! normalization and phonetic readings. [`factory::ParserFactory`] is the
//! entry point consumed by the rest of the application.

pub mod factory;
pub mod japanese;
pub mod parser;
pub mod sentence;
pub mod space_delimited;
pub mod substitution;
pub mod token;
pub mod turkish;

// Re-export commonly used types
pub use factory::ParserFactory;
pub use parser::{Parser, ReadingFormat};
pub use token::{ParsedToken, PARAGRAPH_MARK};
