//! Keyword vocabularies and parser configuration.
//!
//! Everything here is immutable once built. The standard vocabulary lives
//! in a single process-wide table, so parsers on different threads share it
//! by reference without any coordination.

pub mod config;
pub mod vocabulary;

pub use config::ParserConfig;
pub use vocabulary::{Action, ActionFamily, StaticAbility, Vocabulary, VOCABULARY};
