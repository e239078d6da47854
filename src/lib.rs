//! # ccg-esl
//!
//! Front-end for the card Effect Specification Language (ESL): the small
//! textual language that describes what a card does, e.g.
//! `"haste; tap? inc att 2 all; gen 1 red/green"`.
//!
//! ## Design Principles
//!
//! 1. **Pure parsing**: turning text into instructions has no side effects
//!    and no hidden state. The same text always yields the same result, and
//!    parsers can be shared across threads.
//!
//! 2. **Immutable vocabulary**: keyword tables are built once and shared by
//!    reference (`core::VOCABULARY`).
//!
//! 3. **Late evaluation**: parenthesized groups are kept as unresolved
//!    expressions for the execution engine; the parser never evaluates them.
//!
//! 4. **Fail fast**: one bad instruction fails the whole effect. A partial
//!    instruction list is never returned.
//!
//! ## Modules
//!
//! - `core`: Action and static-ability keywords, vocabulary tables, parser configuration
//! - `lang`: Tokenizer, instruction parser, effect parser, errors
//! - `cards`: Card records and a registry that parses card effects on load

pub mod cards;
pub mod core;
pub mod lang;

// Re-export commonly used types
pub use crate::core::{Action, ActionFamily, ParserConfig, StaticAbility, Vocabulary, VOCABULARY};

pub use crate::lang::{
    parse, EffectError, EffectParser, ErrorKind, Group, Instruction, InstructionError,
    InstructionParser, Scope, SyntaxReason, TargetType, Token, Tokenizer, Value,
};

pub use crate::cards::{Card, CardId, CardKind, CardRecord, CardRegistry, LoadPolicy};
