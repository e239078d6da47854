//! The Effect Specification Language front-end.
//!
//! Data flows one way:
//!
//! ```text
//! "tap? inc att 2 all; haste"
//!          │  EffectParser: split on `;`, skip blanks
//!          ▼
//! "tap? inc att 2 all"
//!          │  Tokenizer
//!          ▼
//! [tap?, inc, att, 2, all]
//!          │  InstructionParser: trigger, action, per-action grammar
//!          ▼
//! Instruction { trigger: tap?, action: inc, field: att, value: 2, scope: all }
//! ```
//!
//! - `Tokenizer`: one instruction into `Token`s (atoms and flat groups)
//! - `InstructionParser`: tokens into one `Instruction`
//! - `EffectParser`: a full effect string into an ordered `Vec<Instruction>`
//!
//! Parenthesized groups are kept unresolved (`Value::Expr`) for the execution
//! engine to evaluate.

mod effect;
mod error;
mod instruction;
mod parser;
mod token;
mod tokenizer;

pub use effect::{parse, EffectParser};
pub use error::{EffectError, ErrorKind, InstructionError, InstructionResult, SyntaxReason};
pub use instruction::{Instruction, Scope, TargetType, Value};
pub use parser::InstructionParser;
pub use token::{Group, Token};
pub use tokenizer::Tokenizer;
