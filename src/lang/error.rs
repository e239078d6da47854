//! Parse errors.
//!
//! `InstructionError` describes why one instruction failed. `EffectError`
//! wraps it with the instruction's position in the effect string; the effect
//! parser stops at the first failure and never returns a partial list.

use thiserror::Error;

/// Which delimiter was unbalanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntaxReason {
    /// A `(` was never closed.
    UnclosedGroup,
    /// A `"` was never closed.
    UnterminatedQuote,
    /// A `)` appeared with no open group.
    UnmatchedClose,
}

impl std::fmt::Display for SyntaxReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SyntaxReason::UnclosedGroup => "unclosed parenthesis",
            SyntaxReason::UnterminatedQuote => "unterminated quote",
            SyntaxReason::UnmatchedClose => "unmatched closing parenthesis",
        };
        f.write_str(text)
    }
}

/// Fieldless error categories for matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    UnknownAction,
    UnknownStatic,
    UnknownTrigger,
    UnknownField,
    Value,
    MissingField,
}

/// Failure to parse a single instruction.
///
/// `instruction` is the text handed to the parser, untrimmed. For `Syntax`
/// errors the offset counts characters into that text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InstructionError {
    /// Unbalanced parenthesis or quote.
    #[error("syntax error: {reason} at offset {offset} in `{instruction}`")]
    Syntax {
        instruction: String,
        /// Character offset of the offending delimiter.
        offset: usize,
        reason: SyntaxReason,
    },

    /// The action word is not in the action vocabulary.
    #[error("unknown action `{keyword}` in `{instruction}`")]
    UnknownAction { keyword: String, instruction: String },

    /// `static` followed by something that is not a static ability.
    #[error("unknown static ability `{keyword}` in `{instruction}`")]
    UnknownStatic { keyword: String, instruction: String },

    /// Trigger outside the vocabulary (only when validation is enabled).
    #[error("unknown trigger `{keyword}` in `{instruction}`")]
    UnknownTrigger { keyword: String, instruction: String },

    /// Field outside the vocabulary (only when validation is enabled).
    #[error("unknown field `{keyword}` in `{instruction}`")]
    UnknownField { keyword: String, instruction: String },

    /// An integer literal was expected.
    #[error("expected an integer, found `{token}` in `{instruction}`")]
    Value { token: String, instruction: String },

    /// A required slot was empty.
    #[error("missing {expected} in `{instruction}`")]
    MissingField {
        expected: &'static str,
        instruction: String,
    },
}

impl InstructionError {
    /// The error category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            InstructionError::Syntax { .. } => ErrorKind::Syntax,
            InstructionError::UnknownAction { .. } => ErrorKind::UnknownAction,
            InstructionError::UnknownStatic { .. } => ErrorKind::UnknownStatic,
            InstructionError::UnknownTrigger { .. } => ErrorKind::UnknownTrigger,
            InstructionError::UnknownField { .. } => ErrorKind::UnknownField,
            InstructionError::Value { .. } => ErrorKind::Value,
            InstructionError::MissingField { .. } => ErrorKind::MissingField,
        }
    }

    /// Re-anchor a syntax error onto `instruction`, of which the tokenized
    /// text was a suffix starting `shift` characters in.
    pub(crate) fn rebase(self, instruction: &str, shift: usize) -> Self {
        match self {
            InstructionError::Syntax { offset, reason, .. } => InstructionError::Syntax {
                instruction: instruction.to_string(),
                offset: offset + shift,
                reason,
            },
            other => other,
        }
    }

    /// The raw text of the failing instruction.
    #[must_use]
    pub fn instruction(&self) -> &str {
        match self {
            InstructionError::Syntax { instruction, .. }
            | InstructionError::UnknownAction { instruction, .. }
            | InstructionError::UnknownStatic { instruction, .. }
            | InstructionError::UnknownTrigger { instruction, .. }
            | InstructionError::UnknownField { instruction, .. }
            | InstructionError::Value { instruction, .. }
            | InstructionError::MissingField { instruction, .. } => instruction,
        }
    }
}

/// Failure to parse an effect string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("instruction {index} (`{instruction}`): {source}")]
pub struct EffectError {
    /// Zero-based index of the `;`-delimited segment that failed.
    pub index: usize,
    /// The segment's text.
    pub instruction: String,
    #[source]
    pub source: InstructionError,
}

impl EffectError {
    /// The underlying error category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

/// Result of parsing one instruction.
pub type InstructionResult<T> = std::result::Result<T, InstructionError>;
