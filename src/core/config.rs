//! Parser configuration.
//!
//! The trigger and field vocabularies are advisory by default: a word
//! outside them is accepted and logged. Card pipelines that want a closed
//! language can turn validation on here.

use serde::{Deserialize, Serialize};

use super::vocabulary::{Vocabulary, VOCABULARY};

/// Configuration for `InstructionParser` and `EffectParser`.
///
/// ## Example
///
/// ```
/// use ccg_esl::core::ParserConfig;
///
/// let config = ParserConfig::new().validate_triggers().validate_fields();
/// assert!(config.validates_triggers());
/// assert!(config.validates_fields());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Reject triggers not in the trigger vocabulary.
    pub validate_triggers: bool,

    /// Reject modifier fields not in the field vocabulary.
    pub validate_fields: bool,
}

impl ParserConfig {
    /// Create the default (advisory) configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validate_triggers: false,
            validate_fields: false,
        }
    }

    /// Create a configuration that enforces every vocabulary.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            validate_triggers: true,
            validate_fields: true,
        }
    }

    /// Enforce the trigger vocabulary.
    #[must_use]
    pub const fn validate_triggers(mut self) -> Self {
        self.validate_triggers = true;
        self
    }

    /// Enforce the field vocabulary.
    #[must_use]
    pub const fn validate_fields(mut self) -> Self {
        self.validate_fields = true;
        self
    }

    #[must_use]
    pub const fn validates_triggers(&self) -> bool {
        self.validate_triggers
    }

    #[must_use]
    pub const fn validates_fields(&self) -> bool {
        self.validate_fields
    }

    /// The vocabulary parsers built from this config consult.
    #[must_use]
    pub fn vocabulary(&self) -> &'static Vocabulary {
        &VOCABULARY
    }
}
