//! Effect-string parser.
//!
//! An effect string is a `;`-separated list of instructions. Blank segments
//! are skipped; every other segment becomes one `Instruction`, in order.

use crate::core::ParserConfig;

use super::error::EffectError;
use super::instruction::Instruction;
use super::parser::InstructionParser;

/// Parses whole effect strings.
///
/// ## Example
///
/// ```
/// use ccg_esl::core::{Action, StaticAbility};
/// use ccg_esl::lang::EffectParser;
///
/// let parser = EffectParser::default();
/// let effect = parser.parse("haste; tap? inc att 2 all;; gen 1 red").unwrap();
///
/// assert_eq!(effect.len(), 3);
/// assert_eq!(effect[0].status, Some(StaticAbility::Haste));
/// assert_eq!(effect[1].action, Action::Inc);
/// assert_eq!(effect[2].action, Action::Gen);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EffectParser {
    instructions: InstructionParser,
}

impl EffectParser {
    /// Instruction separator.
    pub const SEPARATOR: char = ';';

    /// Create a parser with the given configuration.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self {
            instructions: InstructionParser::new(config),
        }
    }

    /// The underlying single-instruction parser.
    #[must_use]
    pub fn instruction_parser(&self) -> &InstructionParser {
        &self.instructions
    }

    /// Parse an effect string into its instructions.
    ///
    /// Fails on the first bad instruction; no partial list is returned.
    pub fn parse(&self, effect: &str) -> Result<Vec<Instruction>, EffectError> {
        let mut parsed = Vec::new();

        for (index, segment) in effect.split(Self::SEPARATOR).enumerate() {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let result = self.instructions.parse_single(segment).map_err(|source| {
                tracing::debug!(
                    index,
                    instruction = segment,
                    error = %source,
                    "instruction rejected"
                );
                EffectError {
                    index,
                    instruction: segment.to_string(),
                    source,
                }
            })?;

            if let Some(inst) = result {
                parsed.push(inst);
            }
        }

        tracing::trace!(count = parsed.len(), "parsed effect");
        Ok(parsed)
    }

    /// Parse an effect that may be absent. `None` yields no instructions.
    pub fn parse_opt(&self, effect: Option<&str>) -> Result<Vec<Instruction>, EffectError> {
        effect.map_or_else(|| Ok(Vec::new()), |text| self.parse(text))
    }
}

/// Parse an effect string with the default configuration.
pub fn parse(effect: &str) -> Result<Vec<Instruction>, EffectError> {
    EffectParser::default().parse(effect)
}
