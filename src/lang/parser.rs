//! Single-instruction parser.
//!
//! Grammar, after an optional `trigger?`:
//!
//! ```text
//! <static-ability>
//! static <static-ability>
//! inc|dec <field> <int|(expr)> [name] [creatureid|kind|a/b] [all|global]
//! gen [<int>|(expr)] [colour/colour...]
//! draw|discard|heal|damage [(expr)|<int>] [creatureid]
//! <other action> [value] [name] [creatureid|kind|a/b] [all|global]
//! ```
//!
//! A trigger is any word ending in `?`, or a word from the trigger vocabulary
//! (`tapfor`). Tokens left over once a grammar is done are ignored and logged.
//!
//! Quoted literals fill keyword slots like bare words, but in the value, name,
//! target and scope slots they are always plain text: never a number, a `/`
//! list, a target kind or a scope.
//!
//! Errors carry the instruction exactly as passed in, untrimmed; syntax
//! offsets count characters into that same text.

use crate::core::{Action, ActionFamily, ParserConfig, StaticAbility, Vocabulary};

use super::error::{InstructionError, InstructionResult};
use super::instruction::{split_alternatives, Instruction, Scope, TargetType, Value};
use super::token::Token;
use super::tokenizer::Tokenizer;

/// Read position within one instruction's tokens.
struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_atom(&self) -> Option<&'a str> {
        self.peek().and_then(Token::as_atom)
    }

    fn peek_bare(&self) -> Option<&'a str> {
        self.peek().and_then(Token::as_bare)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn remaining(&self) -> &'a [Token] {
        self.tokens.get(self.pos..).unwrap_or(&[])
    }
}

/// Parses one instruction into an `Instruction`.
///
/// The parser holds no per-call state; one instance can be shared freely.
#[derive(Clone, Copy, Debug)]
pub struct InstructionParser {
    config: ParserConfig,
    vocab: &'static Vocabulary,
}

impl InstructionParser {
    /// Create a parser with the given configuration.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            vocab: config.vocabulary(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse one instruction.
    ///
    /// Returns `Ok(None)` when the text holds nothing to parse (blank, or only
    /// empty quotes).
    pub fn parse_single(&self, instruction: &str) -> InstructionResult<Option<Instruction>> {
        let text = instruction.trim();
        if text.is_empty() {
            return Ok(None);
        }

        if let Some(ability) = StaticAbility::from_keyword(text) {
            tracing::trace!(status = %ability, "parsed static ability");
            return Ok(Some(Instruction::static_ability(ability, instruction)));
        }

        let tokens = Tokenizer::tokenize(text).map_err(|err| {
            let leading = instruction.chars().take_while(|c| c.is_whitespace()).count();
            err.rebase(instruction, leading)
        })?;
        if tokens.is_empty() {
            return Ok(None);
        }

        let mut cursor = Cursor::new(&tokens);
        let trigger = self.parse_trigger(&mut cursor, instruction)?;
        let mut inst = self.parse_action(&mut cursor, instruction)?;
        inst.trigger = trigger;

        match inst.action.family() {
            ActionFamily::Modifier => self.parse_modifier(&mut cursor, &mut inst)?,
            ActionFamily::Generate => self.parse_generate(&mut cursor, &mut inst)?,
            ActionFamily::ResourceCount => self.parse_resource_count(&mut cursor, &mut inst)?,
            ActionFamily::Generic => self.parse_generic(&mut cursor, &mut inst)?,
            ActionFamily::Static => self.parse_static(&mut cursor, &mut inst)?,
        }

        let rest = cursor.remaining();
        if !rest.is_empty() {
            tracing::debug!(
                instruction,
                ignored = rest.len(),
                first = %rest[0],
                "ignoring trailing tokens"
            );
        }

        tracing::trace!(action = %inst.action, instruction, "parsed instruction");
        Ok(Some(inst))
    }

    fn parse_trigger(
        &self,
        cursor: &mut Cursor<'_>,
        raw: &str,
    ) -> InstructionResult<Option<String>> {
        let is_trigger = |w: &&str| w.ends_with('?') || self.vocab.is_trigger(w);
        let Some(word) = cursor.peek_atom().filter(is_trigger) else {
            return Ok(None);
        };
        cursor.advance();

        if !self.vocab.is_trigger(word) {
            if self.config.validate_triggers {
                return Err(InstructionError::UnknownTrigger {
                    keyword: word.to_string(),
                    instruction: raw.to_string(),
                });
            }
            tracing::debug!(trigger = word, "trigger not in vocabulary");
        }
        Ok(Some(word.to_string()))
    }

    fn parse_action(&self, cursor: &mut Cursor<'_>, raw: &str) -> InstructionResult<Instruction> {
        let keyword = match cursor.next() {
            Some(Token::Atom(word) | Token::Quoted(word)) => word.as_str(),
            Some(group) => {
                return Err(InstructionError::UnknownAction {
                    keyword: group.to_string(),
                    instruction: raw.to_string(),
                })
            }
            None => return Err(missing("action", raw)),
        };

        if let Some(ability) = StaticAbility::from_keyword(keyword) {
            return Ok(Instruction::static_ability(ability, raw));
        }
        match Action::from_keyword(keyword) {
            Some(action) => Ok(Instruction::new(action, raw)),
            None => Err(InstructionError::UnknownAction {
                keyword: keyword.to_string(),
                instruction: raw.to_string(),
            }),
        }
    }

    /// `inc|dec <field> <value> [tail]`
    fn parse_modifier(
        &self,
        cursor: &mut Cursor<'_>,
        inst: &mut Instruction,
    ) -> InstructionResult<()> {
        let field = match cursor.next() {
            Some(Token::Atom(word) | Token::Quoted(word)) => word,
            _ => return Err(missing("field", &inst.raw)),
        };
        if !self.vocab.is_field(field) {
            if self.config.validate_fields {
                return Err(InstructionError::UnknownField {
                    keyword: field.clone(),
                    instruction: inst.raw.clone(),
                });
            }
            tracing::debug!(field = %field, "field not in vocabulary");
        }
        inst.field = Some(field.clone());

        inst.value = Some(match cursor.next() {
            Some(Token::Group(group)) => Value::Expr(group.clone()),
            Some(Token::Atom(word) | Token::Quoted(word)) => {
                Value::Int(parse_int(word, &inst.raw)?)
            }
            None => return Err(missing("value", &inst.raw)),
        });

        self.parse_target_tail(cursor, inst);
        Ok(())
    }

    /// `gen [amount] [colours]`
    fn parse_generate(
        &self,
        cursor: &mut Cursor<'_>,
        inst: &mut Instruction,
    ) -> InstructionResult<()> {
        inst.field = Some(Vocabulary::MANA_FIELD.to_string());
        inst.amount = Some(1);

        let mut expr = None;
        match cursor.peek() {
            Some(Token::Group(group)) => {
                expr = Some(group.clone());
                cursor.advance();
            }
            Some(Token::Atom(word) | Token::Quoted(word)) => {
                inst.amount = Some(parse_int(word, &inst.raw)?);
                cursor.advance();
            }
            None => {}
        }

        if let Some(colours) = cursor.peek_atom() {
            inst.value = Some(Value::List(split_alternatives(colours).collect()));
            inst.amount_expr = expr;
            cursor.advance();
        } else {
            inst.value = expr.map(Value::Expr);
        }
        Ok(())
    }

    /// `draw|discard|heal|damage [(expr)|int] [creatureid]`
    ///
    /// A word that is not integer-shaped is left for the next slot; one that
    /// is integer-shaped but out of range is an error.
    fn parse_resource_count(
        &self,
        cursor: &mut Cursor<'_>,
        inst: &mut Instruction,
    ) -> InstructionResult<()> {
        inst.amount = Some(1);

        match cursor.peek() {
            Some(Token::Group(group)) => {
                inst.value = Some(Value::Expr(group.clone()));
                cursor.advance();
            }
            Some(Token::Atom(word) | Token::Quoted(word)) if is_integer_literal(word) => {
                inst.amount = Some(parse_int(word, &inst.raw)?);
                cursor.advance();
            }
            _ => {}
        }

        if cursor.peek_atom() == Some(Vocabulary::CREATURE_ID) {
            inst.creature_id_required = true;
            cursor.advance();
        }
        Ok(())
    }

    /// `<action> [value] [tail]`
    fn parse_generic(
        &self,
        cursor: &mut Cursor<'_>,
        inst: &mut Instruction,
    ) -> InstructionResult<()> {
        let value = match cursor.peek() {
            Some(Token::Group(group)) => Some(Value::Expr(group.clone())),
            Some(Token::Quoted(text)) => Some(Value::Text(text.clone())),
            Some(Token::Atom(word))
                if !self.vocab.is_target_type(word) && !self.vocab.is_scope(word) =>
            {
                Some(literal_value(word, &inst.raw)?)
            }
            _ => None,
        };
        if value.is_some() {
            inst.value = value;
            cursor.advance();
        }

        self.parse_target_tail(cursor, inst);
        Ok(())
    }

    /// `static <ability>`; the bare-keyword form has its status already.
    fn parse_static(
        &self,
        cursor: &mut Cursor<'_>,
        inst: &mut Instruction,
    ) -> InstructionResult<()> {
        if inst.status.is_some() {
            return Ok(());
        }
        let word = match cursor.next() {
            Some(Token::Atom(word) | Token::Quoted(word)) => word,
            Some(group) => return Err(unknown_static(&group.to_string(), &inst.raw)),
            None => return Err(missing("static ability", &inst.raw)),
        };
        let ability =
            StaticAbility::from_keyword(word).ok_or_else(|| unknown_static(word, &inst.raw))?;
        inst.status = Some(ability);
        Ok(())
    }

    /// `[name] [creatureid|kind|a/b] [all|global]`, each slot optional.
    fn parse_target_tail(&self, cursor: &mut Cursor<'_>, inst: &mut Instruction) {
        let name = match cursor.peek() {
            Some(Token::Quoted(text)) => Some(text),
            Some(Token::Atom(word)) if self.is_name(word) => Some(word),
            _ => None,
        };
        if let Some(name) = name {
            inst.name = Some(name.clone());
            cursor.advance();
        }

        if let Some(word) = cursor.peek_bare() {
            if word == Vocabulary::CREATURE_ID {
                inst.creature_id_required = true;
                cursor.advance();
            } else if word.contains('/') || self.vocab.is_target_type(word) {
                inst.target_type = Some(TargetType::from_token(word));
                cursor.advance();
            }
        }

        if let Some(scope) = cursor.peek_bare().and_then(Scope::from_keyword) {
            inst.scope = Some(scope);
            cursor.advance();
        }
    }

    /// A word is a name unless it reads as a target spec or a scope.
    fn is_name(&self, word: &str) -> bool {
        !self.vocab.is_target_type(word) && !word.contains('/') && !self.vocab.is_scope(word)
    }
}

impl Default for InstructionParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

fn parse_int(word: &str, raw: &str) -> InstructionResult<i64> {
    word.parse().map_err(|_| InstructionError::Value {
        token: word.to_string(),
        instruction: raw.to_string(),
    })
}

/// Optional sign, then one or more ASCII digits.
fn is_integer_literal(word: &str) -> bool {
    let digits = word.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(word);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn literal_value(word: &str, raw: &str) -> InstructionResult<Value> {
    if is_integer_literal(word) {
        return parse_int(word, raw).map(Value::Int);
    }
    Ok(if word.contains('/') {
        Value::List(split_alternatives(word).collect())
    } else {
        Value::Text(word.to_string())
    })
}

fn missing(expected: &'static str, raw: &str) -> InstructionError {
    InstructionError::MissingField {
        expected,
        instruction: raw.to_string(),
    }
}

fn unknown_static(keyword: &str, raw: &str) -> InstructionError {
    InstructionError::UnknownStatic {
        keyword: keyword.to_string(),
        instruction: raw.to_string(),
    }
}
