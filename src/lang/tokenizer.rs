//! Instruction tokenization.
//!
//! Splits one instruction into atoms and groups:
//! - whitespace separates bare words
//! - `"..."` makes one quoted atom, interior spaces kept
//! - `(...)` makes one group, its interior split on whitespace
//!
//! Groups are flat. Nested parentheses are depth-counted so the group ends at
//! the matching `)`, but the inner delimiters are not emitted as tokens.
//! Quotes are only recognized outside groups, and parentheses only outside
//! quotes.

use super::error::{InstructionError, InstructionResult, SyntaxReason};
use super::token::{Group, Token};

/// Scanner state for a single instruction.
pub struct Tokenizer<'src> {
    /// Instruction being tokenized.
    source: &'src str,
    /// Tokens emitted so far.
    tokens: Vec<Token>,
    /// Pending atom text.
    current: String,
    /// Pending group interior text.
    interior: String,
    /// Parenthesis depth.
    depth: usize,
    /// Offset of the open quote, if inside one.
    quote_start: Option<usize>,
    /// Offset of the `(` that opened the current group.
    group_start: usize,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer for one instruction.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            current: String::new(),
            interior: String::new(),
            depth: 0,
            quote_start: None,
            group_start: 0,
        }
    }

    /// Tokenizes an instruction.
    ///
    /// ```
    /// use ccg_esl::lang::{Token, Tokenizer};
    ///
    /// let tokens = Tokenizer::tokenize("inc att (x 2) \"Goblin King\"").unwrap();
    /// assert_eq!(
    ///     tokens,
    ///     vec![
    ///         Token::atom("inc"),
    ///         Token::atom("att"),
    ///         Token::group(["x", "2"]),
    ///         Token::quoted("Goblin King"),
    ///     ]
    /// );
    /// ```
    pub fn tokenize(source: &str) -> InstructionResult<Vec<Token>> {
        Tokenizer::new(source).run()
    }

    /// Scans the whole source.
    pub fn run(mut self) -> InstructionResult<Vec<Token>> {
        let source = self.source;
        for (offset, c) in source.chars().enumerate() {
            self.step(offset, c)?;
        }

        if let Some(offset) = self.quote_start {
            return Err(self.syntax_error(offset, SyntaxReason::UnterminatedQuote));
        }
        if self.depth > 0 {
            return Err(self.syntax_error(self.group_start, SyntaxReason::UnclosedGroup));
        }

        self.flush_atom();
        Ok(self.tokens)
    }

    fn step(&mut self, offset: usize, c: char) -> InstructionResult<()> {
        if c == '"' && self.depth == 0 {
            match self.quote_start.take() {
                Some(_) => self.flush(Token::Quoted),
                None => {
                    self.flush_atom();
                    self.quote_start = Some(offset);
                }
            }
            return Ok(());
        }

        if self.quote_start.is_some() {
            self.current.push(c);
            return Ok(());
        }

        match c {
            '(' => {
                if self.depth == 0 {
                    self.flush_atom();
                    self.group_start = offset;
                } else {
                    self.interior.push(' ');
                }
                self.depth += 1;
            }
            ')' => {
                if self.depth == 0 {
                    return Err(self.syntax_error(offset, SyntaxReason::UnmatchedClose));
                }
                self.depth -= 1;
                if self.depth == 0 {
                    let group = Group::from_interior(&self.interior);
                    self.tokens.push(Token::Group(group));
                    self.interior.clear();
                } else {
                    self.interior.push(' ');
                }
            }
            c if self.depth > 0 => self.interior.push(c),
            c if c.is_whitespace() => self.flush_atom(),
            c => self.current.push(c),
        }
        Ok(())
    }

    fn flush_atom(&mut self) {
        self.flush(Token::Atom);
    }

    /// Emits the pending text, if it has any non-whitespace characters.
    fn flush(&mut self, make: fn(String) -> Token) {
        let text = self.current.trim();
        if !text.is_empty() {
            self.tokens.push(make(text.to_string()));
        }
        self.current.clear();
    }

    fn syntax_error(&self, offset: usize, reason: SyntaxReason) -> InstructionError {
        InstructionError::Syntax {
            instruction: self.source.to_string(),
            offset,
            reason,
        }
    }
}
