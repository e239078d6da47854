//! Tokens produced by the tokenizer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The flat word list of one parenthesized span.
///
/// Groups are deferred expressions: the parser stores them as-is and the
/// execution engine evaluates them against board state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group(pub SmallVec<[String; 4]>);

impl Group {
    /// Build a group by splitting interior text on whitespace.
    #[must_use]
    pub fn from_interior(text: &str) -> Self {
        Self(text.split_whitespace().map(str::to_string).collect())
    }

    /// The group's words in order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Group {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.0.join(" "))
    }
}

/// A single token of an instruction.
///
/// Bare and quoted words are both atoms; quoted ones are kept apart so the
/// parser never reads structure (`/` lists, numbers, keywords in the target
/// slots) into literal text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A bare word.
    Atom(String),
    /// A `"..."` literal, trimmed, quotes removed.
    Quoted(String),
    /// A parenthesized span.
    Group(Group),
}

impl Token {
    /// Create an atom token.
    pub fn atom(text: impl Into<String>) -> Self {
        Token::Atom(text.into())
    }

    /// Create a quoted-literal token.
    pub fn quoted(text: impl Into<String>) -> Self {
        Token::Quoted(text.into())
    }

    /// Create a group token from its words.
    pub fn group<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        Token::Group(words.into_iter().collect())
    }

    /// Get the text if this is an atom, bare or quoted.
    #[must_use]
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Token::Atom(text) | Token::Quoted(text) => Some(text),
            Token::Group(_) => None,
        }
    }

    /// Get the text only if this is a bare word.
    #[must_use]
    pub fn as_bare(&self) -> Option<&str> {
        match self {
            Token::Atom(text) => Some(text),
            Token::Quoted(_) | Token::Group(_) => None,
        }
    }

    #[must_use]
    pub fn is_quoted(&self) -> bool {
        matches!(self, Token::Quoted(_))
    }

    /// Get the group if this is a group.
    #[must_use]
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Token::Group(group) => Some(group),
            Token::Atom(_) | Token::Quoted(_) => None,
        }
    }

    /// Is this an atom equal to `word`?
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.as_atom() == Some(word)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Atom(text) => f.write_str(text),
            Token::Quoted(text) => write!(f, "\"{text}\""),
            Token::Group(group) => write!(f, "{group}"),
        }
    }
}
