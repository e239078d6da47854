//! Parsed instruction records.
//!
//! An `Instruction` is what the execution engine consumes. Every field that
//! does not apply to the instruction's action is `None` (or `false`); the
//! parser never writes sentinel values.
//!
//! `TargetType::allows` is not used while parsing; the engine calls it when
//! matching a candidate target against the instruction.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, StaticAbility};

use super::token::Group;

/// The value slot of an instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// An integer literal.
    Int(i64),
    /// A `/`-joined word list (e.g. mana colours).
    List(Vec<String>),
    /// A single word or quoted literal, kept verbatim.
    Text(String),
    /// A parenthesized expression, evaluated later by the engine.
    Expr(Group),
}

impl Value {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_expr(&self) -> Option<&Group> {
        match self {
            Value::Expr(group) => Some(group),
            _ => None,
        }
    }

    /// Is this an unresolved expression?
    #[must_use]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Value::Expr(_))
    }
}

/// What kind of thing an instruction targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetType {
    /// A single target-type keyword.
    One(String),
    /// Any of several kinds (`a/b` in effect text).
    AnyOf(SmallVec<[String; 2]>),
}

impl TargetType {
    /// Parse a target token, splitting `/` alternatives.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token.contains('/') {
            TargetType::AnyOf(split_alternatives(token).collect())
        } else {
            TargetType::One(token.to_string())
        }
    }

    /// Does this target spec admit `kind`?
    #[must_use]
    pub fn allows(&self, kind: &str) -> bool {
        match self {
            TargetType::One(one) => one == kind,
            TargetType::AnyOf(kinds) => kinds.iter().any(|k| k == kind),
        }
    }
}

/// Split a `/`-joined list into its parts.
pub(crate) fn split_alternatives(token: &str) -> impl Iterator<Item = String> + '_ {
    token.split('/').map(str::to_string)
}

/// Which creatures an instruction applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Every active creature on the board.
    All,
    /// Only the acting player's creatures.
    Global,
}

impl Scope {
    /// Look up a scope keyword.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "all" => Some(Scope::All),
            "global" => Some(Scope::Global),
            _ => None,
        }
    }
}

/// One parsed instruction.
///
/// ## Example
///
/// ```
/// use ccg_esl::core::Action;
/// use ccg_esl::lang::{InstructionParser, Value};
///
/// let parser = InstructionParser::default();
/// let inst = parser.parse_single("tap? inc att 1 global").unwrap().unwrap();
///
/// assert_eq!(inst.trigger.as_deref(), Some("tap?"));
/// assert_eq!(inst.action, Action::Inc);
/// assert_eq!(inst.field.as_deref(), Some("att"));
/// assert_eq!(inst.value, Some(Value::Int(1)));
/// assert!(inst.is_global());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Condition gating execution (`tap?`, `summon?`, ...).
    pub trigger: Option<String>,

    /// The action keyword, or `Static`.
    pub action: Action,

    /// The ability, when `action` is `Static`.
    pub status: Option<StaticAbility>,

    /// Target attribute (`att`, `end`, `mana`, ...).
    pub field: Option<String>,

    pub value: Option<Value>,

    /// Countable quantity for `gen` and the resource-count actions.
    pub amount: Option<i64>,

    /// `gen` amount given as an expression when `value` holds the colours.
    pub amount_expr: Option<Group>,

    /// Specific card or player name.
    pub name: Option<String>,

    pub target_type: Option<TargetType>,

    /// The engine must pick a creature (`creatureid`).
    pub creature_id_required: bool,

    /// `all` or `global`.
    pub scope: Option<Scope>,

    /// The instruction text as written.
    pub raw: String,
}

impl Instruction {
    /// Create an instruction with only an action and its source text.
    pub fn new(action: Action, raw: impl Into<String>) -> Self {
        Self {
            trigger: None,
            action,
            status: None,
            field: None,
            value: None,
            amount: None,
            amount_expr: None,
            name: None,
            target_type: None,
            creature_id_required: false,
            scope: None,
            raw: raw.into(),
        }
    }

    /// Create a static-ability instruction.
    pub fn static_ability(ability: StaticAbility, raw: impl Into<String>) -> Self {
        Self {
            status: Some(ability),
            ..Self::new(Action::Static, raw)
        }
    }

    /// Applies to every active creature.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.scope == Some(Scope::All)
    }

    /// Applies only to the acting player's creatures.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.scope == Some(Scope::Global)
    }

    #[must_use]
    pub fn is_static(&self) -> bool {
        self.action == Action::Static
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.trigger.is_some()
    }

    /// Does any slot still need evaluation by the engine?
    #[must_use]
    pub fn has_deferred(&self) -> bool {
        self.amount_expr.is_some() || self.value.as_ref().is_some_and(Value::is_deferred)
    }
}
