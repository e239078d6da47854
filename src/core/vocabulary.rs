//! Keyword vocabularies for the effect language.
//!
//! The language has a handful of closed word lists. Two of them drive the
//! grammar and are modelled as enums:
//! - `Action`: the verb of an instruction (including the `inc`/`dec` modifiers)
//! - `StaticAbility`: standing abilities such as `haste`
//!
//! The remaining lists (triggers, places, fields, target types, scopes) are
//! plain keyword tables in `Vocabulary`. They are built once into the
//! process-wide `VOCABULARY` and only ever read afterwards.
//!
//! Some lookups exist for consumers of parsed effects rather than for the
//! parser itself. The parser never checks places, so `Vocabulary::is_place`
//! is there for the execution engine; `Action::KEYWORDS` lists the verbs for
//! editors and card tooling.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// The shared, read-only vocabulary used by every parser.
pub static VOCABULARY: LazyLock<Vocabulary> = LazyLock::new(Vocabulary::standard);

/// How an action's arguments are parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionFamily {
    /// `inc` / `dec`: field, value, then the shared target tail.
    Modifier,
    /// `gen`: amount then a `/`-joined colour list.
    Generate,
    /// `draw`, `discard`, `heal`, `damage`: optional amount and `creatureid`.
    ResourceCount,
    /// Every other action: value, then the shared target tail.
    Generic,
    /// A standing ability rather than an action.
    Static,
}

/// An instruction's action keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Inc,
    Dec,
    Gen,
    Draw,
    Discard,
    Heal,
    Return,
    Count,
    Damage,
    Destroy,
    Apply,
    Kill,
    Morph,
    Revive,
    NoManaReset,
    Create,
    /// Pseudo-action for static abilities.
    Static,
}

impl Action {
    /// Every action keyword accepted after an optional trigger.
    pub const KEYWORDS: [Action; 16] = [
        Action::Inc,
        Action::Dec,
        Action::Gen,
        Action::Draw,
        Action::Discard,
        Action::Heal,
        Action::Return,
        Action::Count,
        Action::Damage,
        Action::Destroy,
        Action::Apply,
        Action::Kill,
        Action::Morph,
        Action::Revive,
        Action::NoManaReset,
        Action::Create,
    ];

    /// Look up an action by its keyword.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        let action = match word {
            "inc" => Action::Inc,
            "dec" => Action::Dec,
            "gen" => Action::Gen,
            "draw" => Action::Draw,
            "discard" => Action::Discard,
            "heal" => Action::Heal,
            "return" => Action::Return,
            "count" => Action::Count,
            "damage" => Action::Damage,
            "destroy" => Action::Destroy,
            "apply" => Action::Apply,
            "kill" => Action::Kill,
            "morph" => Action::Morph,
            "revive" => Action::Revive,
            "nomanareset" => Action::NoManaReset,
            "create" => Action::Create,
            "static" => Action::Static,
            _ => return None,
        };
        Some(action)
    }

    /// The keyword as written in effect text.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Action::Inc => "inc",
            Action::Dec => "dec",
            Action::Gen => "gen",
            Action::Draw => "draw",
            Action::Discard => "discard",
            Action::Heal => "heal",
            Action::Return => "return",
            Action::Count => "count",
            Action::Damage => "damage",
            Action::Destroy => "destroy",
            Action::Apply => "apply",
            Action::Kill => "kill",
            Action::Morph => "morph",
            Action::Revive => "revive",
            Action::NoManaReset => "nomanareset",
            Action::Create => "create",
            Action::Static => "static",
        }
    }

    /// Which sub-grammar parses this action's arguments.
    #[must_use]
    pub const fn family(self) -> ActionFamily {
        match self {
            Action::Inc | Action::Dec => ActionFamily::Modifier,
            Action::Gen => ActionFamily::Generate,
            Action::Draw | Action::Discard | Action::Heal | Action::Damage => {
                ActionFamily::ResourceCount
            }
            Action::Static => ActionFamily::Static,
            _ => ActionFamily::Generic,
        }
    }

    /// Is this one of the `inc`/`dec` modifiers?
    #[must_use]
    pub const fn is_modifier(self) -> bool {
        matches!(self.family(), ActionFamily::Modifier)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A standing ability named by a single keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaticAbility {
    Haste,
    Flying,
    Reach,
    EnterTap,
    Unblockable,
    Trample,
    Invincible,
}

impl StaticAbility {
    /// All static abilities.
    pub const ALL: [StaticAbility; 7] = [
        StaticAbility::Haste,
        StaticAbility::Flying,
        StaticAbility::Reach,
        StaticAbility::EnterTap,
        StaticAbility::Unblockable,
        StaticAbility::Trample,
        StaticAbility::Invincible,
    ];

    /// Look up a static ability by its keyword.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ability| ability.keyword() == word)
    }

    /// The keyword as written in effect text.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            StaticAbility::Haste => "haste",
            StaticAbility::Flying => "flying",
            StaticAbility::Reach => "reach",
            StaticAbility::EnterTap => "entertap",
            StaticAbility::Unblockable => "unblockable",
            StaticAbility::Trample => "trample",
            StaticAbility::Invincible => "invincible",
        }
    }
}

impl std::fmt::Display for StaticAbility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Keyword tables consulted while parsing.
///
/// Membership here never changes how a token is split; it only decides
/// which slot a token lands in (e.g. a trailing name versus a target type).
#[derive(Clone, Debug)]
pub struct Vocabulary {
    triggers: FxHashSet<&'static str>,
    places: FxHashSet<&'static str>,
    fields: FxHashSet<&'static str>,
    target_types: FxHashSet<&'static str>,
    scopes: FxHashSet<&'static str>,
}

impl Vocabulary {
    /// Keyword that flags an instruction as needing a chosen creature.
    pub const CREATURE_ID: &'static str = "creatureid";

    /// Field written by `gen`.
    pub const MANA_FIELD: &'static str = "mana";

    /// The standard card-game vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            triggers: [
                "tap?",
                "summon?",
                "enter?",
                "attacking?",
                "blocking?",
                "discard?",
                "tapfor",
            ]
            .into_iter()
            .collect(),
            places: ["graveyard", "deck", "hand"].into_iter().collect(),
            fields: ["att", "end", Self::MANA_FIELD].into_iter().collect(),
            target_types: [Self::CREATURE_ID, "player"].into_iter().collect(),
            scopes: ["all", "global"].into_iter().collect(),
        }
    }

    /// Is this a known trigger keyword?
    #[must_use]
    pub fn is_trigger(&self, word: &str) -> bool {
        self.triggers.contains(word)
    }

    /// Is this a known zone name?
    #[must_use]
    pub fn is_place(&self, word: &str) -> bool {
        self.places.contains(word)
    }

    /// Is this a known field name?
    #[must_use]
    pub fn is_field(&self, word: &str) -> bool {
        self.fields.contains(word)
    }

    /// Is this a target-type keyword?
    #[must_use]
    pub fn is_target_type(&self, word: &str) -> bool {
        self.target_types.contains(word)
    }

    /// Is this `all` or `global`?
    #[must_use]
    pub fn is_scope(&self, word: &str) -> bool {
        self.scopes.contains(word)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
