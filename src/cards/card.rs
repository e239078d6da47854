//! Card records.
//!
//! A `Card` carries the printed data of one card, its effect text, and the
//! small amount of state (tapped, statuses) that the effect parser's static
//! abilities feed back into. Card kinds form a closed set; creatures add
//! attack and defence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::StaticAbility;
use crate::lang::{EffectError, EffectParser, Instruction};

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The kind of card, with kind-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Land,
    Creature { attack: i64, defence: i64 },
    Spell,
    Enchant,
}

impl CardKind {
    /// The type name used in card records.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            CardKind::Land => "Land",
            CardKind::Creature { .. } => "Creature",
            CardKind::Spell => "Spell",
            CardKind::Enchant => "Enchant",
        }
    }

    #[must_use]
    pub const fn is_creature(self) -> bool {
        matches!(self, CardKind::Creature { .. })
    }
}

/// A card and its effect text.
///
/// ## Example
///
/// ```
/// use ccg_esl::cards::{Card, CardId};
/// use ccg_esl::core::StaticAbility;
/// use ccg_esl::lang::EffectParser;
///
/// let mut goblin = Card::creature(CardId::new(1), "Goblin Raider", 2, 1)
///     .with_cost(1, "red")
///     .with_effect("haste; attacking? inc att 1");
///
/// let instructions = goblin.instructions(&EffectParser::default()).unwrap();
/// assert_eq!(instructions.len(), 2);
///
/// goblin.apply_static_abilities(&instructions);
/// assert!(goblin.has_status(StaticAbility::Haste));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,

    /// Mana of any colour.
    pub generic_mana: u32,

    /// Coloured mana requirement.
    pub sp_mana: String,

    pub kind: CardKind,
    pub description: String,

    /// Effect text in the effect language.
    pub effect: String,

    pub tapped: bool,

    /// Static abilities currently on the card.
    pub statuses: Vec<StaticAbility>,
}

impl Card {
    /// Create a card with no cost, description, or effect.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id,
            name: name.into(),
            generic_mana: 0,
            sp_mana: String::new(),
            kind,
            description: String::new(),
            effect: String::new(),
            tapped: false,
            statuses: Vec::new(),
        }
    }

    /// Create a creature card.
    #[must_use]
    pub fn creature(id: CardId, name: impl Into<String>, attack: i64, defence: i64) -> Self {
        Self::new(id, name, CardKind::Creature { attack, defence })
    }

    /// Set the mana cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, generic_mana: u32, sp_mana: impl Into<String>) -> Self {
        self.generic_mana = generic_mana;
        self.sp_mana = sp_mana.into();
        self
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the effect text (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = effect.into();
        self
    }

    /// Parse this card's effect text.
    pub fn instructions(&self, parser: &EffectParser) -> Result<Vec<Instruction>, EffectError> {
        parser.parse(&self.effect)
    }

    /// Copy untriggered static abilities onto the card.
    ///
    /// Triggered statics (`summon? haste`) only apply when their trigger
    /// fires, so they are left to the execution engine.
    pub fn apply_static_abilities(&mut self, instructions: &[Instruction]) {
        let statics = instructions
            .iter()
            .filter(|inst| !inst.is_triggered())
            .filter_map(|inst| inst.status);

        for ability in statics {
            if !self.statuses.contains(&ability) {
                self.statuses.push(ability);
            }
        }
    }

    #[must_use]
    pub fn has_status(&self, ability: StaticAbility) -> bool {
        self.statuses.contains(&ability)
    }

    /// Build the flat record handed to persistence and UI layers.
    #[must_use]
    pub fn to_record(&self) -> CardRecord {
        let (attack, defence) = match self.kind {
            CardKind::Creature { attack, defence } => (Some(attack), Some(defence)),
            _ => (None, None),
        };

        CardRecord {
            id: self.id.raw().to_string(),
            name: self.name.clone(),
            generic_mana: self.generic_mana,
            sp_mana: self.sp_mana.clone(),
            card_type: self.kind.type_name().to_string(),
            description: self.description.clone(),
            tapped: u8::from(self.tapped),
            status: self.statuses.clone(),
            effect: self.effect.clone(),
            attack,
            defence,
        }
    }
}

/// Flat, serializable view of a card.
///
/// Keys: `id, name, generic_mana, sp_mana, type, description, tapped, status,
/// effect`, plus `attack, defence` for creatures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    pub generic_mana: u32,
    pub sp_mana: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub description: String,
    /// 0 for untapped, 1 for tapped.
    pub tapped: u8,
    pub status: Vec<StaticAbility>,
    pub effect: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defence: Option<i64>,
}

/// A card record that does not describe a valid card.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("invalid card id `{0}`")]
    InvalidId(String),

    #[error("unknown card type `{0}`")]
    UnknownType(String),

    #[error("creature `{0}` is missing attack or defence")]
    MissingStats(String),
}

impl TryFrom<CardRecord> for Card {
    type Error = RecordError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .parse()
            .map(CardId::new)
            .map_err(|_| RecordError::InvalidId(record.id.clone()))?;

        let kind = match record.card_type.as_str() {
            "Land" => CardKind::Land,
            "Spell" => CardKind::Spell,
            "Enchant" => CardKind::Enchant,
            "Creature" => match (record.attack, record.defence) {
                (Some(attack), Some(defence)) => CardKind::Creature { attack, defence },
                _ => return Err(RecordError::MissingStats(record.name)),
            },
            other => return Err(RecordError::UnknownType(other.to_string())),
        };

        Ok(Card {
            id,
            name: record.name,
            generic_mana: record.generic_mana,
            sp_mana: record.sp_mana,
            kind,
            description: record.description,
            effect: record.effect,
            tapped: record.tapped != 0,
            statuses: record.status,
        })
    }
}
