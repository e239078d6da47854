//! Card registry.
//!
//! The `CardRegistry` stores cards together with their parsed effects. Each
//! card's effect is parsed once when it is registered; what happens when the
//! effect text is broken is decided by the registry's `LoadPolicy`.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::lang::{EffectError, EffectParser, Instruction};

use super::card::{Card, CardId, CardKind};

/// What to do with a card whose effect fails to parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Refuse the card.
    #[default]
    Reject,
    /// Log a warning and keep the card with no instructions.
    LogAndSkip,
}

/// Registry errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("card with id {0} already registered")]
    Duplicate(CardId),

    #[error("effect of {id} failed to parse: {source}")]
    Effect {
        id: CardId,
        #[source]
        source: EffectError,
    },
}

/// A registered card and its parsed effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledCard {
    pub card: Card,
    pub instructions: Vec<Instruction>,
}

/// Registry of cards.
///
/// ## Example
///
/// ```
/// use ccg_esl::cards::{Card, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// let bear = Card::creature(CardId::new(1), "Bear", 2, 2).with_effect("enter? inc end 1");
///
/// registry.register(bear).unwrap();
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.card.name, "Bear");
/// assert_eq!(found.instructions.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CompiledCard>,
    parser: EffectParser,
    policy: LoadPolicy,
    next_id: u32,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific effect parser (builder pattern).
    #[must_use]
    pub fn with_parser(mut self, parser: EffectParser) -> Self {
        self.parser = parser;
        self
    }

    /// Set the load policy (builder pattern).
    #[must_use]
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Parse a card's effect and register it.
    ///
    /// Static abilities without a trigger are copied onto the card.
    pub fn register(&mut self, mut card: Card) -> Result<CardId, RegistryError> {
        let id = card.id;
        if self.cards.contains_key(&id) {
            return Err(RegistryError::Duplicate(id));
        }

        let instructions = match card.instructions(&self.parser) {
            Ok(instructions) => instructions,
            Err(source) => match self.policy {
                LoadPolicy::Reject => return Err(RegistryError::Effect { id, source }),
                LoadPolicy::LogAndSkip => {
                    tracing::warn!(
                        card = %id,
                        name = %card.name,
                        error = %source,
                        "skipping broken effect"
                    );
                    Vec::new()
                }
            },
        };

        card.apply_static_abilities(&instructions);
        tracing::debug!(card = %id, instructions = instructions.len(), "registered card");

        self.next_id = self.next_id.max(id.raw().saturating_add(1));
        self.cards.insert(id, CompiledCard { card, instructions });
        Ok(id)
    }

    /// Register a card under the next free ID.
    pub fn register_auto(&mut self, mut card: Card) -> Result<CardId, RegistryError> {
        card.id = CardId::new(self.next_id);
        self.register(card)
    }

    /// Get a registered card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CompiledCard> {
        self.cards.get(&id)
    }

    /// Get a card's parsed instructions.
    #[must_use]
    pub fn instructions(&self, id: CardId) -> Option<&[Instruction]> {
        self.cards.get(&id).map(|c| c.instructions.as_slice())
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all registered cards.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledCard> {
        self.cards.values()
    }

    /// Find creature cards.
    pub fn creatures(&self) -> impl Iterator<Item = &CompiledCard> {
        self.find(|c| c.card.kind.is_creature())
    }

    /// Find cards of the same kind as `kind` (creature stats are ignored).
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &CompiledCard> {
        self.find(move |c| c.card.kind.type_name() == kind.type_name())
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CompiledCard>
    where
        F: Fn(&CompiledCard) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
