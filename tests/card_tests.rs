//! Card loading tests.
//!
//! These tests verify that card records flow through the effect parser:
//! effect text is parsed on registration, static abilities land on the
//! card, and broken effects follow the registry's load policy.

use ccg_esl::cards::{
    Card, CardId, CardKind, CardRecord, CardRegistry, LoadPolicy, RegistryError,
};
use ccg_esl::core::{Action, StaticAbility};
use ccg_esl::lang::{EffectParser, ErrorKind};
use ccg_esl::ParserConfig;

fn starter_cards() -> Vec<Card> {
    vec![
        Card::new(CardId::new(1), "Mountain", CardKind::Land).with_effect("tapfor gen 1 red"),
        Card::creature(CardId::new(2), "Goblin Raider", 2, 1)
            .with_cost(1, "red")
            .with_effect("haste; attacking? inc att 1"),
        Card::new(CardId::new(3), "Lightning Strike", CardKind::Spell)
            .with_cost(1, "red")
            .with_effect("damage 3 creatureid"),
        Card::new(CardId::new(4), "Anthem", CardKind::Enchant)
            .with_cost(2, "white")
            .with_effect("inc att 1 global; inc end 1 global"),
    ]
}

/// Test loading a small card pool.
#[test]
fn test_load_card_pool() {
    let mut registry = CardRegistry::new();
    for card in starter_cards() {
        registry.register(card).unwrap();
    }

    assert_eq!(registry.len(), 4);

    let mountain = registry.instructions(CardId::new(1)).unwrap();
    assert_eq!(mountain[0].trigger.as_deref(), Some("tapfor"));
    assert_eq!(mountain[0].action, Action::Gen);

    let goblin = registry.get(CardId::new(2)).unwrap();
    assert!(goblin.card.has_status(StaticAbility::Haste));
    assert_eq!(goblin.instructions[1].trigger.as_deref(), Some("attacking?"));

    let strike = registry.instructions(CardId::new(3)).unwrap();
    assert_eq!(strike[0].amount, Some(3));
    assert!(strike[0].creature_id_required);

    let anthem = registry.instructions(CardId::new(4)).unwrap();
    assert_eq!(anthem.len(), 2);
    assert!(anthem.iter().all(|i| i.is_global()));
}

/// Test that a broken card is rejected by default.
#[test]
fn test_reject_broken_card() {
    let mut registry = CardRegistry::new();
    let broken = Card::creature(CardId::new(9), "Glitch", 1, 1).with_effect("haste; inc att \"1");

    match registry.register(broken) {
        Err(RegistryError::Effect { id, source }) => {
            assert_eq!(id, CardId::new(9));
            assert_eq!(source.index, 1);
            assert_eq!(source.kind(), ErrorKind::Syntax);
        }
        other => panic!("Expected effect error, got {other:?}"),
    }
    assert!(!registry.contains(CardId::new(9)));
}

/// Test that a lenient registry keeps broken cards without instructions.
#[test_log::test]
fn test_skip_broken_card() {
    let mut registry = CardRegistry::new().with_policy(LoadPolicy::LogAndSkip);
    assert_eq!(registry.policy(), LoadPolicy::LogAndSkip);

    let broken = Card::creature(CardId::new(9), "Glitch", 1, 1).with_effect("haste; teleport");
    registry.register(broken).unwrap();

    let glitch = registry.get(CardId::new(9)).unwrap();
    assert!(glitch.instructions.is_empty());
    // Nothing was parsed, so nothing was applied.
    assert!(glitch.card.statuses.is_empty());
}

/// Test that the registry's parser configuration is honoured.
#[test]
fn test_strict_registry() {
    let mut registry =
        CardRegistry::new().with_parser(EffectParser::new(ParserConfig::strict()));
    let card = Card::creature(CardId::new(1), "Odd", 1, 1).with_effect("upkeep? inc att 1");

    let err = registry.register(card).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Effect { ref source, .. } if source.kind() == ErrorKind::UnknownTrigger
    ));
}

/// Test the flat record round trip through JSON.
#[test]
fn test_record_json_round_trip() {
    let mut registry = CardRegistry::new();
    for card in starter_cards() {
        registry.register(card).unwrap();
    }

    let goblin = &registry.get(CardId::new(2)).unwrap().card;
    let json = serde_json::to_string(&goblin.to_record()).unwrap();
    assert!(json.contains("\"type\":\"Creature\""));
    assert!(json.contains("\"status\":[\"haste\"]"));

    let record: CardRecord = serde_json::from_str(&json).unwrap();
    let back = Card::try_from(record).unwrap();
    assert_eq!(&back, goblin);
}

/// Test reading a record written by another tool.
#[test]
fn test_record_from_external_json() {
    let json = r#"{
        "id": "12",
        "name": "Sky Drake",
        "generic_mana": 3,
        "sp_mana": "blue",
        "type": "Creature",
        "description": "",
        "tapped": 0,
        "status": [],
        "effect": "flying; summon? draw 1",
        "attack": 3,
        "defence": 2
    }"#;

    let record: CardRecord = serde_json::from_str(json).unwrap();
    let card = Card::try_from(record).unwrap();
    assert_eq!(card.kind, CardKind::Creature { attack: 3, defence: 2 });

    let mut registry = CardRegistry::new();
    registry.register(card).unwrap();
    let drake = registry.get(CardId::new(12)).unwrap();
    assert!(drake.card.has_status(StaticAbility::Flying));
    assert_eq!(drake.instructions[1].action, Action::Draw);
}
