//! Effect parser integration tests.
//!
//! These tests drive the public API the way a card loader does:
//! whole effect strings in, ordered instruction lists out.

use ccg_esl::core::{Action, ParserConfig, StaticAbility};
use ccg_esl::lang::{
    parse, EffectParser, ErrorKind, Group, InstructionError, InstructionParser, SyntaxReason,
    TargetType, Token, Tokenizer, Value,
};

/// Test that a bare static ability tokenizes and parses as one word.
#[test]
fn test_haste() {
    assert_eq!(Tokenizer::tokenize("haste").unwrap(), vec![Token::atom("haste")]);

    let inst = InstructionParser::default()
        .parse_single("haste")
        .unwrap()
        .unwrap();
    assert_eq!(inst.action, Action::Static);
    assert_eq!(inst.status, Some(StaticAbility::Haste));
    assert_eq!(inst.field, None);
    assert_eq!(inst.value, None);
}

/// Test the documented modifier forms.
#[test]
fn test_modifier_examples() {
    let parser = InstructionParser::default();

    let inst = parser.parse_single("inc att 2 all").unwrap().unwrap();
    assert_eq!(inst.action, Action::Inc);
    assert_eq!(inst.field.as_deref(), Some("att"));
    assert_eq!(inst.value, Some(Value::Int(2)));
    assert!(inst.is_all());
    assert!(!inst.is_global());

    let inst = parser.parse_single("tap? inc att 1 global").unwrap().unwrap();
    assert_eq!(inst.trigger.as_deref(), Some("tap?"));
    assert_eq!(inst.value, Some(Value::Int(1)));
    assert!(inst.is_global());
    assert!(!inst.is_all());
}

/// Test mana generation.
#[test]
fn test_gen_example() {
    let inst = InstructionParser::default()
        .parse_single("gen 2 red/blue")
        .unwrap()
        .unwrap();
    assert_eq!(inst.action, Action::Gen);
    assert_eq!(inst.field.as_deref(), Some("mana"));
    assert_eq!(
        inst.value,
        Some(Value::List(vec!["red".to_string(), "blue".to_string()]))
    );
    assert_eq!(inst.amount, Some(2));
}

/// Test the creature-id flag on a resource action.
#[test]
fn test_draw_creature_id() {
    let inst = InstructionParser::default()
        .parse_single("draw creatureid")
        .unwrap()
        .unwrap();
    assert_eq!(inst.action, Action::Draw);
    assert!(inst.creature_id_required);
}

/// Test a realistic multi-instruction card effect.
#[test]
fn test_full_card_effect() {
    let effect = "flying; enter? gen (count land) green/white; \
                  attacking? dec end 1 \"Wall of Thorns\" creature/player; \
                  summon? draw 2; tapfor heal (life) creatureid";
    let instructions = parse(effect).unwrap();
    assert_eq!(instructions.len(), 5);

    assert_eq!(instructions[0].status, Some(StaticAbility::Flying));

    let gen = &instructions[1];
    assert_eq!(gen.trigger.as_deref(), Some("enter?"));
    assert_eq!(
        gen.value,
        Some(Value::List(vec!["green".to_string(), "white".to_string()]))
    );
    assert_eq!(gen.amount, Some(1));
    assert_eq!(gen.amount_expr, Some(Group::from_interior("count land")));

    let dec = &instructions[2];
    assert_eq!(dec.name.as_deref(), Some("Wall of Thorns"));
    assert!(matches!(&dec.target_type, Some(TargetType::AnyOf(kinds)) if kinds.len() == 2));

    assert_eq!(instructions[3].amount, Some(2));

    // `tapfor` is a trigger even without the `?` suffix.
    let heal = &instructions[4];
    assert_eq!(heal.trigger.as_deref(), Some("tapfor"));
    assert_eq!(heal.action, Action::Heal);
    assert!(heal.value.as_ref().is_some_and(Value::is_deferred));
    assert!(heal.creature_id_required);
}

/// Test that segment count and order survive blank segments.
#[test]
fn test_segment_order() {
    let instructions = parse(";; reach ;   ; trample;haste;").unwrap();
    let statuses: Vec<_> = instructions.iter().filter_map(|i| i.status).collect();
    assert_eq!(
        statuses,
        vec![StaticAbility::Reach, StaticAbility::Trample, StaticAbility::Haste]
    );
}

/// Test that empty and absent effects are not errors.
#[test]
fn test_empty_and_absent() {
    assert!(parse("").unwrap().is_empty());
    assert!(EffectParser::default().parse_opt(None).unwrap().is_empty());
}

/// Test fail-fast on an unbalanced group.
#[test]
fn test_unbalanced_group_fails() {
    let err = parse("haste; inc att (2+1").unwrap_err();
    assert_eq!(err.index, 1);
    assert_eq!(
        err.source,
        InstructionError::Syntax {
            instruction: "inc att (2+1".to_string(),
            offset: 8,
            reason: SyntaxReason::UnclosedGroup,
        }
    );
}

/// Test that an out-of-range amount fails the effect instead of defaulting.
#[test]
fn test_out_of_range_amount_fails() {
    let err = parse("haste; damage 99999999999999999999 creatureid").unwrap_err();
    assert_eq!(err.index, 1);
    assert_eq!(err.kind(), ErrorKind::Value);
}

/// Test that quoted text survives the generic value slot intact.
#[test]
fn test_quoted_token_name() {
    assert_eq!(
        Tokenizer::tokenize("create \"Ooze (1/1)\" player").unwrap(),
        vec![Token::atom("create"), Token::quoted("Ooze (1/1)"), Token::atom("player")]
    );

    let effect = parse("enter? create \"Ooze (1/1)\" player").unwrap();
    assert_eq!(effect[0].value, Some(Value::Text("Ooze (1/1)".into())));
    assert_eq!(effect[0].target_type, Some(TargetType::One("player".into())));
}

/// Test that an unknown action names the keyword.
#[test]
fn test_unknown_action_fails() {
    let err = parse("frobnicate 1").unwrap_err();
    match err.source {
        InstructionError::UnknownAction { keyword, instruction } => {
            assert_eq!(keyword, "frobnicate");
            assert_eq!(instruction, "frobnicate 1");
        }
        other => panic!("Expected UnknownAction, got {other:?}"),
    }
}

/// Test that parsing is a pure function of its input.
#[test]
fn test_idempotent_parse() {
    let parser = EffectParser::default();
    let text = "haste; tap? inc att (x 2) global; gen 3 red; destroy creatureid all";
    let first = parser.parse(text).unwrap();
    let second = parser.parse(text).unwrap();
    assert_eq!(first, second);
}

/// Test that one parser can be shared across threads.
#[test]
fn test_parser_shared_across_threads() {
    let parser = EffectParser::new(ParserConfig::default());
    let texts = ["haste", "inc att 2 all", "gen 2 red/blue", "draw creatureid"];

    std::thread::scope(|scope| {
        let handles: Vec<_> = texts
            .iter()
            .map(|text| scope.spawn(move || parser.parse(text).unwrap()))
            .collect();

        for (handle, text) in handles.into_iter().zip(texts) {
            let from_thread = handle.join().unwrap();
            assert_eq!(from_thread, parser.parse(text).unwrap());
        }
    });
}

/// Test that the strict configuration closes the trigger and field vocabularies.
#[test]
fn test_strict_config() {
    let lenient = EffectParser::default();
    let strict = EffectParser::new(ParserConfig::strict());
    let text = "upkeep? inc power 1";

    assert_eq!(lenient.parse(text).unwrap().len(), 1);
    assert_eq!(strict.parse(text).unwrap_err().kind(), ErrorKind::UnknownTrigger);
    assert_eq!(
        strict.parse("inc power 1").unwrap_err().kind(),
        ErrorKind::UnknownField
    );
}

/// Test that instruction lists serialize for the execution engine.
#[test]
fn test_instructions_serialize() {
    let instructions = parse("haste; inc att (x) all; gen 1 red").unwrap();
    let json = serde_json::to_string(&instructions).unwrap();
    let back: Vec<ccg_esl::Instruction> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, instructions);
}
