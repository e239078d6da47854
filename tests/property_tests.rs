//! Property-based tests for the effect parser.

use ccg_esl::core::StaticAbility;
use ccg_esl::lang::{EffectParser, Tokenizer};
use proptest::prelude::*;

/// Instructions that always parse to exactly one record.
fn instruction() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(StaticAbility::ALL.to_vec()).prop_map(|a| a.keyword().to_string()),
        (prop::sample::select(vec!["inc", "dec"]), -20i64..20)
            .prop_map(|(m, v)| format!("{m} att {v}")),
        (1i64..5, prop::sample::select(vec!["red", "blue", "red/green"]))
            .prop_map(|(n, c)| format!("gen {n} {c}")),
        prop::sample::select(vec!["draw", "discard creatureid", "heal (x)", "damage 2"])
            .prop_map(str::to_string),
        prop::sample::select(vec!["destroy creatureid all", "return graveyard", "kill"])
            .prop_map(str::to_string),
    ]
}

/// Separators with optional blank segments around them.
fn separator() -> impl Strategy<Value = String> {
    prop::sample::select(vec![";", " ; ", ";;", "; ;", ";\n"]).prop_map(str::to_string)
}

proptest! {
    #[test]
    fn parse_keeps_count_and_order(
        parts in prop::collection::vec((instruction(), separator()), 0..8)
    ) {
        let mut text = String::new();
        for (inst, sep) in &parts {
            text.push_str(inst);
            text.push_str(sep);
        }

        let parsed = EffectParser::default().parse(&text).unwrap();
        prop_assert_eq!(parsed.len(), parts.len());
        for (inst, (raw, _)) in parsed.iter().zip(&parts) {
            prop_assert_eq!(&inst.raw, raw);
        }
    }

    #[test]
    fn parse_is_idempotent(text in "[a-z0-9 ;/()\"?]{0,40}") {
        let parser = EffectParser::default();
        prop_assert_eq!(parser.parse(&text), parser.parse(&text));
    }

    #[test]
    fn tokenizer_never_panics(text in "\\PC{0,60}") {
        let _ = Tokenizer::tokenize(&text);
    }

    #[test]
    fn balanced_input_always_tokenizes(words in prop::collection::vec("[a-z0-9?/]{1,6}", 0..6)) {
        let text = format!("{} ({}) \"{}\"", words.join(" "), words.join(" "), words.join(" "));
        prop_assert!(Tokenizer::tokenize(&text).is_ok());
    }
}
