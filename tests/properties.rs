//! Property-based tests for the tokenizer, renderer and text helpers.

use proptest::prelude::*;
use wordcase::case::tokenizer::SEPARATORS;
use wordcase::{
    decode_utf8, encode_utf8, indent, to_case, tokenize, trim_trailing_spaces_per_line,
    Convention, IndentKind,
};

/// Identifier-like input mixing both cases, digits, separators and noise.
fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.%-]{0,32}"
}

proptest! {
    #[test]
    fn tokens_are_nonempty_ascii_runs(s in identifier()) {
        for token in tokenize(&s) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(&SEPARATORS[..]));
            prop_assert!(
                token.chars().all(|c| c.is_ascii_alphabetic())
                    || token.chars().all(|c| c.is_ascii_digit()),
                "mixed token {:?}", token
            );
        }
    }

    #[test]
    fn tokenize_is_total(s in any::<String>()) {
        for token in tokenize(&s) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn separated_conventions_are_idempotent(s in identifier()) {
        for convention in [Convention::Snake, Convention::Kebab, Convention::Dots] {
            let once = to_case(&s, convention);
            prop_assert_eq!(to_case(&once, convention), once);
        }
    }

    #[test]
    fn snake_is_idempotent_on_any_text(s in any::<String>()) {
        let once = to_case(&s, Convention::Snake);
        prop_assert_eq!(to_case(&once, Convention::Snake), once);
    }

    #[test]
    fn camel_output_has_no_separators(s in identifier()) {
        let camel = to_case(&s, Convention::Camel);
        prop_assert!(!camel.contains(&SEPARATORS[..]));
    }

    #[test]
    fn indent_keeps_line_count(s in "[a-z \n]{0,40}", width in 0usize..4, times in 0usize..3) {
        let out = indent(&s, IndentKind::Spaces { width, times }, false);
        prop_assert_eq!(out.split('\n').count(), s.split('\n').count());
    }

    #[test]
    fn trim_is_idempotent(s in "[a-z \t\n]{0,40}") {
        let once = trim_trailing_spaces_per_line(&s);
        prop_assert_eq!(trim_trailing_spaces_per_line(&once), once.clone());
        prop_assert_eq!(once.matches('\n').count(), s.matches('\n').count());
    }

    #[test]
    fn encoded_text_decodes(s in any::<String>()) {
        let bytes = encode_utf8(&s).unwrap();
        prop_assert_eq!(decode_utf8(&bytes).unwrap(), s);
    }
}

#[test]
fn documented_examples() {
    assert!(tokenize("").is_empty());
    assert_eq!(tokenize("WHAT_DOES_IT_DO"), vec!["what", "does", "it", "do"]);
    assert_eq!(tokenize("plus26Logo"), vec!["plus", "26", "Logo"]);
    assert_eq!(
        tokenize("gradient.neutral.100-bottom-to-50%"),
        vec!["gradient", "neutral", "100", "bottom", "to", "50"]
    );
    assert_eq!(to_case("what-does-it-do", Convention::Camel), "whatDoesItDo");
    assert_eq!(to_case("whatDoesItDo", Convention::Kebab), "what-does-it-do");
    assert_eq!(to_case("whatDoesItDo", Convention::Snake), "what_does_it_do");
    assert_eq!(to_case("whatDoesItDo", Convention::Dots), "what.does.it.do");
    assert_eq!(wordcase::to_camel_case("whatDoes-690_ItDo"), "whatDoes690ItDo");
    assert_eq!(
        indent("a\n\nb", IndentKind::Spaces { width: 2, times: 1 }, false),
        "  a\n\n  b"
    );
}
