use std::collections::HashMap;

use clex::{lexer::tokens::TokenKind, scan, tokenize};
use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

/// Well-formed lexemes of every kind.
fn lexeme_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["int", "if", "while", "return", "float", "case"]).prop_map(String::from),
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        prop::sample::select(vec!["+", "++", "<<=", ">>", "!=", "&&", "|", "^=", "%"]).prop_map(String::from),
        "[0-9]{1,5}(\\.[0-9]{1,3})?([eE][+-]?[0-9]{1,2})?",
        "\"[a-z %\\\\\"]{0,6}\"".prop_filter("single closed literal", |literal| {
            let scanned = scan(literal);
            scanned.is_clean() && scanned.tokens.len() == 1
        }),
        prop::sample::select(vec!["(", ")", "[", "]", "{", "}", ",", ";", ":", "#"]).prop_map(String::from),
    ]
}

fn comment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,10}".prop_map(|body| format!("/*{}*/", body)),
        "[a-z ]{0,10}".prop_map(|body| format!("//{}\n", body)),
    ]
}

// Property: the table accounts for exactly the tokens the scan emits
proptest! {
    #[test]
    fn prop_total_matches_scan(source in any::<String>()) {
        let scanned = scan(&source);
        let table = tokenize(&source);

        prop_assert_eq!(table.total(), scanned.tokens.len());
        prop_assert!(scanned.tokens.iter().all(|token| !token.kind.is_trivia()));
    }

    #[test]
    fn prop_tokenize_is_idempotent(source in any::<String>()) {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    #[test]
    fn prop_spans_point_at_token_text(source in any::<String>()) {
        let scanned = scan(&source);
        let mut previous_end = 0;

        for token in &scanned.tokens {
            let start = token.span.start.0;
            let end = token.span.end.0;

            prop_assert!(start >= previous_end);
            prop_assert_eq!(&source[start..end], token.value.as_str());
            previous_end = end;
        }
    }

    #[test]
    fn prop_counts_are_distinct_per_kind(lexemes in prop_vec(lexeme_strategy(), 0..40)) {
        let source = lexemes.join(" ");
        let table = tokenize(&source);

        let mut expected: HashMap<(TokenKind, String), usize> = HashMap::new();
        for token in scan(&source).tokens {
            *expected.entry((token.kind, token.value)).or_insert(0) += 1;
        }

        let mut seen = 0;
        for (kind, counts) in table.iter() {
            for (text, count) in counts.iter() {
                prop_assert_eq!(expected.get(&(kind, text.to_string())).copied(), Some(count));
                seen += 1;
            }
        }
        prop_assert_eq!(seen, expected.len());
        prop_assert_eq!(table.total(), lexemes.len());
    }

    #[test]
    fn prop_comments_are_erased(
        pieces in prop_vec((lexeme_strategy(), prop::option::of(comment_strategy())), 0..30)
    ) {
        let plain = pieces
            .iter()
            .map(|(lexeme, _)| lexeme.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let commented = pieces
            .iter()
            .map(|(lexeme, comment)| match comment {
                Some(comment) => format!("{} {}", lexeme, comment),
                None => lexeme.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ");

        let values = |source: &str| {
            scan(source)
                .tokens
                .into_iter()
                .map(|token| (token.kind, token.value))
                .collect::<Vec<_>>()
        };

        prop_assert_eq!(values(&plain), values(&commented));
        prop_assert_eq!(tokenize(&plain).total(), tokenize(&commented).total());
    }
}
