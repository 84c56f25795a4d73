//! Property tests for the parser and inline transform.

use proptest::prelude::*;

use pmap::{parse, transform, Section, SectionKind};

/// Lines biased towards the constructs the parser recognizes.
fn pmap_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("---".to_string()),
        "[ \t]*#{1,12}[ a-z*]{0,10}",
        "- [a-z*\\[\\]()]{0,10}",
        "\\[image:[ a-z.|\\]]{0,12}",
        "(title|description): [a-z ]{0,10}",
        "[a-zA-Z0-9 *\\[\\]()|:#-]{0,20}",
    ]
}

fn pmap_document() -> impl Strategy<Value = String> {
    prop::collection::vec(pmap_line(), 0..40).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn parse_is_total(source in any::<String>()) {
        let _ = parse(&source);
    }

    #[test]
    fn lists_are_never_empty(source in pmap_document()) {
        for section in parse(&source).sections {
            if let Section::List { items } = section {
                prop_assert!(!items.is_empty());
            }
        }
    }

    #[test]
    fn parser_never_emits_links(source in pmap_document()) {
        prop_assert!(parse(&source)
            .sections
            .iter()
            .all(|s| s.kind() != SectionKind::Link));
    }

    #[test]
    fn headings_have_positive_level(source in pmap_document()) {
        for (level, _) in parse(&source).headings() {
            prop_assert!(level >= 1);
        }
    }

    #[test]
    fn parse_is_deterministic(source in pmap_document()) {
        prop_assert_eq!(parse(&source), parse(&source));
    }

    #[test]
    fn transform_is_identity_without_markup(text in "[^*\\[]{0,64}") {
        prop_assert_eq!(transform(&text), text);
    }

    #[test]
    fn transform_is_total(text in any::<String>()) {
        let _ = transform(&text);
    }
}
