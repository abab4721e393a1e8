use asyncapi_graph::expression::{MessageSource, parse};
use proptest::prelude::*;

/// Fragment segments: non-empty, no '/' or '#'.
fn arb_segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z0-9_.-]{1,16}", 1..5)
}

fn arb_source() -> impl Strategy<Value = (&'static str, MessageSource)> {
    prop_oneof![
        Just(("", MessageSource::Message)),
        Just((".header", MessageSource::Header)),
        Just((".payload", MessageSource::Payload)),
    ]
}

proptest! {
    #[test]
    fn well_formed_expressions_round_trip(
        (suffix, source) in arb_source(),
        segments in arb_segments(),
    ) {
        let fragment = format!("/{}", segments.join("/"));
        let input = format!("$message{}#{}", suffix, fragment);
        let expr = parse(&input).unwrap();
        prop_assert_eq!(expr.source, source);
        prop_assert_eq!(expr.fragment.as_deref(), Some(fragment.as_str()));
        let expected: Vec<&str> = segments.iter().map(String::as_str).collect();
        prop_assert_eq!(expr.fragment_segments(), expected);
    }

    #[test]
    fn fragmentless_expressions_round_trip((suffix, source) in arb_source()) {
        let expr = parse(&format!("$message{}", suffix)).unwrap();
        prop_assert_eq!(expr.source, source);
        prop_assert!(expr.fragment.is_none());
    }

    #[test]
    fn arbitrary_input_never_panics(input in ".{0,64}") {
        let _ = parse(&input);
    }

    #[test]
    fn inputs_without_the_message_head_are_rejected(input in "[a-z-]{1,32}") {
        prop_assert!(parse(&input).is_err());
    }
}
