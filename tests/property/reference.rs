use asyncapi_graph::error::DereferenceError;
use asyncapi_graph::reference::{ComponentKind, parse};
use proptest::prelude::*;

/// Strategy for collection names with a root-level mapping.
fn arb_root_collection() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("servers"), Just("channels"), Just("operations")]
}

/// Strategy for components-only collection names.
fn arb_components_only_collection() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("schemas"),
        Just("messages"),
        Just("securitySchemes"),
        Just("serverVariables"),
        Just("parameters"),
        Just("correlationIds"),
        Just("replies"),
        Just("replyAddresses"),
        Just("externalDocs"),
        Just("tags"),
        Just("operationTraits"),
        Just("messageTraits"),
        Just("serverBindings"),
        Just("channelBindings"),
        Just("operationBindings"),
        Just("messageBindings"),
    ]
}

/// Any recognized collection name.
fn arb_any_collection() -> impl Strategy<Value = &'static str> {
    prop_oneof![arb_root_collection(), arb_components_only_collection()]
}

/// Entry keys: non-empty, no '/' or '#'.
fn arb_key() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]{1,24}"
}

proptest! {
    #[test]
    fn root_relative_shapes_round_trip(collection in arb_root_collection(), key in arb_key()) {
        let path = parse(&format!("#/{}/{}", collection, key)).unwrap();
        prop_assert!(!path.components_scoped);
        prop_assert_eq!(path.kind.collection(), collection);
        prop_assert_eq!(path.key, key);
    }

    #[test]
    fn components_relative_shapes_round_trip(
        collection in arb_any_collection(),
        key in arb_key(),
    ) {
        let path = parse(&format!("#/components/{}/{}", collection, key)).unwrap();
        prop_assert!(path.components_scoped);
        prop_assert_eq!(path.kind.collection(), collection);
        prop_assert_eq!(path.key, key);
    }

    #[test]
    fn components_only_kinds_reject_root_shape(
        collection in arb_components_only_collection(),
        key in arb_key(),
    ) {
        let err = parse(&format!("#/{}/{}", collection, key)).unwrap_err();
        let is_invalid = matches!(err, DereferenceError::Invalid { .. });
        prop_assert!(is_invalid);
    }

    #[test]
    fn missing_hash_head_is_invalid(collection in arb_root_collection(), key in arb_key()) {
        let err = parse(&format!("/{}/{}", collection, key)).unwrap_err();
        let is_invalid = matches!(err, DereferenceError::Invalid { .. });
        prop_assert!(is_invalid);
    }

    #[test]
    fn arbitrary_input_never_panics(input in ".{0,64}") {
        // Parsing is total: any input yields Ok or Invalid, never a panic.
        let _ = parse(&input);
    }

    #[test]
    fn unknown_collections_are_invalid(collection in "[a-z]{1,12}", key in arb_key()) {
        prop_assume!(ComponentKind::from_collection(&collection).is_none());
        prop_assume!(collection != "components");
        let err = parse(&format!("#/{}/{}", collection, key)).unwrap_err();
        let is_invalid = matches!(err, DereferenceError::Invalid { .. });
        prop_assert!(is_invalid);
    }
}
