use asyncapi_graph::builder::*;
use asyncapi_graph::enums::OperationAction;
use asyncapi_graph::types::AsyncApi;
use asyncapi_graph::validate::*;
use serde_json::json;

fn greeting_doc() -> AsyncApi {
    AsyncApiBuilder::new("3.0.0")
        .info("Greeting API", "1.0.0")
        .channel(
            "c1",
            ChannelBuilder::new("greetings")
                .server_ref("#/components/servers/s1")
                .message_ref("hello", "#/components/messages/hello")
                .build(),
        )
        .operation(
            "publishGreeting",
            OperationBuilder::new(OperationAction::Send, "#/channels/c1")
                .message_ref("#/channels/c1/messages/hello")
                .build(),
        )
        .components(
            ComponentsBuilder::new()
                .server("s1", ServerBuilder::new("broker.example.com", "mqtt").build())
                .message(
                    "hello",
                    MessageBuilder::new()
                        .name("hello")
                        .payload(json!({"type": "object"}))
                        .build(),
                )
                .build(),
        )
        .build()
}

#[test]
fn self_consistent_document_has_zero_violations() {
    let result = validate(&greeting_doc());
    assert!(result.is_valid(), "{:?}", result.errors);
}

#[test]
fn operation_referencing_missing_channel_yields_one_channel_violation() {
    let doc = AsyncApiBuilder::new("3.0.0")
        .info("t", "1")
        .operation(
            "orphan",
            OperationBuilder::new(OperationAction::Receive, "#/channels/ghost").build(),
        )
        .build();

    let result = validate(&doc);
    assert_eq!(result.errors.len(), 1, "{:?}", result.errors);
    assert_eq!(result.errors[0].path, "operations.orphan.channel");
}

#[test]
fn removing_a_channel_message_breaks_the_operation_linkage() {
    let mut doc = greeting_doc();
    assert!(validate(&doc).is_valid());

    doc.channels["c1"].messages.shift_remove("hello");

    let result = validate(&doc);
    assert!(!result.is_valid());
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.path == "operations.publishGreeting.messages[0]"),
        "{:?}",
        result.errors
    );
}

#[test]
fn message_not_declared_by_the_operations_channel_is_a_violation() {
    let mut doc = greeting_doc();
    // Reference a message name the channel never declares.
    doc.operations["publishGreeting"].messages[0] =
        asyncapi_graph::types::Message::reference_to("#/channels/c1/messages/goodbye");

    let result = validate(&doc);
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.path == "operations.publishGreeting.messages[0]"),
        "{:?}",
        result.errors
    );
}

#[test]
fn reference_to_wrong_component_kind_is_a_violation_not_a_panic() {
    let mut doc = greeting_doc();
    // A channel whose server entry points at a channel path.
    doc.channels["c1"].servers[0] =
        asyncapi_graph::types::Server::reference_to("#/channels/c1");

    let result = validate(&doc);
    assert!(
        result.errors.iter().any(|e| e.path == "channels.c1.servers[0]"),
        "{:?}",
        result.errors
    );
}

#[test]
fn correlation_id_locations_from_the_wire() {
    let doc = asyncapi_graph::parse(
        r#"
asyncapi: 3.0.0
info:
  title: t
  version: "1"
components:
  correlationIds:
    good:
      location: "$message.header#/MQMD/CorrelId"
"#,
    )
    .unwrap();
    assert!(validate(&doc).is_valid());

    let doc = asyncapi_graph::parse(
        r#"
asyncapi: 3.0.0
info:
  title: t
  version: "1"
components:
  correlationIds:
    bad:
      location: "not-a-runtime-expression"
"#,
    )
    .unwrap();
    let result = validate(&doc);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "components.correlationIds.bad.location");
}

#[test]
fn full_mode_reports_a_superset_of_fragment_mode() {
    // A channel with a broken server reference and a missing address: the
    // address violation shows in both modes, the reference violation only
    // when a document is supplied.
    let channel: asyncapi_graph::types::Channel = serde_json::from_value(json!({
        "servers": [{"$ref": "#/components/servers/missing"}]
    }))
    .unwrap();

    let fragment = validate_channel(&channel, None);
    let doc = AsyncApiBuilder::new("3.0.0").info("t", "1").build();
    let full = validate_channel(&channel, Some(&doc));

    assert!(full.len() >= fragment.len());
    for violation in &fragment {
        assert!(full.contains(violation), "{:?} missing from {:?}", violation, full);
    }
}

#[test]
fn fragment_and_full_mode_agree_on_a_self_consistent_document() {
    let doc = greeting_doc();
    for (name, operation) in &doc.operations {
        let fragment = validate_operation(operation, None);
        assert!(fragment.is_empty(), "{name}: {:?}", fragment);
        let full = validate_operation(operation, Some(&doc));
        assert!(full.is_empty(), "{name}: {:?}", full);
    }
}

#[test]
fn reply_mutual_exclusivity_both_directions() {
    let both: asyncapi_graph::types::OperationReply = serde_json::from_value(json!({
        "address": {"location": "$message.header#/replyTo"},
        "channel": {"$ref": "#/channels/replies"}
    }))
    .unwrap();
    assert!(!validate_reply(&both, None).is_empty());

    let neither = asyncapi_graph::types::OperationReply::default();
    assert!(!validate_reply(&neither, None).is_empty());
}

#[test]
fn validation_collects_all_violations_in_one_pass() {
    let doc = asyncapi_graph::parse(
        r#"
asyncapi: 3.0.0
info:
  title: ""
  version: ""
channels:
  bare: {}
"#,
    )
    .unwrap();

    let result = validate(&doc);
    let paths: Vec<&str> = result.errors.iter().map(|e| e.path.as_str()).collect();
    assert!(paths.contains(&"info.title"));
    assert!(paths.contains(&"info.version"));
    assert!(paths.contains(&"channels.bare.address"));
    assert!(paths.contains(&"channels.bare.servers"));
}

#[test]
fn empty_default_content_type_is_flagged() {
    let doc = asyncapi_graph::parse(
        "asyncapi: 3.0.0\ninfo:\n  title: t\n  version: '1'\ndefaultContentType: ''\n",
    )
    .unwrap();
    let result = validate(&doc);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "defaultContentType");
}

#[test]
fn components_namespace_is_validated_with_the_same_rules() {
    let doc = asyncapi_graph::parse(
        r#"
asyncapi: 3.0.0
info:
  title: t
  version: "1"
components:
  servers:
    incomplete:
      host: broker.example.com
  tags:
    anonymous: {}
"#,
    )
    .unwrap();
    let result = validate(&doc);
    let paths: Vec<&str> = result.errors.iter().map(|e| e.path.as_str()).collect();
    assert!(paths.contains(&"components.servers.incomplete.protocol"));
    assert!(paths.contains(&"components.tags.anonymous.name"));
}
