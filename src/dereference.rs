//! Reference resolution over an in-memory document.
//!
//! Every entry point is a pure function of `(document, reference)`: it
//! either returns a borrow of the target component (never a copy) or fails
//! with [`DereferenceError`]. Resolution is single-hop — cyclic reference
//! graphs are legal shapes and are never walked to convergence. The one
//! exception is the channel-local message indirection, which performs
//! exactly one extra hop into `components/messages`.

use indexmap::IndexMap;

use crate::error::DereferenceError;
use crate::reference::{self, ComponentKind, RefPath};
use crate::types::*;

/// A successfully resolved component of any kind, borrowed from the
/// document. Returned by the generic [`dereference`] entry point.
#[derive(Clone, Copy, Debug)]
pub enum Component<'a> {
    Server(&'a Server),
    Channel(&'a Channel),
    Operation(&'a Operation),
    Schema(&'a Schema),
    Message(&'a Message),
    SecurityScheme(&'a SecurityScheme),
    ServerVariable(&'a ServerVariable),
    Parameter(&'a Parameter),
    CorrelationId(&'a CorrelationId),
    Reply(&'a OperationReply),
    ReplyAddress(&'a OperationReplyAddress),
    ExternalDocumentation(&'a ExternalDocumentation),
    Tag(&'a Tag),
    OperationTrait(&'a OperationTrait),
    MessageTrait(&'a MessageTrait),
    ServerBindings(&'a BindingCollection),
    ChannelBindings(&'a BindingCollection),
    OperationBindings(&'a BindingCollection),
    MessageBindings(&'a BindingCollection),
}

impl Component<'_> {
    /// The kind of the resolved component.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Server(_) => ComponentKind::Server,
            Component::Channel(_) => ComponentKind::Channel,
            Component::Operation(_) => ComponentKind::Operation,
            Component::Schema(_) => ComponentKind::Schema,
            Component::Message(_) => ComponentKind::Message,
            Component::SecurityScheme(_) => ComponentKind::SecurityScheme,
            Component::ServerVariable(_) => ComponentKind::ServerVariable,
            Component::Parameter(_) => ComponentKind::Parameter,
            Component::CorrelationId(_) => ComponentKind::CorrelationId,
            Component::Reply(_) => ComponentKind::Reply,
            Component::ReplyAddress(_) => ComponentKind::ReplyAddress,
            Component::ExternalDocumentation(_) => ComponentKind::ExternalDocumentation,
            Component::Tag(_) => ComponentKind::Tag,
            Component::OperationTrait(_) => ComponentKind::OperationTrait,
            Component::MessageTrait(_) => ComponentKind::MessageTrait,
            Component::ServerBindings(_) => ComponentKind::ServerBindings,
            Component::ChannelBindings(_) => ComponentKind::ChannelBindings,
            Component::OperationBindings(_) => ComponentKind::OperationBindings,
            Component::MessageBindings(_) => ComponentKind::MessageBindings,
        }
    }
}

// ─── Resolver registry ──────────────────────────────────────────────────────

type Resolver = for<'a> fn(&'a AsyncApi, &RefPath, &str) -> Result<Component<'a>, DereferenceError>;

macro_rules! rooted_resolver {
    ($name:ident, $variant:ident, $field:ident) => {
        fn $name<'a>(
            doc: &'a AsyncApi,
            path: &RefPath,
            reference: &str,
        ) -> Result<Component<'a>, DereferenceError> {
            lookup_rooted(doc, path, reference, |d| &d.$field, |c| &c.$field)
                .map(Component::$variant)
        }
    };
}

macro_rules! components_resolver {
    ($name:ident, $variant:ident, $field:ident) => {
        fn $name<'a>(
            doc: &'a AsyncApi,
            path: &RefPath,
            reference: &str,
        ) -> Result<Component<'a>, DereferenceError> {
            lookup_components(doc, path, reference, |c| &c.$field).map(Component::$variant)
        }
    };
}

rooted_resolver!(resolve_server, Server, servers);
rooted_resolver!(resolve_channel, Channel, channels);
rooted_resolver!(resolve_operation, Operation, operations);
components_resolver!(resolve_schema, Schema, schemas);
components_resolver!(resolve_message, Message, messages);
components_resolver!(resolve_security_scheme, SecurityScheme, security_schemes);
components_resolver!(resolve_server_variable, ServerVariable, server_variables);
components_resolver!(resolve_parameter, Parameter, parameters);
components_resolver!(resolve_correlation_id, CorrelationId, correlation_ids);
components_resolver!(resolve_reply, Reply, replies);
components_resolver!(resolve_reply_address, ReplyAddress, reply_addresses);
components_resolver!(resolve_external_docs, ExternalDocumentation, external_docs);
components_resolver!(resolve_tag, Tag, tags);
components_resolver!(resolve_operation_trait, OperationTrait, operation_traits);
components_resolver!(resolve_message_trait, MessageTrait, message_traits);
components_resolver!(resolve_server_bindings, ServerBindings, server_bindings);
components_resolver!(resolve_channel_bindings, ChannelBindings, channel_bindings);
components_resolver!(resolve_operation_bindings, OperationBindings, operation_bindings);
components_resolver!(resolve_message_bindings, MessageBindings, message_bindings);

/// One resolver per component kind, registered once as a static table.
static RESOLVERS: &[(ComponentKind, Resolver)] = &[
    (ComponentKind::Server, resolve_server),
    (ComponentKind::Channel, resolve_channel),
    (ComponentKind::Operation, resolve_operation),
    (ComponentKind::Schema, resolve_schema),
    (ComponentKind::Message, resolve_message),
    (ComponentKind::SecurityScheme, resolve_security_scheme),
    (ComponentKind::ServerVariable, resolve_server_variable),
    (ComponentKind::Parameter, resolve_parameter),
    (ComponentKind::CorrelationId, resolve_correlation_id),
    (ComponentKind::Reply, resolve_reply),
    (ComponentKind::ReplyAddress, resolve_reply_address),
    (ComponentKind::ExternalDocumentation, resolve_external_docs),
    (ComponentKind::Tag, resolve_tag),
    (ComponentKind::OperationTrait, resolve_operation_trait),
    (ComponentKind::MessageTrait, resolve_message_trait),
    (ComponentKind::ServerBindings, resolve_server_bindings),
    (ComponentKind::ChannelBindings, resolve_channel_bindings),
    (ComponentKind::OperationBindings, resolve_operation_bindings),
    (ComponentKind::MessageBindings, resolve_message_bindings),
];

fn resolver_for(kind: ComponentKind) -> Option<Resolver> {
    RESOLVERS
        .iter()
        .find_map(|(k, resolver)| (*k == kind).then_some(*resolver))
}

// ─── Lookup helpers ─────────────────────────────────────────────────────────

fn components<'a>(
    doc: &'a AsyncApi,
    reference: &str,
) -> Result<&'a Components, DereferenceError> {
    doc.components
        .as_ref()
        .ok_or_else(|| DereferenceError::not_found(reference))
}

/// Lookup for kinds with both a root-level and a components-level mapping.
fn lookup_rooted<'a, T>(
    doc: &'a AsyncApi,
    path: &RefPath,
    reference: &str,
    root: fn(&'a AsyncApi) -> &'a IndexMap<String, T>,
    nested: fn(&'a Components) -> &'a IndexMap<String, T>,
) -> Result<&'a T, DereferenceError> {
    let map = if path.components_scoped {
        nested(components(doc, reference)?)
    } else {
        root(doc)
    };
    map.get(&path.key)
        .ok_or_else(|| DereferenceError::not_found(reference))
}

/// Lookup for components-only kinds. The grammar already rejects root
/// placement for these, so only the components mapping is consulted.
fn lookup_components<'a, T>(
    doc: &'a AsyncApi,
    path: &RefPath,
    reference: &str,
    nested: fn(&'a Components) -> &'a IndexMap<String, T>,
) -> Result<&'a T, DereferenceError> {
    nested(components(doc, reference)?)
        .get(&path.key)
        .ok_or_else(|| DereferenceError::not_found(reference))
}

fn parse_expecting(reference: &str, kind: ComponentKind) -> Result<RefPath, DereferenceError> {
    let path = reference::parse(reference)?;
    if path.kind != kind {
        return Err(DereferenceError::invalid(
            reference,
            format!(
                "expected a '{}' reference, found '{}'",
                kind.collection(),
                path.kind.collection()
            ),
        ));
    }
    Ok(path)
}

// ─── Generic entry point ────────────────────────────────────────────────────

/// Resolve a reference of any kind, dispatching on the collection segment.
pub fn dereference<'a>(
    doc: &'a AsyncApi,
    reference: &str,
) -> Result<Component<'a>, DereferenceError> {
    let path = reference::parse(reference)?;
    match resolver_for(path.kind) {
        Some(resolver) => resolver(doc, &path, reference),
        None => Err(DereferenceError::invalid(
            reference,
            format!("no resolver registered for '{}'", path.kind.collection()),
        )),
    }
}

// ─── Typed entry points ─────────────────────────────────────────────────────

macro_rules! rooted_dereference {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $ty:ty, $field:ident) => {
        $(#[$meta])*
        pub fn $name<'a>(
            doc: &'a AsyncApi,
            reference: &str,
        ) -> Result<&'a $ty, DereferenceError> {
            let path = parse_expecting(reference, ComponentKind::$kind)?;
            lookup_rooted(doc, &path, reference, |d| &d.$field, |c| &c.$field)
        }
    };
}

macro_rules! components_dereference {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $ty:ty, $field:ident) => {
        $(#[$meta])*
        pub fn $name<'a>(
            doc: &'a AsyncApi,
            reference: &str,
        ) -> Result<&'a $ty, DereferenceError> {
            let path = parse_expecting(reference, ComponentKind::$kind)?;
            lookup_components(doc, &path, reference, |c| &c.$field)
        }
    };
}

rooted_dereference!(
    /// Resolve `#/servers/<name>` or `#/components/servers/<name>`.
    dereference_server, Server, Server, servers
);
rooted_dereference!(
    /// Resolve `#/channels/<name>` or `#/components/channels/<name>`.
    dereference_channel, Channel, Channel, channels
);
rooted_dereference!(
    /// Resolve `#/operations/<name>` or `#/components/operations/<name>`.
    dereference_operation, Operation, Operation, operations
);
components_dereference!(dereference_schema, Schema, Schema, schemas);
components_dereference!(dereference_message, Message, Message, messages);
components_dereference!(
    dereference_security_scheme, SecurityScheme, SecurityScheme, security_schemes
);
components_dereference!(
    dereference_server_variable, ServerVariable, ServerVariable, server_variables
);
components_dereference!(dereference_parameter, Parameter, Parameter, parameters);
components_dereference!(
    dereference_correlation_id, CorrelationId, CorrelationId, correlation_ids
);
components_dereference!(dereference_reply, Reply, OperationReply, replies);
components_dereference!(
    dereference_reply_address, ReplyAddress, OperationReplyAddress, reply_addresses
);
components_dereference!(
    dereference_external_docs, ExternalDocumentation, ExternalDocumentation, external_docs
);
components_dereference!(dereference_tag, Tag, Tag, tags);
components_dereference!(
    dereference_operation_trait, OperationTrait, OperationTrait, operation_traits
);
components_dereference!(
    dereference_message_trait, MessageTrait, MessageTrait, message_traits
);
components_dereference!(
    dereference_server_bindings, ServerBindings, BindingCollection, server_bindings
);
components_dereference!(
    dereference_channel_bindings, ChannelBindings, BindingCollection, channel_bindings
);
components_dereference!(
    dereference_operation_bindings, OperationBindings, BindingCollection, operation_bindings
);
components_dereference!(
    dereference_message_bindings, MessageBindings, BindingCollection, message_bindings
);

// ─── Channel-local message indirection ──────────────────────────────────────

/// Resolve an operation's message reference,
/// `#/channels/<channelName>/messages/<messageName>`, against a specific
/// channel: the message is looked up in that channel's own `messages`
/// mapping; if the entry is itself a reference, exactly one further hop is
/// performed into `components/messages`. A target that is still a reference
/// after that hop is rejected — chained message references are not
/// supported.
pub fn dereference_channel_message<'a>(
    doc: &'a AsyncApi,
    channel_name: &str,
    channel: &'a Channel,
    reference: &str,
) -> Result<&'a Message, DereferenceError> {
    let (ref_channel, message_name) = reference::parse_channel_message(reference)?;
    if ref_channel != channel_name {
        return Err(DereferenceError::invalid(
            reference,
            format!(
                "reference targets channel '{}', not '{}'",
                ref_channel, channel_name
            ),
        ));
    }

    let message = channel
        .messages
        .get(&message_name)
        .ok_or_else(|| DereferenceError::not_found(reference))?;

    match message.reference() {
        Some(target) if !target.is_empty() => {
            let resolved = dereference_message(doc, target)?;
            if resolved.is_reference() {
                return Err(DereferenceError::invalid(
                    target,
                    "chained message references are not supported",
                ));
            }
            Ok(resolved)
        }
        _ => Ok(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> AsyncApi {
        serde_json::from_value(json!({
            "asyncapi": "3.0.0",
            "info": {"title": "Greeting API", "version": "1.0.0"},
            "servers": {
                "edge": {"host": "edge.example.com", "protocol": "mqtt"}
            },
            "channels": {
                "greetings": {
                    "address": "greetings",
                    "servers": [{"$ref": "#/components/servers/core"}],
                    "messages": {
                        "hello": {"$ref": "#/components/messages/hello"},
                        "inlineBye": {"name": "bye", "payload": {"type": "string"}}
                    }
                }
            },
            "components": {
                "servers": {
                    "core": {"host": "core.example.com", "protocol": "amqp"}
                },
                "messages": {
                    "hello": {"name": "hello", "payload": {"type": "object"}},
                    "chained": {"$ref": "#/components/messages/hello"}
                },
                "correlationIds": {
                    "byHeader": {"location": "$message.header#/correlationId"}
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn root_and_components_lookups_are_identity_preserving() {
        let doc = doc();
        let root = dereference_server(&doc, "#/servers/edge").unwrap();
        assert!(std::ptr::eq(root, &doc.servers["edge"]));

        let nested = dereference_server(&doc, "#/components/servers/core").unwrap();
        assert!(std::ptr::eq(nested, &doc.components.as_ref().unwrap().servers["core"]));
    }

    #[test]
    fn generic_dispatch_picks_the_right_kind() {
        let doc = doc();
        let component = dereference(&doc, "#/components/correlationIds/byHeader").unwrap();
        assert_eq!(component.kind(), ComponentKind::CorrelationId);
        assert!(matches!(component, Component::CorrelationId(_)));

        let component = dereference(&doc, "#/channels/greetings").unwrap();
        assert_eq!(component.kind(), ComponentKind::Channel);
    }

    #[test]
    fn registry_covers_every_kind() {
        for collection in [
            "servers", "channels", "operations", "schemas", "messages",
            "securitySchemes", "serverVariables", "parameters", "correlationIds",
            "replies", "replyAddresses", "externalDocs", "tags",
            "operationTraits", "messageTraits", "serverBindings",
            "channelBindings", "operationBindings", "messageBindings",
        ] {
            let kind = ComponentKind::from_collection(collection).unwrap();
            assert!(resolver_for(kind).is_some(), "{collection}");
        }
    }

    #[test]
    fn missing_entries_are_not_found_never_invalid() {
        let doc = doc();
        assert!(matches!(
            dereference_server(&doc, "#/servers/ghost"),
            Err(DereferenceError::NotFound { .. })
        ));
        assert!(matches!(
            dereference_message(&doc, "#/components/messages/ghost"),
            Err(DereferenceError::NotFound { .. })
        ));
    }

    #[test]
    fn absent_components_collection_is_not_found() {
        let doc: AsyncApi = serde_json::from_value(json!({
            "asyncapi": "3.0.0",
            "info": {"title": "t", "version": "1"}
        }))
        .unwrap();
        assert!(matches!(
            dereference_schema(&doc, "#/components/schemas/x"),
            Err(DereferenceError::NotFound { .. })
        ));
    }

    #[test]
    fn wrong_kind_for_typed_wrapper_is_invalid() {
        let doc = doc();
        assert!(matches!(
            dereference_server(&doc, "#/channels/greetings"),
            Err(DereferenceError::Invalid { .. })
        ));
        assert!(matches!(
            dereference_message(&doc, "#/components/servers/core"),
            Err(DereferenceError::Invalid { .. })
        ));
    }

    #[test]
    fn channel_message_resolves_inline_entry() {
        let doc = doc();
        let channel = &doc.channels["greetings"];
        let message = dereference_channel_message(
            &doc,
            "greetings",
            channel,
            "#/channels/greetings/messages/inlineBye",
        )
        .unwrap();
        assert_eq!(message.name.as_deref(), Some("bye"));
        assert!(std::ptr::eq(message, &channel.messages["inlineBye"]));
    }

    #[test]
    fn channel_message_follows_one_indirection() {
        let doc = doc();
        let channel = &doc.channels["greetings"];
        let message = dereference_channel_message(
            &doc,
            "greetings",
            channel,
            "#/channels/greetings/messages/hello",
        )
        .unwrap();
        assert_eq!(message.name.as_deref(), Some("hello"));
        assert!(std::ptr::eq(
            message,
            &doc.components.as_ref().unwrap().messages["hello"]
        ));
    }

    #[test]
    fn channel_message_rejects_wrong_channel() {
        let doc = doc();
        let channel = &doc.channels["greetings"];
        let err = dereference_channel_message(
            &doc,
            "greetings",
            channel,
            "#/channels/other/messages/hello",
        )
        .unwrap_err();
        assert!(matches!(err, DereferenceError::Invalid { .. }));
    }

    #[test]
    fn channel_message_rejects_chained_references() {
        let mut doc = doc();
        doc.channels["greetings"].messages.insert(
            "twice".to_string(),
            serde_json::from_value(json!({"$ref": "#/components/messages/chained"})).unwrap(),
        );
        let channel = &doc.channels["greetings"];
        let err = dereference_channel_message(
            &doc,
            "greetings",
            channel,
            "#/channels/greetings/messages/twice",
        )
        .unwrap_err();
        assert!(matches!(err, DereferenceError::Invalid { .. }));
    }

    #[test]
    fn channel_message_missing_local_name_is_not_found() {
        let doc = doc();
        let channel = &doc.channels["greetings"];
        let err = dereference_channel_message(
            &doc,
            "greetings",
            channel,
            "#/channels/greetings/messages/ghost",
        )
        .unwrap_err();
        assert!(matches!(err, DereferenceError::NotFound { .. }));
    }
}
