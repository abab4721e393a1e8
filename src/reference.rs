//! The `#/...` reference-path grammar.
//!
//! A reference is a `/`-delimited path beginning with `#`, case-sensitive,
//! empty segments discarded. Two shapes exist:
//!
//! 1. root-relative `#/<collection>/<name>` — only servers, channels, and
//!    operations live at the document root;
//! 2. components-relative `#/components/<collection>/<name>` — every kind.
//!
//! The second-to-last segment names the collection (and thereby the
//! component kind), the last segment is the entry key.

use crate::error::DereferenceError;

/// Every kind of component a reference can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Server,
    Channel,
    Operation,
    Schema,
    Message,
    SecurityScheme,
    ServerVariable,
    Parameter,
    CorrelationId,
    Reply,
    ReplyAddress,
    ExternalDocumentation,
    Tag,
    OperationTrait,
    MessageTrait,
    ServerBindings,
    ChannelBindings,
    OperationBindings,
    MessageBindings,
}

impl ComponentKind {
    /// Map a collection segment (`servers`, `correlationIds`, …) to its kind.
    pub fn from_collection(segment: &str) -> Option<ComponentKind> {
        Some(match segment {
            "servers" => ComponentKind::Server,
            "channels" => ComponentKind::Channel,
            "operations" => ComponentKind::Operation,
            "schemas" => ComponentKind::Schema,
            "messages" => ComponentKind::Message,
            "securitySchemes" => ComponentKind::SecurityScheme,
            "serverVariables" => ComponentKind::ServerVariable,
            "parameters" => ComponentKind::Parameter,
            "correlationIds" => ComponentKind::CorrelationId,
            "replies" => ComponentKind::Reply,
            "replyAddresses" => ComponentKind::ReplyAddress,
            "externalDocs" => ComponentKind::ExternalDocumentation,
            "tags" => ComponentKind::Tag,
            "operationTraits" => ComponentKind::OperationTrait,
            "messageTraits" => ComponentKind::MessageTrait,
            "serverBindings" => ComponentKind::ServerBindings,
            "channelBindings" => ComponentKind::ChannelBindings,
            "operationBindings" => ComponentKind::OperationBindings,
            "messageBindings" => ComponentKind::MessageBindings,
            _ => return None,
        })
    }

    /// The collection segment this kind lives under.
    pub fn collection(self) -> &'static str {
        match self {
            ComponentKind::Server => "servers",
            ComponentKind::Channel => "channels",
            ComponentKind::Operation => "operations",
            ComponentKind::Schema => "schemas",
            ComponentKind::Message => "messages",
            ComponentKind::SecurityScheme => "securitySchemes",
            ComponentKind::ServerVariable => "serverVariables",
            ComponentKind::Parameter => "parameters",
            ComponentKind::CorrelationId => "correlationIds",
            ComponentKind::Reply => "replies",
            ComponentKind::ReplyAddress => "replyAddresses",
            ComponentKind::ExternalDocumentation => "externalDocs",
            ComponentKind::Tag => "tags",
            ComponentKind::OperationTrait => "operationTraits",
            ComponentKind::MessageTrait => "messageTraits",
            ComponentKind::ServerBindings => "serverBindings",
            ComponentKind::ChannelBindings => "channelBindings",
            ComponentKind::OperationBindings => "operationBindings",
            ComponentKind::MessageBindings => "messageBindings",
        }
    }

    /// Whether the kind also has a top-level mapping on the document root.
    /// All other kinds are components-only.
    pub fn allows_root(self) -> bool {
        matches!(
            self,
            ComponentKind::Server | ComponentKind::Channel | ComponentKind::Operation
        )
    }
}

/// A parsed, well-formed reference path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefPath {
    /// Which component kind the collection segment names.
    pub kind: ComponentKind,
    /// The entry key (last segment).
    pub key: String,
    /// True for `#/components/...` references, false for root-relative ones.
    pub components_scoped: bool,
}

/// Parse a reference string into a [`RefPath`].
///
/// Fails with [`DereferenceError::Invalid`] on any shape problem: missing
/// `#` head, fewer than two usable segments, unknown collection segment, a
/// root-relative reference to a components-only kind, or trailing segments
/// beyond the two shapes above.
pub fn parse(reference: &str) -> Result<RefPath, DereferenceError> {
    if reference.is_empty() {
        return Err(DereferenceError::invalid(reference, "empty reference"));
    }
    let Some(path) = reference.strip_prefix('#') else {
        return Err(DereferenceError::invalid(reference, "must begin with '#'"));
    };

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["components", collection, key] => {
            let kind = ComponentKind::from_collection(collection).ok_or_else(|| {
                DereferenceError::invalid(
                    reference,
                    format!("unknown component collection '{}'", collection),
                )
            })?;
            Ok(RefPath {
                kind,
                key: (*key).to_string(),
                components_scoped: true,
            })
        }
        [collection, key] => {
            let kind = ComponentKind::from_collection(collection).ok_or_else(|| {
                DereferenceError::invalid(
                    reference,
                    format!("unknown component collection '{}'", collection),
                )
            })?;
            if !kind.allows_root() {
                return Err(DereferenceError::invalid(
                    reference,
                    format!(
                        "'{}' entries live under '#/components/{}'",
                        collection, collection
                    ),
                ));
            }
            Ok(RefPath {
                kind,
                key: (*key).to_string(),
                components_scoped: false,
            })
        }
        _ => Err(DereferenceError::invalid(
            reference,
            "expected '#/<collection>/<name>' or '#/components/<collection>/<name>'",
        )),
    }
}

/// Parse a channel-local message reference,
/// `#/channels/<channelName>/messages/<messageName>`, returning the channel
/// name and message name.
pub fn parse_channel_message(reference: &str) -> Result<(String, String), DereferenceError> {
    if reference.is_empty() {
        return Err(DereferenceError::invalid(reference, "empty reference"));
    }
    let Some(path) = reference.strip_prefix('#') else {
        return Err(DereferenceError::invalid(reference, "must begin with '#'"));
    };

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        ["channels", channel, "messages", message] => {
            Ok(((*channel).to_string(), (*message).to_string()))
        }
        _ => Err(DereferenceError::invalid(
            reference,
            "expected '#/channels/<channel>/messages/<message>'",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_root_relative_shapes() {
        for collection in ["servers", "channels", "operations"] {
            let path = parse(&format!("#/{}/main", collection)).unwrap();
            assert!(!path.components_scoped);
            assert_eq!(path.key, "main");
            assert_eq!(path.kind.collection(), collection);
        }
    }

    #[test]
    fn parses_components_relative_shapes() {
        let path = parse("#/components/correlationIds/byHeader").unwrap();
        assert!(path.components_scoped);
        assert_eq!(path.kind, ComponentKind::CorrelationId);
        assert_eq!(path.key, "byHeader");
    }

    #[test]
    fn components_only_kinds_reject_root_placement() {
        let err = parse("#/messages/greeting").unwrap_err();
        assert!(matches!(err, DereferenceError::Invalid { .. }));
        let err = parse("#/schemas/greeting").unwrap_err();
        assert!(matches!(err, DereferenceError::Invalid { .. }));
    }

    #[test]
    fn rejects_short_and_malformed_paths() {
        for reference in ["", "#", "#/", "#/servers", "servers/x", "#/x/y/z/w"] {
            let err = parse(reference).unwrap_err();
            assert!(matches!(err, DereferenceError::Invalid { .. }), "{reference}");
        }
    }

    #[test]
    fn rejects_unknown_collections() {
        let err = parse("#/widgets/one").unwrap_err();
        assert!(matches!(err, DereferenceError::Invalid { .. }));
        let err = parse("#/components/widgets/one").unwrap_err();
        assert!(matches!(err, DereferenceError::Invalid { .. }));
    }

    #[test]
    fn empty_segments_are_discarded() {
        let path = parse("#//servers//prod").unwrap();
        assert_eq!(path.kind, ComponentKind::Server);
        assert_eq!(path.key, "prod");
    }

    #[test]
    fn collection_names_are_case_sensitive() {
        assert!(parse("#/Servers/prod").is_err());
        assert!(parse("#/components/CorrelationIds/x").is_err());
    }

    #[test]
    fn channel_message_shape() {
        let (channel, message) = parse_channel_message("#/channels/orders/messages/created").unwrap();
        assert_eq!(channel, "orders");
        assert_eq!(message, "created");

        assert!(parse_channel_message("#/channels/orders/created").is_err());
        assert!(parse_channel_message("#/components/messages/created").is_err());
    }

    #[test]
    fn kind_round_trips_through_collection_names() {
        for collection in [
            "servers",
            "channels",
            "operations",
            "schemas",
            "messages",
            "securitySchemes",
            "serverVariables",
            "parameters",
            "correlationIds",
            "replies",
            "replyAddresses",
            "externalDocs",
            "tags",
            "operationTraits",
            "messageTraits",
            "serverBindings",
            "channelBindings",
            "operationBindings",
            "messageBindings",
        ] {
            let kind = ComponentKind::from_collection(collection).unwrap();
            assert_eq!(kind.collection(), collection);
        }
    }
}
