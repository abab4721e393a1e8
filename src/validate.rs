//! Structural validation of documents and individual components.
//!
//! Returns **all** violations in one pass, not just the first, and never
//! panics on data-shape problems: broken references, malformed runtime
//! expressions, and missing required fields all surface as accumulated
//! [`ValidationError`]s tied to a field path.
//!
//! Every per-component entry point takes an optional document. When the
//! document is absent (fragment mode) reference-resolution checks are
//! skipped and assumed valid; full mode only ever adds violations on top of
//! fragment mode, never removes any.
//!
//! A component that *is* a reference gets exactly one check: the reference
//! must dereference to a component of the same kind. None of its own fields
//! are inspected in that case.

use crate::dereference::*;
use crate::error::{DereferenceError, ValidationError, ValidationResult};
use crate::expression;
use crate::reference;
use crate::types::*;

/// Validate a whole document: version, info, default content type, servers,
/// channels, operations, then the components namespace.
pub fn validate(doc: &AsyncApi) -> ValidationResult {
    let mut errors = Vec::new();

    if doc.asyncapi.is_empty() {
        push(&mut errors, "asyncapi", "specification version must be set");
    }
    check_info(&doc.info, "info", Some(doc), &mut errors);
    if let Some(content_type) = &doc.default_content_type
        && content_type.is_empty()
    {
        push(
            &mut errors,
            "defaultContentType",
            "defaultContentType, when present, must not be empty",
        );
    }

    let doc_ref = Some(doc);
    for (name, server) in &doc.servers {
        check_server(server, &format!("servers.{}", name), doc_ref, &mut errors);
    }
    for (name, channel) in &doc.channels {
        check_channel(channel, &format!("channels.{}", name), doc_ref, &mut errors);
    }
    for (name, operation) in &doc.operations {
        check_operation(
            operation,
            &format!("operations.{}", name),
            doc_ref,
            &mut errors,
        );
    }
    if let Some(components) = &doc.components {
        check_components(components, doc_ref, &mut errors);
    }

    ValidationResult { errors }
}

// ─── Per-component entry points ─────────────────────────────────────────────

macro_rules! component_validator {
    ($(#[$meta:meta])* $name:ident, $check:ident, $ty:ty, $root:literal) => {
        $(#[$meta])*
        pub fn $name(component: &$ty, doc: Option<&AsyncApi>) -> Vec<ValidationError> {
            let mut errors = Vec::new();
            $check(component, $root, doc, &mut errors);
            errors
        }
    };
}

component_validator!(
    /// Validate a server, inline or by reference.
    validate_server, check_server, Server, "server"
);
component_validator!(validate_server_variable, check_server_variable, ServerVariable, "serverVariable");
component_validator!(validate_channel, check_channel, Channel, "channel");
component_validator!(validate_parameter, check_parameter, Parameter, "parameter");
component_validator!(
    /// Validate an operation, including its channel/message linkage when a
    /// document is supplied.
    validate_operation, check_operation, Operation, "operation"
);
component_validator!(validate_operation_trait, check_operation_trait, OperationTrait, "operationTrait");
component_validator!(validate_reply, check_reply, OperationReply, "reply");
component_validator!(validate_reply_address, check_reply_address, OperationReplyAddress, "replyAddress");
component_validator!(validate_message, check_message, Message, "message");
component_validator!(validate_message_trait, check_message_trait, MessageTrait, "messageTrait");
component_validator!(validate_correlation_id, check_correlation_id, CorrelationId, "correlationId");
component_validator!(validate_schema, check_schema, Schema, "schema");
component_validator!(validate_security_scheme, check_security_scheme, SecurityScheme, "securityScheme");
component_validator!(validate_tag, check_tag, Tag, "tag");
component_validator!(validate_external_docs, check_external_docs, ExternalDocumentation, "externalDocs");

/// Validate a binding collection of a given kind, inline or by reference.
pub fn validate_bindings(
    bindings: &BindingCollection,
    kind: BindingsKind,
    doc: Option<&AsyncApi>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    check_bindings(bindings, "bindings", kind, doc, &mut errors);
    errors
}

/// Which of the four binding collections a [`BindingCollection`] stands in
/// for; selects the reference kind the base rule resolves against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingsKind {
    Server,
    Channel,
    Operation,
    Message,
}

// ─── Shared helpers ─────────────────────────────────────────────────────────

fn push(errors: &mut Vec<ValidationError>, path: &str, message: impl Into<String>) {
    errors.push(ValidationError {
        path: path.to_string(),
        message: message.into(),
    });
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

type ResolveFn<T> = for<'a> fn(&'a AsyncApi, &str) -> Result<&'a T, DereferenceError>;

/// The base rule for every referenceable component: when it is a reference,
/// the reference must resolve to a component of the same kind, and no other
/// rule fires. Returns true when the component was a reference (caller
/// stops there).
fn check_reference<T>(
    component: &impl Referenceable,
    path: &str,
    doc: Option<&AsyncApi>,
    resolve: ResolveFn<T>,
    errors: &mut Vec<ValidationError>,
) -> bool {
    if !component.is_reference() {
        return false;
    }
    if let Some(doc) = doc {
        let target = component.reference().unwrap_or_default();
        if let Err(e) = resolve(doc, target) {
            push(errors, path, e.to_string());
        }
    }
    true
}

// ─── Info ───────────────────────────────────────────────────────────────────

fn check_info(
    info: &Info,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if info.title.is_empty() {
        push(errors, &format!("{}.title", path), "title must be set");
    }
    if info.version.is_empty() {
        push(errors, &format!("{}.version", path), "version must be set");
    }
    for (i, tag) in info.tags.iter().enumerate() {
        check_tag(tag, &format!("{}.tags[{}]", path, i), doc, errors);
    }
    if let Some(docs) = &info.external_docs {
        check_external_docs(docs, &format!("{}.externalDocs", path), doc, errors);
    }
}

// ─── Server ─────────────────────────────────────────────────────────────────

fn check_server(
    server: &Server,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if check_reference(server, path, doc, dereference_server, errors) {
        return;
    }
    if blank(&server.host) {
        push(errors, &format!("{}.host", path), "host must be set");
    }
    if blank(&server.protocol) {
        push(errors, &format!("{}.protocol", path), "protocol must be set");
    }
    for (name, variable) in &server.variables {
        check_server_variable(variable, &format!("{}.variables.{}", path, name), doc, errors);
    }
    for (i, scheme) in server.security.iter().enumerate() {
        check_security_scheme(scheme, &format!("{}.security[{}]", path, i), doc, errors);
    }
    check_common_tail(
        &server.tags,
        &server.external_docs,
        &server.bindings,
        BindingsKind::Server,
        path,
        doc,
        errors,
    );
}

fn check_server_variable(
    variable: &ServerVariable,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if check_reference(variable, path, doc, dereference_server_variable, errors) {
        return;
    }
    if let Some(default) = &variable.default
        && !variable.enum_values.is_empty()
        && !variable.enum_values.contains(default)
    {
        push(
            errors,
            &format!("{}.default", path),
            format!("default '{}' is not one of the enum values", default),
        );
    }
}

// ─── Channel ────────────────────────────────────────────────────────────────

fn check_channel(
    channel: &Channel,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if check_reference(channel, path, doc, dereference_channel, errors) {
        return;
    }
    if blank(&channel.address) {
        push(errors, &format!("{}.address", path), "address must be set");
    }
    if channel.servers.is_empty() {
        push(
            errors,
            &format!("{}.servers", path),
            "at least one server must be declared",
        );
    }
    for (i, server) in channel.servers.iter().enumerate() {
        let entry_path = format!("{}.servers[{}]", path, i);
        if !server.is_reference() {
            push(errors, &entry_path, "must be a reference to a server");
            continue;
        }
        check_server(server, &entry_path, doc, errors);
    }
    for (name, parameter) in &channel.parameters {
        check_parameter(parameter, &format!("{}.parameters.{}", path, name), doc, errors);
    }
    for (name, message) in &channel.messages {
        check_message(message, &format!("{}.messages.{}", path, name), doc, errors);
    }
    check_common_tail(
        &channel.tags,
        &channel.external_docs,
        &channel.bindings,
        BindingsKind::Channel,
        path,
        doc,
        errors,
    );
}

fn check_parameter(
    parameter: &Parameter,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if check_reference(parameter, path, doc, dereference_parameter, errors) {
        return;
    }
    if let Some(location) = &parameter.location
        && !location.is_empty()
        && let Err(e) = expression::parse(location)
    {
        push(errors, &format!("{}.location", path), e.to_string());
    }
    if let Some(default) = &parameter.default
        && !parameter.enum_values.is_empty()
        && !parameter.enum_values.contains(default)
    {
        push(
            errors,
            &format!("{}.default", path),
            format!("default '{}' is not one of the enum values", default),
        );
    }
}

// ─── Operation ──────────────────────────────────────────────────────────────

fn check_operation(
    operation: &Operation,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if check_reference(operation, path, doc, dereference_operation, errors) {
        return;
    }
    if operation.action.is_none() {
        push(
            errors,
            &format!("{}.action", path),
            "action must be 'send' or 'receive'",
        );
    }

    // Resolve the channel first; the message linkage check depends on it.
    let mut resolved_channel: Option<(String, &Channel)> = None;
    match &operation.channel {
        None => push(
            errors,
            &format!("{}.channel", path),
            "a channel reference is required",
        ),
        Some(channel) if !channel.is_reference() => push(
            errors,
            &format!("{}.channel", path),
            "must be a reference to a channel",
        ),
        Some(channel) => {
            if let Some(doc) = doc {
                let target = channel.reference().unwrap_or_default();
                match dereference_channel(doc, target) {
                    Ok(resolved) => {
                        if let Ok(parsed) = reference::parse(target) {
                            resolved_channel = Some((parsed.key, resolved));
                        }
                    }
                    Err(e) => push(errors, &format!("{}.channel", path), e.to_string()),
                }
            }
        }
    }

    for (i, message) in operation.messages.iter().enumerate() {
        let entry_path = format!("{}.messages[{}]", path, i);
        if !message.is_reference() {
            push(
                errors,
                &entry_path,
                "must be a reference into the operation's channel messages",
            );
            continue;
        }
        if let Some(doc) = doc
            && let Some((channel_name, channel)) = &resolved_channel
        {
            let target = message.reference().unwrap_or_default();
            if let Err(e) = dereference_channel_message(doc, channel_name, channel, target) {
                push(errors, &entry_path, e.to_string());
            }
        }
    }

    for (i, operation_trait) in operation.traits.iter().enumerate() {
        check_operation_trait(operation_trait, &format!("{}.traits[{}]", path, i), doc, errors);
    }
    if let Some(reply) = &operation.reply {
        check_reply(reply, &format!("{}.reply", path), doc, errors);
    }
    for (i, scheme) in operation.security.iter().enumerate() {
        check_security_scheme(scheme, &format!("{}.security[{}]", path, i), doc, errors);
    }
    check_common_tail(
        &operation.tags,
        &operation.external_docs,
        &operation.bindings,
        BindingsKind::Operation,
        path,
        doc,
        errors,
    );
}

fn check_operation_trait(
    operation_trait: &OperationTrait,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if check_reference(operation_trait, path, doc, dereference_operation_trait, errors) {
        return;
    }
    for (i, scheme) in operation_trait.security.iter().enumerate() {
        check_security_scheme(scheme, &format!("{}.security[{}]", path, i), doc, errors);
    }
    check_common_tail(
        &operation_trait.tags,
        &operation_trait.external_docs,
        &operation_trait.bindings,
        BindingsKind::Operation,
        path,
        doc,
        errors,
    );
}

fn check_reply(
    reply: &OperationReply,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if check_reference(reply, path, doc, dereference_reply, errors) {
        return;
    }
    match (&reply.address, &reply.channel) {
        (Some(_), Some(_)) => push(
            errors,
            path,
            "address and channel are mutually exclusive",
        ),
        (None, None) => push(
            errors,
            path,
            "either address or channel must be set",
        ),
        _ => {}
    }

    if let Some(address) = &reply.address {
        check_reply_address(address, &format!("{}.address", path), doc, errors);
    }

    let mut resolved_channel: Option<(String, &Channel)> = None;
    if let Some(channel) = &reply.channel {
        let channel_path = format!("{}.channel", path);
        if !channel.is_reference() {
            push(errors, &channel_path, "must be a reference to a channel");
        } else if let Some(doc) = doc {
            let target = channel.reference().unwrap_or_default();
            match dereference_channel(doc, target) {
                Ok(resolved) => {
                    if let Ok(parsed) = reference::parse(target) {
                        resolved_channel = Some((parsed.key, resolved));
                    }
                }
                Err(e) => push(errors, &channel_path, e.to_string()),
            }
        }
    }

    for (i, message) in reply.messages.iter().enumerate() {
        let entry_path = format!("{}.messages[{}]", path, i);
        if !message.is_reference() {
            push(
                errors,
                &entry_path,
                "must be a reference into the reply channel's messages",
            );
            continue;
        }
        if let Some(doc) = doc
            && let Some((channel_name, channel)) = &resolved_channel
        {
            let target = message.reference().unwrap_or_default();
            if let Err(e) = dereference_channel_message(doc, channel_name, channel, target) {
                push(errors, &entry_path, e.to_string());
            }
        }
    }
}

fn check_reply_address(
    address: &OperationReplyAddress,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if check_reference(address, path, doc, dereference_reply_address, errors) {
        return;
    }
    check_location(&address.location, path, errors);
}

// ─── Message ────────────────────────────────────────────────────────────────

fn check_message(
    message: &Message,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if check_reference(message, path, doc, dereference_message, errors) {
        return;
    }
    if let Some(headers) = &message.headers {
        check_schema(headers, &format!("{}.headers", path), doc, errors);
    }
    if let Some(payload) = &message.payload {
        check_schema(payload, &format!("{}.payload", path), doc, errors);
    }
    if let Some(correlation_id) = &message.correlation_id {
        check_correlation_id(correlation_id, &format!("{}.correlationId", path), doc, errors);
    }
    for (i, message_trait) in message.traits.iter().enumerate() {
        check_message_trait(message_trait, &format!("{}.traits[{}]", path, i), doc, errors);
    }
    check_common_tail(
        &message.tags,
        &message.external_docs,
        &message.bindings,
        BindingsKind::Message,
        path,
        doc,
        errors,
    );
}

fn check_message_trait(
    message_trait: &MessageTrait,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if check_reference(message_trait, path, doc, dereference_message_trait, errors) {
        return;
    }
    if let Some(headers) = &message_trait.headers {
        check_schema(headers, &format!("{}.headers", path), doc, errors);
    }
    if let Some(correlation_id) = &message_trait.correlation_id {
        check_correlation_id(correlation_id, &format!("{}.correlationId", path), doc, errors);
    }
    check_common_tail(
        &message_trait.tags,
        &message_trait.external_docs,
        &message_trait.bindings,
        BindingsKind::Message,
        path,
        doc,
        errors,
    );
}

fn check_correlation_id(
    correlation_id: &CorrelationId,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if check_reference(correlation_id, path, doc, dereference_correlation_id, errors) {
        return;
    }
    check_location(&correlation_id.location, path, errors);
}

fn check_location(location: &Option<String>, path: &str, errors: &mut Vec<ValidationError>) {
    let location_path = format!("{}.location", path);
    match location.as_deref() {
        None | Some("") => push(errors, &location_path, "location must be set"),
        Some(location) => {
            if let Err(e) = expression::parse(location) {
                push(errors, &location_path, e.to_string());
            }
        }
    }
}

fn check_schema(
    schema: &Schema,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    // Inline schema keywords are opaque at this layer; only the reference
    // form carries a checkable rule.
    check_reference(schema, path, doc, dereference_schema, errors);
}

// ─── Security / tags / docs / bindings ──────────────────────────────────────

fn check_security_scheme(
    scheme: &SecurityScheme,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if check_reference(scheme, path, doc, dereference_security_scheme, errors) {
        return;
    }
    if scheme.scheme_type.is_none() {
        push(errors, &format!("{}.type", path), "type must be set");
    }
}

fn check_tag(tag: &Tag, path: &str, doc: Option<&AsyncApi>, errors: &mut Vec<ValidationError>) {
    if check_reference(tag, path, doc, dereference_tag, errors) {
        return;
    }
    if blank(&tag.name) {
        push(errors, &format!("{}.name", path), "name must be set");
    }
    if let Some(docs) = &tag.external_docs {
        check_external_docs(docs, &format!("{}.externalDocs", path), doc, errors);
    }
}

fn check_external_docs(
    docs: &ExternalDocumentation,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    if check_reference(docs, path, doc, dereference_external_docs, errors) {
        return;
    }
    if blank(&docs.url) {
        push(errors, &format!("{}.url", path), "url must be set");
    }
}

fn check_bindings(
    bindings: &BindingCollection,
    path: &str,
    kind: BindingsKind,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    let resolve: ResolveFn<BindingCollection> = match kind {
        BindingsKind::Server => dereference_server_bindings,
        BindingsKind::Channel => dereference_channel_bindings,
        BindingsKind::Operation => dereference_operation_bindings,
        BindingsKind::Message => dereference_message_bindings,
    };
    if check_reference(bindings, path, doc, resolve, errors) {
        return;
    }
    if bindings.is_empty() {
        push(errors, path, "at least one protocol binding must be set");
    }
}

/// Tags, external docs, and bindings appear on nearly every component; this
/// runs the three shared nested rules under the parent's path.
fn check_common_tail(
    tags: &[Tag],
    external_docs: &Option<ExternalDocumentation>,
    bindings: &Option<BindingCollection>,
    bindings_kind: BindingsKind,
    path: &str,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    for (i, tag) in tags.iter().enumerate() {
        check_tag(tag, &format!("{}.tags[{}]", path, i), doc, errors);
    }
    if let Some(docs) = external_docs {
        check_external_docs(docs, &format!("{}.externalDocs", path), doc, errors);
    }
    if let Some(bindings) = bindings {
        check_bindings(bindings, &format!("{}.bindings", path), bindings_kind, doc, errors);
    }
}

// ─── Components namespace ───────────────────────────────────────────────────

fn check_components(
    components: &Components,
    doc: Option<&AsyncApi>,
    errors: &mut Vec<ValidationError>,
) {
    for (name, server) in &components.servers {
        check_server(server, &format!("components.servers.{}", name), doc, errors);
    }
    for (name, channel) in &components.channels {
        check_channel(channel, &format!("components.channels.{}", name), doc, errors);
    }
    for (name, operation) in &components.operations {
        check_operation(operation, &format!("components.operations.{}", name), doc, errors);
    }
    for (name, schema) in &components.schemas {
        check_schema(schema, &format!("components.schemas.{}", name), doc, errors);
    }
    for (name, message) in &components.messages {
        check_message(message, &format!("components.messages.{}", name), doc, errors);
    }
    for (name, scheme) in &components.security_schemes {
        check_security_scheme(
            scheme,
            &format!("components.securitySchemes.{}", name),
            doc,
            errors,
        );
    }
    for (name, variable) in &components.server_variables {
        check_server_variable(
            variable,
            &format!("components.serverVariables.{}", name),
            doc,
            errors,
        );
    }
    for (name, parameter) in &components.parameters {
        check_parameter(parameter, &format!("components.parameters.{}", name), doc, errors);
    }
    for (name, correlation_id) in &components.correlation_ids {
        check_correlation_id(
            correlation_id,
            &format!("components.correlationIds.{}", name),
            doc,
            errors,
        );
    }
    for (name, reply) in &components.replies {
        check_reply(reply, &format!("components.replies.{}", name), doc, errors);
    }
    for (name, address) in &components.reply_addresses {
        check_reply_address(
            address,
            &format!("components.replyAddresses.{}", name),
            doc,
            errors,
        );
    }
    for (name, docs) in &components.external_docs {
        check_external_docs(docs, &format!("components.externalDocs.{}", name), doc, errors);
    }
    for (name, tag) in &components.tags {
        check_tag(tag, &format!("components.tags.{}", name), doc, errors);
    }
    for (name, operation_trait) in &components.operation_traits {
        check_operation_trait(
            operation_trait,
            &format!("components.operationTraits.{}", name),
            doc,
            errors,
        );
    }
    for (name, message_trait) in &components.message_traits {
        check_message_trait(
            message_trait,
            &format!("components.messageTraits.{}", name),
            doc,
            errors,
        );
    }
    for (kind, collection, map) in [
        (BindingsKind::Server, "serverBindings", &components.server_bindings),
        (BindingsKind::Channel, "channelBindings", &components.channel_bindings),
        (BindingsKind::Operation, "operationBindings", &components.operation_bindings),
        (BindingsKind::Message, "messageBindings", &components.message_bindings),
    ] {
        for (name, bindings) in map {
            check_bindings(
                bindings,
                &format!("components.{}.{}", collection, name),
                kind,
                doc,
                errors,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reference_component_skips_own_field_rules() {
        // No location, which an inline correlation id would be flagged for.
        let correlation_id: CorrelationId =
            serde_json::from_value(json!({"$ref": "#/components/correlationIds/main"})).unwrap();
        assert!(validate_correlation_id(&correlation_id, None).is_empty());

        let inline = CorrelationId::default();
        let errors = validate_correlation_id(&inline, None);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "correlationId.location");
    }

    #[test]
    fn correlation_id_location_grammar() {
        let good: CorrelationId =
            serde_json::from_value(json!({"location": "$message.header#/MQMD/CorrelId"})).unwrap();
        assert!(validate_correlation_id(&good, None).is_empty());

        let bad: CorrelationId =
            serde_json::from_value(json!({"location": "not-a-runtime-expression"})).unwrap();
        let errors = validate_correlation_id(&bad, None);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "correlationId.location");
    }

    #[test]
    fn reply_requires_exactly_one_of_address_and_channel() {
        let neither = OperationReply::default();
        let errors = validate_reply(&neither, None);
        assert!(errors.iter().any(|e| e.path == "reply"));

        let both: OperationReply = serde_json::from_value(json!({
            "address": {"location": "$message.header#/replyTo"},
            "channel": {"$ref": "#/channels/replies"}
        }))
        .unwrap();
        let errors = validate_reply(&both, None);
        assert!(errors.iter().any(|e| e.path == "reply"));

        let address_only: OperationReply = serde_json::from_value(json!({
            "address": {"location": "$message.header#/replyTo"}
        }))
        .unwrap();
        assert!(validate_reply(&address_only, None).is_empty());

        let channel_only: OperationReply = serde_json::from_value(json!({
            "channel": {"$ref": "#/channels/replies"}
        }))
        .unwrap();
        assert!(validate_reply(&channel_only, None).is_empty());
    }

    #[test]
    fn inline_bindings_need_an_active_slot() {
        let empty = BindingCollection::default();
        let errors = validate_bindings(&empty, BindingsKind::Channel, None);
        assert_eq!(errors.len(), 1);

        let mut active = BindingCollection::default();
        active.set(crate::enums::BindingProtocol::Amqp, json!({"is": "queue"}));
        assert!(validate_bindings(&active, BindingsKind::Channel, None).is_empty());
    }

    #[test]
    fn fragment_mode_skips_reference_resolution() {
        let channel: Channel = serde_json::from_value(json!({
            "address": "orders",
            "servers": [{"$ref": "#/components/servers/missing"}]
        }))
        .unwrap();
        assert!(validate_channel(&channel, None).is_empty());

        // Full mode against an empty document reports the broken reference.
        let doc: AsyncApi = serde_json::from_value(json!({
            "asyncapi": "3.0.0",
            "info": {"title": "t", "version": "1"}
        }))
        .unwrap();
        let errors = validate_channel(&channel, Some(&doc));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "channel.servers[0]");
    }

    #[test]
    fn server_variable_default_must_be_in_enum() {
        let variable: ServerVariable = serde_json::from_value(json!({
            "enum": ["8883", "1883"],
            "default": "9999"
        }))
        .unwrap();
        let errors = validate_server_variable(&variable, None);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "serverVariable.default");
    }
}
