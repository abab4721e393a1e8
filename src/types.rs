//! The in-memory AsyncAPI v3 document graph.
//!
//! Every component that may appear as a `$ref` pointer embeds a
//! `reference` field and implements [`Referenceable`]. When a component is a
//! reference, its remaining fields are ignored by validation — it is a
//! pointer, not a definition. The graph is build-then-freeze: the
//! dereferencer and validator never mutate it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::*;

/// A component that may either hold inline data or point at another
/// component of the same kind elsewhere in the document.
pub trait Referenceable {
    /// The raw `$ref` string, if any.
    fn reference(&self) -> Option<&str>;

    /// True iff the component is a pointer rather than an inline definition.
    fn is_reference(&self) -> bool {
        self.reference().is_some_and(|r| !r.is_empty())
    }
}

macro_rules! impl_referenceable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Referenceable for $ty {
                fn reference(&self) -> Option<&str> {
                    self.reference.as_deref()
                }
            }

            impl $ty {
                /// A component that is purely a pointer to another component
                /// of the same kind.
                pub fn reference_to(reference: impl Into<String>) -> Self {
                    Self {
                        reference: Some(reference.into()),
                        ..Self::default()
                    }
                }
            }
        )+
    };
}

// ─── Root ───────────────────────────────────────────────────────────────────

/// The root of an AsyncAPI v3 document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncApi {
    /// Specification version, e.g. `"3.0.0"`.
    pub asyncapi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub info: Info,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_content_type: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub servers: IndexMap<String, Server>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub channels: IndexMap<String, Channel>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub operations: IndexMap<String, Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

/// Document metadata.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct License {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// ─── Server ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variables: IndexMap<String, ServerVariable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<BindingCollection>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServerVariable {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

// ─── Channel ────────────────────────────────────────────────────────────────

/// A named addressable unit servers expose and messages travel through.
///
/// `servers` entries are references into `servers`/`components.servers`;
/// `messages` declares, by local name, which messages the channel may carry
/// (inline or via references into `components.messages`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub messages: IndexMap<String, Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, Parameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<BindingCollection>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

// ─── Operation ──────────────────────────────────────────────────────────────

/// A send or receive interaction against exactly one channel.
///
/// `channel` is always a reference; `messages` entries are references of the
/// shape `#/channels/<channel>/messages/<name>`, resolved through the
/// channel-local message indirection.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<OperationAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<OperationTrait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<OperationReply>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<BindingCollection>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationTrait {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<BindingCollection>,
}

/// Where and how an operation's reply travels.
///
/// When inline, exactly one of `address`/`channel` must be set.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OperationReply {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<OperationReplyAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OperationReplyAddress {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ─── Message ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<CorrelationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<BindingCollection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<MessageExample>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<MessageTrait>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTrait {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<CorrelationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<BindingCollection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<MessageExample>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MessageExample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Points at a value inside a message at delivery time via a runtime
/// expression in `location`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CorrelationId {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A schema: either a `$ref` or an opaque schema object. Schema-internal
/// keywords are not interpreted at this layer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(flatten)]
    pub schema: serde_json::Map<String, Value>,
}

// ─── Security ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scheme_type: Option<SecuritySchemeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,
    /// OAuth flow definitions, kept opaque at this layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flows: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_id_connect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

// ─── Tag / external docs ────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExternalDocumentation {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ─── Bindings ───────────────────────────────────────────────────────────────

/// Protocol-keyed binding configuration for a server, channel, operation,
/// or message. One nullable slot per supported protocol; the non-null slots
/// are the active bindings. Payloads are opaque at this layer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BindingCollection {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kafka: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amqp: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amqp1: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mqtt: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mqtt5: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nats: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jms: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sns: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solace: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sqs: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stomp: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mercure: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ibmmq: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub googlepubsub: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulsar: Option<Value>,
}

impl BindingCollection {
    fn slot(&self, protocol: BindingProtocol) -> &Option<Value> {
        match protocol {
            BindingProtocol::Http => &self.http,
            BindingProtocol::Ws => &self.ws,
            BindingProtocol::Kafka => &self.kafka,
            BindingProtocol::Amqp => &self.amqp,
            BindingProtocol::Amqp1 => &self.amqp1,
            BindingProtocol::Mqtt => &self.mqtt,
            BindingProtocol::Mqtt5 => &self.mqtt5,
            BindingProtocol::Nats => &self.nats,
            BindingProtocol::Jms => &self.jms,
            BindingProtocol::Sns => &self.sns,
            BindingProtocol::Solace => &self.solace,
            BindingProtocol::Sqs => &self.sqs,
            BindingProtocol::Stomp => &self.stomp,
            BindingProtocol::Redis => &self.redis,
            BindingProtocol::Mercure => &self.mercure,
            BindingProtocol::Ibmmq => &self.ibmmq,
            BindingProtocol::Googlepubsub => &self.googlepubsub,
            BindingProtocol::Pulsar => &self.pulsar,
        }
    }

    fn slot_mut(&mut self, protocol: BindingProtocol) -> &mut Option<Value> {
        match protocol {
            BindingProtocol::Http => &mut self.http,
            BindingProtocol::Ws => &mut self.ws,
            BindingProtocol::Kafka => &mut self.kafka,
            BindingProtocol::Amqp => &mut self.amqp,
            BindingProtocol::Amqp1 => &mut self.amqp1,
            BindingProtocol::Mqtt => &mut self.mqtt,
            BindingProtocol::Mqtt5 => &mut self.mqtt5,
            BindingProtocol::Nats => &mut self.nats,
            BindingProtocol::Jms => &mut self.jms,
            BindingProtocol::Sns => &mut self.sns,
            BindingProtocol::Solace => &mut self.solace,
            BindingProtocol::Sqs => &mut self.sqs,
            BindingProtocol::Stomp => &mut self.stomp,
            BindingProtocol::Redis => &mut self.redis,
            BindingProtocol::Mercure => &mut self.mercure,
            BindingProtocol::Ibmmq => &mut self.ibmmq,
            BindingProtocol::Googlepubsub => &mut self.googlepubsub,
            BindingProtocol::Pulsar => &mut self.pulsar,
        }
    }

    /// Place a binding payload into its protocol slot, replacing any
    /// previous payload for that protocol.
    pub fn set(&mut self, protocol: BindingProtocol, payload: Value) {
        *self.slot_mut(protocol) = Some(payload);
    }

    /// The payload for a protocol, if that slot is active.
    pub fn get(&self, protocol: BindingProtocol) -> Option<&Value> {
        self.slot(protocol).as_ref()
    }

    /// Active bindings in the fixed protocol order of
    /// [`BindingProtocol::ALL`].
    pub fn iter(&self) -> impl Iterator<Item = (BindingProtocol, &Value)> {
        BindingProtocol::ALL
            .iter()
            .filter_map(|&p| self.slot(p).as_ref().map(|v| (p, v)))
    }

    /// True when no protocol slot is active.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

// ─── Components ─────────────────────────────────────────────────────────────

/// The reusable-definitions namespace targeted by `#/components/...`
/// references. Mirrors the root mappings and adds the components-only kinds.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub servers: IndexMap<String, Server>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub channels: IndexMap<String, Channel>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub operations: IndexMap<String, Operation>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, Schema>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub messages: IndexMap<String, Message>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub security_schemes: IndexMap<String, SecurityScheme>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub server_variables: IndexMap<String, ServerVariable>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, Parameter>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub correlation_ids: IndexMap<String, CorrelationId>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub replies: IndexMap<String, OperationReply>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub reply_addresses: IndexMap<String, OperationReplyAddress>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub external_docs: IndexMap<String, ExternalDocumentation>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub tags: IndexMap<String, Tag>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub operation_traits: IndexMap<String, OperationTrait>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub message_traits: IndexMap<String, MessageTrait>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub server_bindings: IndexMap<String, BindingCollection>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub channel_bindings: IndexMap<String, BindingCollection>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub operation_bindings: IndexMap<String, BindingCollection>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub message_bindings: IndexMap<String, BindingCollection>,
}

impl_referenceable!(
    Server,
    ServerVariable,
    Channel,
    Parameter,
    Operation,
    OperationTrait,
    OperationReply,
    OperationReplyAddress,
    Message,
    MessageTrait,
    CorrelationId,
    Schema,
    SecurityScheme,
    Tag,
    ExternalDocumentation,
    BindingCollection,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reference_component_ignores_blank_string() {
        let mut server = Server::default();
        assert!(!server.is_reference());
        server.reference = Some(String::new());
        assert!(!server.is_reference());
        server.reference = Some("#/components/servers/prod".to_string());
        assert!(server.is_reference());
    }

    #[test]
    fn binding_collection_iterates_in_fixed_order() {
        let mut bindings = BindingCollection::default();
        bindings.set(BindingProtocol::Pulsar, json!({"tenant": "public"}));
        bindings.set(BindingProtocol::Amqp, json!({"is": "queue"}));
        bindings.set(BindingProtocol::Http, json!({}));

        let order: Vec<BindingProtocol> = bindings.iter().map(|(p, _)| p).collect();
        assert_eq!(
            order,
            vec![
                BindingProtocol::Http,
                BindingProtocol::Amqp,
                BindingProtocol::Pulsar
            ]
        );
    }

    #[test]
    fn binding_collection_empty_until_first_set() {
        let mut bindings = BindingCollection::default();
        assert!(bindings.is_empty());
        bindings.set(BindingProtocol::Mqtt, json!({"qos": 1}));
        assert!(!bindings.is_empty());
        assert!(bindings.get(BindingProtocol::Mqtt).is_some());
        assert!(bindings.get(BindingProtocol::Mqtt5).is_none());
    }

    #[test]
    fn schema_ref_and_inline_round_trip() {
        let schema: Schema =
            serde_json::from_value(json!({"$ref": "#/components/schemas/greeting"})).unwrap();
        assert!(schema.is_reference());

        let schema: Schema =
            serde_json::from_value(json!({"type": "object", "required": ["id"]})).unwrap();
        assert!(!schema.is_reference());
        assert_eq!(schema.schema.get("type"), Some(&json!("object")));
    }

    #[test]
    fn document_maps_preserve_insertion_order() {
        let doc: AsyncApi = serde_json::from_value(json!({
            "asyncapi": "3.0.0",
            "info": {"title": "t", "version": "1"},
            "channels": {"zeta": {}, "alpha": {}, "mid": {}}
        }))
        .unwrap();
        let names: Vec<&String> = doc.channels.keys().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }
}
