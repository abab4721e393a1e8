//! Closed enumerations used throughout the AsyncAPI v3 type system.
//!
//! These are "closed" enums — only the defined variants are valid. Open
//! values (server protocol names, content types) are represented as strings.

use serde::{Deserialize, Serialize};

/// Direction of an operation relative to the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationAction {
    Send,
    Receive,
}

/// Protocols a binding collection can carry configuration for.
///
/// The variant order is the fixed iteration order of
/// [`BindingCollection::iter`](crate::types::BindingCollection::iter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingProtocol {
    Http,
    Ws,
    Kafka,
    Amqp,
    Amqp1,
    Mqtt,
    Mqtt5,
    Nats,
    Jms,
    Sns,
    Solace,
    Sqs,
    Stomp,
    Redis,
    Mercure,
    Ibmmq,
    Googlepubsub,
    Pulsar,
}

impl BindingProtocol {
    /// All protocols in the fixed iteration order.
    pub const ALL: [BindingProtocol; 18] = [
        BindingProtocol::Http,
        BindingProtocol::Ws,
        BindingProtocol::Kafka,
        BindingProtocol::Amqp,
        BindingProtocol::Amqp1,
        BindingProtocol::Mqtt,
        BindingProtocol::Mqtt5,
        BindingProtocol::Nats,
        BindingProtocol::Jms,
        BindingProtocol::Sns,
        BindingProtocol::Solace,
        BindingProtocol::Sqs,
        BindingProtocol::Stomp,
        BindingProtocol::Redis,
        BindingProtocol::Mercure,
        BindingProtocol::Ibmmq,
        BindingProtocol::Googlepubsub,
        BindingProtocol::Pulsar,
    ];

    /// The protocol key as it appears in serialized binding collections.
    pub fn as_str(self) -> &'static str {
        match self {
            BindingProtocol::Http => "http",
            BindingProtocol::Ws => "ws",
            BindingProtocol::Kafka => "kafka",
            BindingProtocol::Amqp => "amqp",
            BindingProtocol::Amqp1 => "amqp1",
            BindingProtocol::Mqtt => "mqtt",
            BindingProtocol::Mqtt5 => "mqtt5",
            BindingProtocol::Nats => "nats",
            BindingProtocol::Jms => "jms",
            BindingProtocol::Sns => "sns",
            BindingProtocol::Solace => "solace",
            BindingProtocol::Sqs => "sqs",
            BindingProtocol::Stomp => "stomp",
            BindingProtocol::Redis => "redis",
            BindingProtocol::Mercure => "mercure",
            BindingProtocol::Ibmmq => "ibmmq",
            BindingProtocol::Googlepubsub => "googlepubsub",
            BindingProtocol::Pulsar => "pulsar",
        }
    }
}

/// Security scheme type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecuritySchemeType {
    UserPassword,
    ApiKey,
    #[serde(rename = "X509")]
    X509,
    SymmetricEncryption,
    AsymmetricEncryption,
    HttpApiKey,
    Http,
    #[serde(rename = "oauth2")]
    OAuth2,
    OpenIdConnect,
    Plain,
    ScramSha256,
    ScramSha512,
    Gssapi,
}
