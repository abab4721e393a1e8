//! Fluent builders for constructing documents programmatically.
//!
//! Builders consume `self` and return `self`; `build()` produces the
//! finished component. The result is an ordinary [`AsyncApi`] graph —
//! build it, freeze it, then dereference and validate against it.
//!
//! ```
//! use asyncapi_graph::builder::{AsyncApiBuilder, ChannelBuilder, ServerBuilder};
//!
//! let doc = AsyncApiBuilder::new("3.0.0")
//!     .info("Greeting API", "1.0.0")
//!     .server("edge", ServerBuilder::new("edge.example.com", "mqtt").build())
//!     .channel(
//!         "greetings",
//!         ChannelBuilder::new("greetings")
//!             .server_ref("#/servers/edge")
//!             .build(),
//!     )
//!     .build();
//! assert!(asyncapi_graph::validate(&doc).is_valid());
//! ```

use serde_json::Value;

use crate::enums::{BindingProtocol, OperationAction};
use crate::types::*;

/// Builds the document root.
#[derive(Clone, Debug, Default)]
pub struct AsyncApiBuilder {
    doc: AsyncApi,
}

impl AsyncApiBuilder {
    pub fn new(version: impl Into<String>) -> Self {
        AsyncApiBuilder {
            doc: AsyncApi {
                asyncapi: version.into(),
                ..AsyncApi::default()
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.doc.id = Some(id.into());
        self
    }

    pub fn info(mut self, title: impl Into<String>, version: impl Into<String>) -> Self {
        self.doc.info.title = title.into();
        self.doc.info.version = version.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.doc.info.description = Some(description.into());
        self
    }

    pub fn default_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.doc.default_content_type = Some(content_type.into());
        self
    }

    pub fn server(mut self, name: impl Into<String>, server: Server) -> Self {
        self.doc.servers.insert(name.into(), server);
        self
    }

    pub fn channel(mut self, name: impl Into<String>, channel: Channel) -> Self {
        self.doc.channels.insert(name.into(), channel);
        self
    }

    pub fn operation(mut self, name: impl Into<String>, operation: Operation) -> Self {
        self.doc.operations.insert(name.into(), operation);
        self
    }

    pub fn components(mut self, components: Components) -> Self {
        self.doc.components = Some(components);
        self
    }

    pub fn build(self) -> AsyncApi {
        self.doc
    }
}

/// Builds an inline server.
#[derive(Clone, Debug, Default)]
pub struct ServerBuilder {
    server: Server,
}

impl ServerBuilder {
    pub fn new(host: impl Into<String>, protocol: impl Into<String>) -> Self {
        ServerBuilder {
            server: Server {
                host: Some(host.into()),
                protocol: Some(protocol.into()),
                ..Server::default()
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.server.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.server.description = Some(description.into());
        self
    }

    pub fn pathname(mut self, pathname: impl Into<String>) -> Self {
        self.server.pathname = Some(pathname.into());
        self
    }

    pub fn variable(mut self, name: impl Into<String>, variable: ServerVariable) -> Self {
        self.server.variables.insert(name.into(), variable);
        self
    }

    pub fn security(mut self, scheme: SecurityScheme) -> Self {
        self.server.security.push(scheme);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.server.tags.push(tag);
        self
    }

    pub fn binding(mut self, protocol: BindingProtocol, payload: Value) -> Self {
        self.server
            .bindings
            .get_or_insert_with(BindingCollection::default)
            .set(protocol, payload);
        self
    }

    pub fn build(self) -> Server {
        self.server
    }
}

/// Builds an inline channel.
#[derive(Clone, Debug, Default)]
pub struct ChannelBuilder {
    channel: Channel,
}

impl ChannelBuilder {
    pub fn new(address: impl Into<String>) -> Self {
        ChannelBuilder {
            channel: Channel {
                address: Some(address.into()),
                ..Channel::default()
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.channel.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.channel.description = Some(description.into());
        self
    }

    /// Declare a server exposing this channel, by reference.
    pub fn server_ref(mut self, reference: impl Into<String>) -> Self {
        self.channel.servers.push(Server::reference_to(reference));
        self
    }

    pub fn message(mut self, name: impl Into<String>, message: Message) -> Self {
        self.channel.messages.insert(name.into(), message);
        self
    }

    /// Declare a message by local name, pointing into `components/messages`.
    pub fn message_ref(
        mut self,
        name: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        self.channel
            .messages
            .insert(name.into(), Message::reference_to(reference));
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, parameter: Parameter) -> Self {
        self.channel.parameters.insert(name.into(), parameter);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.channel.tags.push(tag);
        self
    }

    pub fn binding(mut self, protocol: BindingProtocol, payload: Value) -> Self {
        self.channel
            .bindings
            .get_or_insert_with(BindingCollection::default)
            .set(protocol, payload);
        self
    }

    pub fn build(self) -> Channel {
        self.channel
    }
}

/// Builds an inline operation.
#[derive(Clone, Debug, Default)]
pub struct OperationBuilder {
    operation: Operation,
}

impl OperationBuilder {
    /// An operation always acts on exactly one channel, by reference.
    pub fn new(action: OperationAction, channel_ref: impl Into<String>) -> Self {
        OperationBuilder {
            operation: Operation {
                action: Some(action),
                channel: Some(Channel::reference_to(channel_ref)),
                ..Operation::default()
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.operation.title = Some(title.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.operation.summary = Some(summary.into());
        self
    }

    /// Reference one of the channel's messages,
    /// `#/channels/<channel>/messages/<name>`.
    pub fn message_ref(mut self, reference: impl Into<String>) -> Self {
        self.operation.messages.push(Message::reference_to(reference));
        self
    }

    pub fn with_trait(mut self, operation_trait: OperationTrait) -> Self {
        self.operation.traits.push(operation_trait);
        self
    }

    pub fn reply(mut self, reply: OperationReply) -> Self {
        self.operation.reply = Some(reply);
        self
    }

    pub fn security(mut self, scheme: SecurityScheme) -> Self {
        self.operation.security.push(scheme);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.operation.tags.push(tag);
        self
    }

    pub fn binding(mut self, protocol: BindingProtocol, payload: Value) -> Self {
        self.operation
            .bindings
            .get_or_insert_with(BindingCollection::default)
            .set(protocol, payload);
        self
    }

    pub fn build(self) -> Operation {
        self.operation
    }
}

/// Builds an inline message.
#[derive(Clone, Debug, Default)]
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    pub fn new() -> Self {
        MessageBuilder::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.message.name = Some(name.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.message.title = Some(title.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.message.content_type = Some(content_type.into());
        self
    }

    pub fn payload(mut self, schema: Value) -> Self {
        self.message.payload = Some(inline_schema(schema));
        self
    }

    pub fn payload_ref(mut self, reference: impl Into<String>) -> Self {
        self.message.payload = Some(Schema::reference_to(reference));
        self
    }

    pub fn headers(mut self, schema: Value) -> Self {
        self.message.headers = Some(inline_schema(schema));
        self
    }

    pub fn correlation_id(mut self, correlation_id: CorrelationId) -> Self {
        self.message.correlation_id = Some(correlation_id);
        self
    }

    pub fn with_trait(mut self, message_trait: MessageTrait) -> Self {
        self.message.traits.push(message_trait);
        self
    }

    pub fn example(mut self, example: MessageExample) -> Self {
        self.message.examples.push(example);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.message.tags.push(tag);
        self
    }

    pub fn binding(mut self, protocol: BindingProtocol, payload: Value) -> Self {
        self.message
            .bindings
            .get_or_insert_with(BindingCollection::default)
            .set(protocol, payload);
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}

/// Builds the components namespace.
#[derive(Clone, Debug, Default)]
pub struct ComponentsBuilder {
    components: Components,
}

macro_rules! components_setter {
    ($($name:ident: $ty:ty => $field:ident),+ $(,)?) => {
        $(pub fn $name(mut self, name: impl Into<String>, component: $ty) -> Self {
            self.components.$field.insert(name.into(), component);
            self
        })+
    };
}

impl ComponentsBuilder {
    pub fn new() -> Self {
        ComponentsBuilder::default()
    }

    components_setter!(
        server: Server => servers,
        channel: Channel => channels,
        operation: Operation => operations,
        schema: Schema => schemas,
        message: Message => messages,
        security_scheme: SecurityScheme => security_schemes,
        server_variable: ServerVariable => server_variables,
        parameter: Parameter => parameters,
        correlation_id: CorrelationId => correlation_ids,
        reply: OperationReply => replies,
        reply_address: OperationReplyAddress => reply_addresses,
        external_docs: ExternalDocumentation => external_docs,
        tag: Tag => tags,
        operation_trait: OperationTrait => operation_traits,
        message_trait: MessageTrait => message_traits,
        server_bindings: BindingCollection => server_bindings,
        channel_bindings: BindingCollection => channel_bindings,
        operation_bindings: BindingCollection => operation_bindings,
        message_bindings: BindingCollection => message_bindings,
    );

    pub fn build(self) -> Components {
        self.components
    }
}

fn inline_schema(value: Value) -> Schema {
    Schema {
        reference: None,
        schema: value.as_object().cloned().unwrap_or_default(),
    }
}
