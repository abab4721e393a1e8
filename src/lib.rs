//! AsyncAPI v3 document graphs: model, build, dereference, validate.
//!
//! This crate models [AsyncAPI](https://www.asyncapi.com/) v3 specification
//! documents as an in-memory graph and provides a complete pipeline for
//! working with them:
//!
//! ```text
//! parse(yaml) → AsyncApi → validate(doc) → ValidationResult
//!             → dereference(doc, "#/...") → Component
//!             → serialize(doc) → yaml
//! ```
//!
//! The heart of the crate is reference resolution: any component may be
//! either an inline definition or a `$ref`-style pointer to a component of
//! the same kind elsewhere in the document. The [`dereference`] module
//! resolves such pointers — single-hop, pure, identity-preserving — and the
//! [`validate`] module composes those resolutions into cross-cutting
//! structural rules (for example, an operation's messages must belong to
//! the channel the operation targets).
//!
//! # Quick Start
//!
//! ```rust
//! let yaml = r##"
//! asyncapi: 3.0.0
//! info:
//!   title: Greeting API
//!   version: 1.0.0
//! channels:
//!   greetings:
//!     address: greetings
//!     servers:
//!       - $ref: "#/components/servers/core"
//!     messages:
//!       hello:
//!         $ref: "#/components/messages/hello"
//! operations:
//!   publishGreeting:
//!     action: send
//!     channel:
//!       $ref: "#/channels/greetings"
//!     messages:
//!       - $ref: "#/channels/greetings/messages/hello"
//! components:
//!   servers:
//!     core:
//!       host: core.example.com
//!       protocol: amqp
//!   messages:
//!     hello:
//!       name: hello
//!       payload:
//!         type: object
//! "##;
//!
//! let result = asyncapi_graph::load(yaml).expect("valid document");
//! let server =
//!     asyncapi_graph::dereference::dereference_server(&result.document, "#/components/servers/core")
//!         .expect("resolvable");
//! assert_eq!(server.protocol.as_deref(), Some("amqp"));
//! ```
//!
//! Validation never fails fast and never panics on data-shape problems: a
//! full pass accumulates every violation with the field path it belongs to,
//! so one run yields a complete diagnostic report.

pub mod builder;
pub mod dereference;
pub mod enums;
pub mod error;
pub mod expression;
pub mod parse;
pub mod reference;
pub mod serialize;
pub mod types;
pub mod validate;

pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use parse::parse;
pub use serialize::serialize;
pub use validate::validate;

/// Result of the [`load`] convenience entry point.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed document.
    pub document: AsyncApi,
}

/// Convenience entry point composing parse → validate.
///
/// Returns the document on success; returns all errors (parse or
/// validation) on failure.
///
/// # Errors
///
/// Returns `Err(Vec<AsyncApiError>)` if parsing fails or validation finds
/// violations.
pub fn load(input: &str) -> Result<LoadResult, Vec<AsyncApiError>> {
    let doc = parse::parse(input).map_err(|e| vec![AsyncApiError::Parse(e)])?;

    let result = validate::validate(&doc);
    if !result.errors.is_empty() {
        return Err(result
            .errors
            .into_iter()
            .map(AsyncApiError::Validation)
            .collect());
    }

    Ok(LoadResult { document: doc })
}
