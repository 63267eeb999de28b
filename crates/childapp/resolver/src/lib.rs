//! Child-App Resolver
//!
//! Resolves a combined child-app identifier into an editor preview node or a
//! runtime descriptor:
//!
//! ```text
//! decode ──► route (document store | plugin registry) ──► version
//!        ──► classify ──► derive sockets ──► preview | runtime
//! ```
//!
//! - [`codec`]: combined identifier layout
//! - [`router`]: provenance routing and version selection
//! - [`classify`]: behavioral kind from graph shape
//! - [`sockets`]: socket contract per kind
//! - [`builder`]: the two output projections
//! - [`store`]: collaborator traits; [`memory`] has in-memory implementations
//!
//! Nothing is cached: every call re-reads its sources.
//!
//! # Example
//!
//! ```rust
//! use childapp_resolver::memory::*;
//! use childapp_resolver::ChildAppResolver;
//! use childapp_types::{FlowNodeType, Graph, Node, RegistryEntry};
//! use std::sync::Arc;
//!
//! # async fn run() -> childapp_types::ResolveResult<()> {
//! let weather = RegistryEntry::new(
//!     "commercial-weather-tool",
//!     "Weather",
//!     Graph::new(vec![Node::new("tool", FlowNodeType::Tool)], vec![]),
//! );
//!
//! let resolver = ChildAppResolver::new(
//!     Arc::new(InMemoryDocumentStore::new()),
//!     Arc::new(StaticPluginRegistry::new(vec![weather])),
//!     Arc::new(InMemoryCustomizationStore::new()),
//!     Arc::new(InMemoryVersionStore::new()),
//! );
//!
//! let node = resolver
//!     .get_child_app_preview_node("commercial-weather-tool")
//!     .await?;
//! assert_eq!(node.flow_node_type, FlowNodeType::Tool);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod builder;
pub mod classify;
pub mod codec;
pub mod config;
pub mod error;
pub mod memory;
pub mod router;
pub mod sockets;
pub mod store;

// Re-exports
pub use builder::{build_preview_node, build_runtime_descriptor};
pub use classify::{classify, NodeKind};
pub use codec::decode;
pub use self::config::{LoggingConfig, ResolverConfig};
pub use error::{ConfigError, ConfigResult};
pub use memory::{
    InMemoryCustomizationStore, InMemoryDocumentStore, InMemoryVersionStore, StaticPluginRegistry,
};
pub use router::{ChildAppResolver, ResolveMode};
pub use sockets::{derive_sockets, SocketConfig};
pub use store::{CustomizationStore, DocumentStore, PluginRegistry, VersionResolver};
