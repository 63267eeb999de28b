//! Child-App Types - Shared data model for child-app resolution
//!
//! A *child app* is anything that can be embedded as a single step inside a
//! parent workflow graph: a plugin, a tool, a tool-set, or a plain
//! sub-application.
//!
//! ## Key Concepts
//!
//! - **Provenance**: where an identifier comes from (personal / community / commercial)
//! - **Graph**: the nodes, edges and chat configuration behind a child app
//! - **ChildApp**: the normalized form every resolution produces
//! - **PreviewNode**: the editor projection, with sockets
//! - **RuntimeDescriptor**: the execution projection, with the raw graph
//!
//! ## Sources
//!
//! - **AppDocument**: a team-owned, versioned workflow application
//! - **RegistryEntry**: a cataloged plugin, optionally backed by an owned document

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod app;
pub mod error;
pub mod graph;
pub mod io;
pub mod output;
pub mod provenance;

// Re-export main types
pub use app::{
    AppDocument, AppVersion, ChildApp, CustomizationRecord, PluginData, RegistryEntry,
    TemplateType, DEFAULT_NODE_VERSION,
};
pub use error::{ResolveError, ResolveResult};
pub use graph::{
    ChatConfig, ChatVariable, Edge, FlowNodeType, Graph, Node, VariableEnum, VariableInputType,
};
pub use io::{
    FlowNodeInput, FlowNodeOutput, HandleConfig, InputRenderType, NodeIoConfig, OutputType,
    SelectOption, ValueType,
};
pub use output::{PreviewNode, RuntimeDescriptor};
pub use provenance::{DecodedId, Provenance, SEPARATOR};
