//! Workflow graphs behind child apps
//!
//! A graph is an ordered list of nodes, an ordered list of edges, and an
//! optional chat configuration. Only the node type tags matter for
//! classification; edges are carried through untouched.

use crate::io::{FlowNodeInput, FlowNodeOutput};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Nodes ────────────────────────────────────────────────────────────

/// Behavioral type tag of a workflow node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowNodeType {
    PluginInput,
    PluginOutput,
    Tool,
    ToolSet,
    PluginModule,
    AppModule,
    WorkflowStart,
    ChatNode,
    /// Any tag this crate does not interpret
    #[serde(untagged)]
    Other(String),
}

/// A node in a workflow graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub node_id: String,

    #[serde(default)]
    pub name: String,

    pub flow_node_type: FlowNodeType,

    #[serde(default)]
    pub inputs: Vec<FlowNodeInput>,

    #[serde(default)]
    pub outputs: Vec<FlowNodeOutput>,
}

impl Node {
    pub fn new(node_id: impl Into<String>, flow_node_type: FlowNodeType) -> Self {
        Self {
            node_id: node_id.into(),
            name: String::new(),
            flow_node_type,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_input(mut self, input: FlowNodeInput) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn with_output(mut self, output: FlowNodeOutput) -> Self {
        self.outputs.push(output);
        self
    }
}

/// A connection between two node handles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub source_handle: String,
    #[serde(default)]
    pub target_handle: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            source_handle: format!("{source}-source-right"),
            target_handle: format!("{target}-target-left"),
            source,
            target,
        }
    }
}

// ── Chat configuration ───────────────────────────────────────────────

/// Kind of a conversation-level variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableInputType {
    Input,
    Textarea,
    NumberInput,
    Select,
    Custom,
    #[serde(untagged)]
    Other(String),
}

/// One value of a select variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableEnum {
    pub value: String,
}

/// Conversation-level variable declared by a plain application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatVariable {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub variable_type: VariableInputType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub enums: Vec<VariableEnum>,
}

impl ChatVariable {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        variable_type: VariableInputType,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            variable_type,
            required: false,
            enums: Vec::new(),
        }
    }
}

/// Top-level conversation settings of an application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatConfig {
    #[serde(default)]
    pub variables: Vec<ChatVariable>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome_text: Option<String>,

    /// Settings this crate passes through without reading
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

// ── Graph ────────────────────────────────────────────────────────────

/// Nodes, edges and chat configuration of a child app
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,

    #[serde(default)]
    pub edges: Vec<Edge>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_config: Option<ChatConfig>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            chat_config: None,
        }
    }

    pub fn with_chat_config(mut self, chat_config: ChatConfig) -> Self {
        self.chat_config = Some(chat_config);
        self
    }

    /// First node carrying the given type tag
    pub fn find_node(&self, flow_node_type: &FlowNodeType) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| &n.flow_node_type == flow_node_type)
    }

    pub fn has_node_type(&self, flow_node_type: &FlowNodeType) -> bool {
        self.find_node(flow_node_type).is_some()
    }
}
