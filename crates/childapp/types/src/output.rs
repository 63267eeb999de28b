//! Public projections of a resolved child app
//!
//! [`PreviewNode`] feeds the workflow editor; [`RuntimeDescriptor`] feeds the
//! execution engine. They are independent: the runtime shape carries no
//! sockets and the preview shape carries no edges.

use crate::app::TemplateType;
use crate::graph::{Edge, FlowNodeType, Node};
use crate::io::{FlowNodeInput, FlowNodeOutput, HandleConfig};
use serde::{Deserialize, Serialize};

/// Node template placed into the editor graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewNode {
    /// Fresh id for this editor node instance
    pub id: String,
    /// Resolved child-app identity
    pub plugin_id: String,
    pub template_type: TemplateType,
    pub flow_node_type: FlowNodeType,
    pub avatar: String,
    pub name: String,
    pub intro: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_guide: Option<String>,

    pub show_status: bool,
    pub is_tool: bool,
    pub version: String,
    pub original_cost: f64,
    pub current_cost: f64,
    pub has_token_fee: bool,
    pub source_handle: HandleConfig,
    pub target_handle: HandleConfig,
    pub inputs: Vec<FlowNodeInput>,
    pub outputs: Vec<FlowNodeOutput>,
}

/// What the execution engine needs to run a child app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeDescriptor {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmb_id: Option<String>,

    pub name: String,
    pub avatar: String,
    pub show_status: bool,
    pub current_cost: f64,
    pub has_token_fee: bool,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}
