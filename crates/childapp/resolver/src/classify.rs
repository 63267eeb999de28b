//! Graph classification
//!
//! Decides how a child app behaves from the shape of its node set. Only node
//! type tags and the node count are read; edges never are.

use childapp_types::{FlowNodeType, Graph};
use serde::{Deserialize, Serialize};

/// Behavioral kind of a child app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// Plain sub-application; sockets come from its chat configuration
    Plain,
    /// Plugin with a plugin-input node
    Plugin,
    /// Single tool node
    Tool,
    /// Single tool-set node
    ToolSet,
}

impl NodeKind {
    /// Node type the editor uses for a child app of this kind
    pub fn flow_node_type(&self) -> FlowNodeType {
        match self {
            NodeKind::Plain => FlowNodeType::AppModule,
            NodeKind::Plugin => FlowNodeType::PluginModule,
            NodeKind::Tool => FlowNodeType::Tool,
            NodeKind::ToolSet => FlowNodeType::ToolSet,
        }
    }
}

/// Classify a graph. First matching rule wins:
///
/// 1. exactly one node, typed tool-set
/// 2. exactly one node, typed tool
/// 3. any node typed plugin-input, whatever the count
/// 4. plain
///
/// Rules 1 and 2 cannot both match: a lone node carries a single type tag.
/// They must still run before rule 3 so a lone tool-set or tool node is never
/// read as a plugin. A lone plugin-input node falls through both and lands on
/// rule 3. New node types must keep these checks keyed on the exact tags.
pub fn classify(graph: &Graph) -> NodeKind {
    let single = match graph.nodes.as_slice() {
        [only] => Some(&only.flow_node_type),
        _ => None,
    };

    match single {
        Some(FlowNodeType::ToolSet) => NodeKind::ToolSet,
        Some(FlowNodeType::Tool) => NodeKind::Tool,
        _ if graph.has_node_type(&FlowNodeType::PluginInput) => NodeKind::Plugin,
        _ => NodeKind::Plain,
    }
}
