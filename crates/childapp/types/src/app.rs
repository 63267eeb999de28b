//! Child-app sources and the normalized resolution result
//!
//! Two sources feed a [`ChildApp`]:
//! - [`AppDocument`]: team-owned application whose graph lives in versions
//! - [`RegistryEntry`]: cataloged plugin with its own static graph, optionally
//!   a facade over an [`AppDocument`]

use crate::graph::{ChatConfig, Edge, Graph, Node};
use serde::{Deserialize, Serialize};

/// Node version assumed when a document does not declare one
pub const DEFAULT_NODE_VERSION: &str = "481";

/// Template classification shown in the editor's node library
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateType {
    SystemInput,
    Ai,
    Function,
    Tools,
    Search,
    Multimodal,
    Communication,
    #[default]
    Other,
    TeamApp,
}

// ── Owned documents ──────────────────────────────────────────────────

/// Plugin-specific settings on an owned document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_version: Option<String>,
}

/// Team-owned application as stored in the document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDocument {
    pub id: String,
    pub team_id: String,
    pub tmb_id: String,
    pub name: String,

    #[serde(default)]
    pub avatar: String,

    #[serde(default)]
    pub intro: String,

    /// Draft graph, used when no version has been published
    #[serde(default)]
    pub modules: Vec<Node>,

    #[serde(default)]
    pub edges: Vec<Edge>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_config: Option<ChatConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_data: Option<PluginData>,
}

impl AppDocument {
    pub fn new(
        id: impl Into<String>,
        team_id: impl Into<String>,
        tmb_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            team_id: team_id.into(),
            tmb_id: tmb_id.into(),
            name: name.into(),
            avatar: String::new(),
            intro: String::new(),
            modules: Vec::new(),
            edges: Vec::new(),
            chat_config: None,
            plugin_data: None,
        }
    }

    pub fn with_draft(mut self, graph: Graph) -> Self {
        self.modules = graph.nodes;
        self.edges = graph.edges;
        self.chat_config = graph.chat_config;
        self
    }

    pub fn with_node_version(mut self, node_version: impl Into<String>) -> Self {
        self.plugin_data = Some(PluginData {
            node_version: Some(node_version.into()),
        });
        self
    }

    /// Declared plugin node version, if any
    pub fn node_version(&self) -> Option<&str> {
        self.plugin_data
            .as_ref()
            .and_then(|p| p.node_version.as_deref())
    }
}

/// A concrete version of an owned document's graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppVersion {
    /// Absent when the resolver could not pin a version
    pub version_id: Option<String>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub chat_config: Option<ChatConfig>,
}

impl AppVersion {
    pub fn into_graph(self) -> Graph {
        Graph {
            nodes: self.nodes,
            edges: self.edges,
            chat_config: self.chat_config,
        }
    }
}

// ── Registry ─────────────────────────────────────────────────────────

/// Plugin cataloged in the static registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    /// Full combined id, prefix included (e.g. `commercial-weather-tool`)
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub avatar: String,

    #[serde(default)]
    pub intro: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_guide: Option<String>,

    #[serde(default)]
    pub template_type: TemplateType,

    #[serde(default)]
    pub show_status: bool,

    #[serde(default)]
    pub workflow: Graph,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub original_cost: f64,

    #[serde(default)]
    pub current_cost: f64,

    #[serde(default)]
    pub has_token_fee: bool,

    #[serde(default)]
    pub plugin_order: i32,

    /// Owned document this entry fronts, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_plugin_id: Option<String>,
}

impl RegistryEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, workflow: Graph) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: String::new(),
            intro: String::new(),
            course_url: None,
            user_guide: None,
            template_type: TemplateType::default(),
            show_status: false,
            workflow,
            version: String::new(),
            original_cost: 0.0,
            current_cost: 0.0,
            has_token_fee: false,
            plugin_order: 0,
            associated_plugin_id: None,
        }
    }

    pub fn with_association(mut self, associated_plugin_id: impl Into<String>) -> Self {
        self.associated_plugin_id = Some(associated_plugin_id.into());
        self
    }
}

/// Persisted record that authorizes a registry entry to front an owned document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationRecord {
    pub plugin_id: String,
    pub associated_plugin_id: String,
}

impl CustomizationRecord {
    pub fn new(plugin_id: impl Into<String>, associated_plugin_id: impl Into<String>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            associated_plugin_id: associated_plugin_id.into(),
        }
    }
}

// ── Normalized result ────────────────────────────────────────────────

/// Normalized child app, built fresh by every resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildApp {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmb_id: Option<String>,

    pub name: String,
    pub avatar: String,
    pub intro: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_guide: Option<String>,

    pub workflow: Graph,
    pub version: String,
    pub original_cost: f64,
    pub current_cost: f64,
    pub has_token_fee: bool,
    pub template_type: TemplateType,
    pub plugin_order: i32,
    pub show_status: bool,
}

impl From<RegistryEntry> for ChildApp {
    fn from(entry: RegistryEntry) -> Self {
        Self {
            id: entry.id,
            team_id: None,
            tmb_id: None,
            name: entry.name,
            avatar: entry.avatar,
            intro: entry.intro,
            course_url: entry.course_url,
            user_guide: entry.user_guide,
            workflow: entry.workflow,
            version: entry.version,
            original_cost: entry.original_cost,
            current_cost: entry.current_cost,
            has_token_fee: entry.has_token_fee,
            template_type: entry.template_type,
            plugin_order: entry.plugin_order,
            show_status: entry.show_status,
        }
    }
}
