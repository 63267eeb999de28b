//! Node inputs, outputs and handle visibility
//!
//! These shapes are what the workflow editor renders as sockets on a node.

use serde::{Deserialize, Serialize};

// ── Value and render types ───────────────────────────────────────────

/// Type of the value flowing through an input or output
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Object,
    ArrayString,
    ArrayNumber,
    ArrayObject,
    ChatHistory,
    #[default]
    Any,
    #[serde(untagged)]
    Other(String),
}

/// How the editor renders an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputRenderType {
    Reference,
    Input,
    Textarea,
    NumberInput,
    Switch,
    Select,
    JsonEditor,
    CustomVariable,
    FileSelect,
    Hidden,
    #[serde(untagged)]
    Other(String),
}

/// Output visibility class
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputType {
    #[default]
    Static,
    Dynamic,
    Source,
    Hidden,
}

/// One selectable value of a select input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

// ── Inputs and outputs ───────────────────────────────────────────────

/// Input socket of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNodeInput {
    pub key: String,

    #[serde(default)]
    pub render_type_list: Vec<InputRenderType>,

    #[serde(default)]
    pub value_type: ValueType,

    #[serde(default)]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_description: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list: Vec<SelectOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

impl FlowNodeInput {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        value_type: ValueType,
        render_type_list: Vec<InputRenderType>,
    ) -> Self {
        Self {
            key: key.into(),
            render_type_list,
            value_type,
            label: label.into(),
            debug_label: None,
            description: None,
            tool_description: None,
            required: false,
            value: None,
            can_edit: None,
            list: Vec::new(),
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = Some(value);
        self
    }
}

/// Output socket of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNodeOutput {
    pub id: String,
    pub key: String,

    #[serde(rename = "type", default)]
    pub output_type: OutputType,

    #[serde(default)]
    pub value_type: ValueType,

    #[serde(default)]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,
}

impl FlowNodeOutput {
    /// Static output whose id equals its key
    pub fn static_output(
        key: impl Into<String>,
        label: impl Into<String>,
        value_type: ValueType,
    ) -> Self {
        let key = key.into();
        Self {
            id: key.clone(),
            key,
            output_type: OutputType::Static,
            value_type,
            label: label.into(),
            description: None,
            required: false,
        }
    }
}

/// Inputs and outputs exposed by a node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeIoConfig {
    pub inputs: Vec<FlowNodeInput>,
    pub outputs: Vec<FlowNodeOutput>,
}

// ── Handles ──────────────────────────────────────────────────────────

/// Visibility of the four logical port positions of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleConfig {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl HandleConfig {
    pub fn new(left: bool, right: bool, top: bool, bottom: bool) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Every position visible
    pub fn open() -> Self {
        Self::new(true, true, true, true)
    }

    /// No position visible
    pub fn closed() -> Self {
        Self::new(false, false, false, false)
    }

    pub fn is_open(&self) -> bool {
        self.left && self.right && self.top && self.bottom
    }

    pub fn is_closed(&self) -> bool {
        !(self.left || self.right || self.top || self.bottom)
    }
}
