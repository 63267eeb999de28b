//! Socket contracts per child-app kind
//!
//! Each kind reads its inputs and outputs from a different place:
//! - tool-set / tool: the single node's own sockets
//! - plugin: the plugin-input node's inputs and the plugin-output node's inputs
//! - plain: the chat configuration, never the nodes

use crate::classify::NodeKind;
use childapp_types::{
    ChatConfig, ChatVariable, FlowNodeInput, FlowNodeOutput, FlowNodeType, Graph, HandleConfig,
    InputRenderType, Node, NodeIoConfig, SelectOption, ValueType, VariableInputType,
};

/// Key of the chat-history input and output
pub const HISTORY_KEY: &str = "history";
/// Key of the user-question input
pub const USER_CHAT_INPUT_KEY: &str = "userChatInput";
/// Key of the answer-text output
pub const ANSWER_TEXT_KEY: &str = "answerText";

/// Sockets of a preview node
#[derive(Debug, Clone, PartialEq)]
pub struct SocketConfig {
    pub io: NodeIoConfig,
    pub source_handle: HandleConfig,
    pub target_handle: HandleConfig,
}

/// Compute the socket contract for a classified graph
pub fn derive_sockets(kind: NodeKind, graph: &Graph) -> SocketConfig {
    let io = match kind {
        NodeKind::ToolSet => tool_set_data_io(&graph.nodes),
        NodeKind::Tool => tool_data_io(&graph.nodes),
        NodeKind::Plugin => plugin_data_io(&graph.nodes),
        NodeKind::Plain => app_data_io(graph.chat_config.as_ref()),
    };

    let handles = match kind {
        NodeKind::ToolSet => HandleConfig::closed(),
        NodeKind::Tool | NodeKind::Plugin | NodeKind::Plain => HandleConfig::open(),
    };

    SocketConfig {
        io,
        source_handle: handles,
        target_handle: handles,
    }
}

fn sockets_of(nodes: &[Node], flow_node_type: FlowNodeType) -> NodeIoConfig {
    nodes
        .iter()
        .find(|n| n.flow_node_type == flow_node_type)
        .map(|n| NodeIoConfig {
            inputs: n.inputs.clone(),
            outputs: n.outputs.clone(),
        })
        .unwrap_or_default()
}

/// Sockets of the tool-set node
pub fn tool_set_data_io(nodes: &[Node]) -> NodeIoConfig {
    sockets_of(nodes, FlowNodeType::ToolSet)
}

/// Sockets of the tool node
pub fn tool_data_io(nodes: &[Node]) -> NodeIoConfig {
    sockets_of(nodes, FlowNodeType::Tool)
}

/// Plugin inputs are locked copies of the plugin-input node's inputs; outputs
/// mirror what the plugin-output node collects.
pub fn plugin_data_io(nodes: &[Node]) -> NodeIoConfig {
    let find = |t: FlowNodeType| nodes.iter().find(|n| n.flow_node_type == t);

    let inputs: Vec<FlowNodeInput> = find(FlowNodeType::PluginInput)
        .map(|node| node.inputs.iter().map(lock_plugin_input).collect())
        .unwrap_or_default();

    let outputs: Vec<FlowNodeOutput> = find(FlowNodeType::PluginOutput)
        .map(|node| {
            node.inputs
                .iter()
                .map(|input| {
                    let label = if input.label.is_empty() {
                        input.key.clone()
                    } else {
                        input.label.clone()
                    };
                    let mut output = FlowNodeOutput::static_output(
                        input.key.clone(),
                        label,
                        input.value_type.clone(),
                    );
                    output.description = input.description.clone();
                    output
                })
                .collect()
        })
        .unwrap_or_default();

    NodeIoConfig { inputs, outputs }
}

fn lock_plugin_input(input: &FlowNodeInput) -> FlowNodeInput {
    let mut locked = input.clone();
    locked.can_edit = Some(false);
    if locked.value.is_none() {
        locked.value = initial_value(&input.value_type);
    }
    if input.render_type_list.first() == Some(&InputRenderType::CustomVariable) {
        locked.render_type_list = vec![InputRenderType::Reference, InputRenderType::Input];
    }
    locked
}

/// Editor value for an input that has none stored yet
fn initial_value(value_type: &ValueType) -> Option<serde_json::Value> {
    match value_type {
        ValueType::Boolean => Some(serde_json::Value::Bool(false)),
        ValueType::Number => Some(serde_json::json!(0)),
        ValueType::String => Some(serde_json::Value::String(String::new())),
        _ => None,
    }
}

/// Sockets of a plain app, from its chat configuration alone
pub fn app_data_io(chat_config: Option<&ChatConfig>) -> NodeIoConfig {
    let mut inputs = vec![history_input(), user_chat_input()];
    if let Some(config) = chat_config {
        inputs.extend(config.variables.iter().map(variable_input));
    }

    let mut history = FlowNodeOutput::static_output(
        HISTORY_KEY,
        "New context",
        ValueType::ChatHistory,
    );
    history.description = Some("Chat history with this round's reply appended".to_string());
    history.required = true;

    let outputs = vec![
        history,
        FlowNodeOutput::static_output(ANSWER_TEXT_KEY, "AI reply", ValueType::String),
    ];

    NodeIoConfig { inputs, outputs }
}

fn history_input() -> FlowNodeInput {
    let mut input = FlowNodeInput::new(
        HISTORY_KEY,
        "Chat history",
        ValueType::ChatHistory,
        vec![InputRenderType::NumberInput, InputRenderType::Reference],
    )
    .with_description("Number of previous turns passed to the app")
    .with_value(serde_json::json!(6));
    input.min = Some(0);
    input.max = Some(50);
    input
}

fn user_chat_input() -> FlowNodeInput {
    let mut input = FlowNodeInput::new(
        USER_CHAT_INPUT_KEY,
        "User question",
        ValueType::String,
        vec![InputRenderType::Reference, InputRenderType::Textarea],
    )
    .required();
    input.tool_description = Some("User question".to_string());
    input
}

fn variable_input(variable: &ChatVariable) -> FlowNodeInput {
    let render_type_list = match &variable.variable_type {
        VariableInputType::Input | VariableInputType::Custom => {
            vec![InputRenderType::Input, InputRenderType::Reference]
        }
        VariableInputType::Textarea => {
            vec![InputRenderType::Textarea, InputRenderType::Reference]
        }
        VariableInputType::NumberInput => vec![InputRenderType::NumberInput],
        VariableInputType::Select => vec![InputRenderType::Select],
        VariableInputType::Other(_) => vec![InputRenderType::Reference],
    };

    let mut input = FlowNodeInput::new(
        variable.key.clone(),
        variable.label.clone(),
        ValueType::Any,
        render_type_list,
    );
    input.debug_label = Some(variable.label.clone());
    input.description = Some(String::new());
    input.required = variable.required;
    input.list = variable
        .enums
        .iter()
        .map(|e| SelectOption {
            label: e.value.clone(),
            value: e.value.clone(),
        })
        .collect();
    input
}
