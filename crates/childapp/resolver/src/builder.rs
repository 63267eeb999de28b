//! Projections of a resolved [`ChildApp`]

use crate::classify::classify;
use crate::sockets::derive_sockets;
use childapp_types::{ChildApp, PreviewNode, RuntimeDescriptor};
use uuid::Uuid;

/// Build the editor node for a child app.
///
/// The id is fresh on every call: each preview is a new node instance in the
/// editor graph.
pub fn build_preview_node(app: ChildApp) -> PreviewNode {
    let kind = classify(&app.workflow);
    let sockets = derive_sockets(kind, &app.workflow);

    tracing::debug!(plugin_id = %app.id, ?kind, "Classified child app");

    PreviewNode {
        id: Uuid::new_v4().simple().to_string(),
        plugin_id: app.id,
        template_type: app.template_type,
        flow_node_type: kind.flow_node_type(),
        avatar: app.avatar,
        name: app.name,
        intro: app.intro,
        course_url: app.course_url,
        user_guide: app.user_guide,
        show_status: app.show_status,
        is_tool: true,
        version: app.version,
        original_cost: app.original_cost,
        current_cost: app.current_cost,
        has_token_fee: app.has_token_fee,
        source_handle: sockets.source_handle,
        target_handle: sockets.target_handle,
        inputs: sockets.io.inputs,
        outputs: sockets.io.outputs,
    }
}

/// Build the execution-engine view of a child app
pub fn build_runtime_descriptor(app: ChildApp) -> RuntimeDescriptor {
    RuntimeDescriptor {
        id: app.id,
        team_id: app.team_id,
        tmb_id: app.tmb_id,
        name: app.name,
        avatar: app.avatar,
        show_status: app.show_status,
        current_cost: app.current_cost,
        has_token_fee: app.has_token_fee,
        nodes: app.workflow.nodes,
        edges: app.workflow.edges,
    }
}
