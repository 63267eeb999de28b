//! End-to-end resolution against the in-memory collaborators.

use async_trait::async_trait;
use childapp_resolver::{
    ChildAppResolver, DocumentStore, InMemoryCustomizationStore, InMemoryDocumentStore,
    InMemoryVersionStore, LoggingConfig, StaticPluginRegistry,
};
use childapp_types::{
    AppDocument, ChatConfig, ChatVariable, CustomizationRecord, FlowNodeInput, FlowNodeType,
    Graph, InputRenderType, Node, RegistryEntry, ResolveError, ResolveResult, TemplateType,
    ValueType, VariableInputType,
};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const PERSONAL_ID: &str = "64f1c0a2b3d4e5f6a7b8c9d0";
const LINKED_DOC_ID: &str = "65aa00bb11cc22dd33ee44ff";

struct Fixture {
    documents: Arc<InMemoryDocumentStore>,
    customizations: Arc<InMemoryCustomizationStore>,
    versions: Arc<InMemoryVersionStore>,
    registry: StaticPluginRegistry,
}

impl Fixture {
    fn new() -> Self {
        let _ = LoggingConfig {
            level: "debug".into(),
            json: false,
        }
        .init_tracing();

        let documents = Arc::new(InMemoryDocumentStore::new());
        let versions = Arc::new(InMemoryVersionStore::new());

        documents.insert(
            AppDocument::new(PERSONAL_ID, "team-personal", "tmb-personal", "Trip Planner")
                .with_draft(chat_app_graph("draft")),
        );
        versions.publish(PERSONAL_ID, "ver-1", chat_app_graph("first"));
        versions.publish(PERSONAL_ID, "ver-2", chat_app_graph("second"));

        documents.insert(AppDocument::new(
            LINKED_DOC_ID,
            "team-vendor",
            "tmb-vendor",
            "Vendor Search Workflow",
        ));
        versions.publish(LINKED_DOC_ID, "lv-1", plugin_graph("old"));
        versions.publish(LINKED_DOC_ID, "lv-2", plugin_graph("new"));

        let mut weather = RegistryEntry::new(
            "commercial-weather-tool",
            "Weather",
            Graph::new(
                vec![Node::new("weather", FlowNodeType::Tool).with_input(FlowNodeInput::new(
                    "city",
                    "City",
                    ValueType::String,
                    vec![InputRenderType::Input],
                ))],
                vec![],
            ),
        );
        weather.template_type = TemplateType::Tools;
        weather.version = "2.1".into();
        weather.current_cost = 0.5;
        weather.has_token_fee = true;

        let mut search = RegistryEntry::new(
            "commercial-licensed-search",
            "Licensed Search",
            plugin_graph("registry-static"),
        )
        .with_association(LINKED_DOC_ID);
        search.avatar = "core/app/search".into();
        search.intro = "Search licensed sources".into();
        search.template_type = TemplateType::Search;

        let unlicensed = RegistryEntry::new(
            "commercial-unlicensed-search",
            "Unlicensed Search",
            Graph::default(),
        )
        .with_association(LINKED_DOC_ID);

        let dangling = RegistryEntry::new(
            "community-dangling",
            "Dangling",
            Graph::default(),
        )
        .with_association("deleted-doc");

        let mail_kit = RegistryEntry::new(
            "community-mail-kit",
            "Mail Kit",
            Graph::new(vec![Node::new("kit", FlowNodeType::ToolSet)], vec![]),
        );

        let customizations = Arc::new(InMemoryCustomizationStore::new());
        customizations.insert(CustomizationRecord::new(
            "commercial-licensed-search",
            LINKED_DOC_ID,
        ));
        customizations.insert(CustomizationRecord::new("community-dangling", "deleted-doc"));

        Self {
            documents,
            customizations,
            versions,
            registry: StaticPluginRegistry::new(vec![weather, search, unlicensed, dangling, mail_kit]),
        }
    }

    fn resolver(&self) -> ChildAppResolver {
        ChildAppResolver::new(
            self.documents.clone(),
            Arc::new(self.registry.clone()),
            self.customizations.clone(),
            self.versions.clone(),
        )
    }
}

fn chat_app_graph(marker: &str) -> Graph {
    Graph::new(
        vec![
            Node::new("start", FlowNodeType::WorkflowStart),
            Node::new(marker, FlowNodeType::ChatNode),
        ],
        vec![],
    )
    .with_chat_config(ChatConfig {
        variables: vec![ChatVariable::new("budget", "Budget", VariableInputType::NumberInput)],
        ..Default::default()
    })
}

fn plugin_graph(marker: &str) -> Graph {
    Graph::new(
        vec![
            Node::new("in", FlowNodeType::PluginInput).with_input(FlowNodeInput::new(
                "query",
                "Query",
                ValueType::String,
                vec![InputRenderType::Reference],
            )),
            Node::new(marker, FlowNodeType::Other("datasetSearchNode".into())),
            Node::new("out", FlowNodeType::PluginOutput),
        ],
        vec![],
    )
}

// ---------------------------------------------------------------------------
// Personal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn personal_preview_uses_latest_published_version() {
    let fixture = Fixture::new();
    let node = fixture
        .resolver()
        .get_child_app_preview_node(PERSONAL_ID)
        .await
        .unwrap();

    assert_eq!(node.plugin_id, PERSONAL_ID);
    assert_eq!(node.flow_node_type, FlowNodeType::AppModule);
    assert_eq!(node.template_type, TemplateType::TeamApp);
    assert_eq!(node.version, "ver-2");
    assert_eq!(node.current_cost, 0.0);
    assert!(!node.has_token_fee);
    assert!(node.is_tool);
    assert!(node.source_handle.is_open());
    assert!(node.target_handle.is_open());

    let keys: Vec<_> = node.inputs.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(keys, vec!["history", "userChatInput", "budget"]);
}

#[tokio::test]
async fn personal_missing_document_is_not_found() {
    let fixture = Fixture::new();
    let err = fixture
        .resolver()
        .get_child_app_preview_node("ffffffffffffffffffffffff")
        .await
        .unwrap_err();
    assert_eq!(err, ResolveError::NotFound("ffffffffffffffffffffffff".into()));
}

#[tokio::test]
async fn personal_runtime_pins_requested_version() {
    let fixture = Fixture::new();
    let runtime = fixture
        .resolver()
        .get_child_app_runtime_by_id(PERSONAL_ID, Some("ver-1"))
        .await
        .unwrap();

    assert_eq!(runtime.id, PERSONAL_ID);
    assert_eq!(runtime.team_id.as_deref(), Some("team-personal"));
    assert_eq!(runtime.tmb_id.as_deref(), Some("tmb-personal"));
    assert_eq!(runtime.nodes[1].node_id, "first");
}

#[tokio::test]
async fn personal_runtime_without_token_matches_explicit_latest() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver();

    let implicit = resolver
        .get_child_app_runtime_by_id(PERSONAL_ID, None)
        .await
        .unwrap();
    let explicit = resolver
        .get_child_app_runtime_by_id(PERSONAL_ID, Some("ver-2"))
        .await
        .unwrap();

    assert_eq!(implicit.nodes, explicit.nodes);
    assert_eq!(implicit.edges, explicit.edges);
}

#[tokio::test]
async fn personal_tagged_identifier_routes_to_document() {
    let fixture = Fixture::new();
    let app = fixture
        .resolver()
        .resolve_preview(&format!("personal-{PERSONAL_ID}"))
        .await
        .unwrap();
    assert_eq!(app.id, PERSONAL_ID);
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[tokio::test]
async fn registry_entry_without_association_is_returned_verbatim() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver();

    let node = resolver
        .get_child_app_preview_node("commercial-weather-tool")
        .await
        .unwrap();
    assert_eq!(node.flow_node_type, FlowNodeType::Tool);
    assert_eq!(node.template_type, TemplateType::Tools);
    assert_eq!(node.version, "2.1");
    assert_eq!(node.inputs[0].key, "city");
    assert!(node.has_token_fee);

    let runtime = resolver
        .get_child_app_runtime_by_id("commercial-weather-tool", None)
        .await
        .unwrap();
    assert_eq!(runtime.team_id, None);
    assert_eq!(runtime.tmb_id, None);
    assert_eq!(runtime.nodes[0].node_id, "weather");
    assert_eq!(runtime.current_cost, 0.5);
}

#[tokio::test]
async fn registry_miss_is_unauthorized() {
    let fixture = Fixture::new();
    let err = fixture
        .resolver()
        .get_child_app_preview_node("community-nope")
        .await
        .unwrap_err();
    assert_eq!(err, ResolveError::Unauthorized("community-nope".into()));
}

#[tokio::test]
async fn associated_entry_overlays_document_ownership_and_graph() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver();

    let app = resolver
        .resolve_preview("commercial-licensed-search")
        .await
        .unwrap();
    assert_eq!(app.name, "Licensed Search");
    assert_eq!(app.avatar, "core/app/search");
    assert_eq!(app.intro, "Search licensed sources");
    assert_eq!(app.template_type, TemplateType::Search);
    assert_eq!(app.team_id.as_deref(), Some("team-vendor"));
    assert_eq!(app.tmb_id.as_deref(), Some("tmb-vendor"));
    assert_eq!(app.version, "lv-2");
    assert_eq!(app.workflow.nodes[1].node_id, "new");

    let pinned = resolver
        .resolve_runtime("commercial-licensed-search", Some("lv-1"))
        .await
        .unwrap();
    assert_eq!(pinned.version, "lv-1");
    assert_eq!(pinned.workflow.nodes[1].node_id, "old");

    let node = resolver
        .get_child_app_preview_node("commercial-licensed-search")
        .await
        .unwrap();
    assert_eq!(node.flow_node_type, FlowNodeType::PluginModule);
    assert_eq!(node.inputs[0].can_edit, Some(false));
}

#[tokio::test]
async fn association_without_customization_is_unauthorized() {
    let fixture = Fixture::new();
    let err = fixture
        .resolver()
        .get_child_app_runtime_by_id("commercial-unlicensed-search", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::Unauthorized(_)));
}

#[tokio::test]
async fn association_with_missing_document_is_unauthorized() {
    let fixture = Fixture::new();
    let err = fixture
        .resolver()
        .get_child_app_preview_node("community-dangling")
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::Unauthorized(_)));
}

#[tokio::test]
async fn tool_set_preview_has_closed_handles() {
    let fixture = Fixture::new();
    let node = fixture
        .resolver()
        .get_child_app_preview_node("community-mail-kit")
        .await
        .unwrap();

    assert_eq!(node.flow_node_type, FlowNodeType::ToolSet);
    assert!(node.source_handle.is_closed());
    assert!(node.target_handle.is_closed());
    assert!(node.is_tool);
}

// ---------------------------------------------------------------------------
// Collaborator failures
// ---------------------------------------------------------------------------

struct FailingDocumentStore;

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn find_owned_document_by_id(&self, _id: &str) -> ResolveResult<Option<AppDocument>> {
        Err(ResolveError::Backend("connection reset".into()))
    }
}

#[tokio::test]
async fn backend_errors_propagate() {
    let fixture = Fixture::new();
    let resolver = ChildAppResolver::new(
        Arc::new(FailingDocumentStore),
        Arc::new(fixture.registry.clone()),
        fixture.customizations.clone(),
        fixture.versions.clone(),
    );

    let err = resolver.resolve_preview(PERSONAL_ID).await.unwrap_err();
    assert_eq!(err.kind(), "backend");

    // Registry entries without an association never touch the document store.
    assert!(resolver
        .resolve_preview("commercial-weather-tool")
        .await
        .is_ok());
}

#[tokio::test]
async fn concurrent_resolutions_are_independent() {
    let fixture = Fixture::new();
    let resolver = Arc::new(fixture.resolver());

    let mut handles = Vec::new();
    for id in [
        PERSONAL_ID,
        "commercial-weather-tool",
        "commercial-licensed-search",
        "community-mail-kit",
    ] {
        let resolver = resolver.clone();
        handles.push(tokio::spawn(async move {
            resolver.get_child_app_preview_node(id).await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
}
