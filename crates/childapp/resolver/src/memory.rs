//! In-memory implementations of the collaborator traits
//!
//! These are suitable for development and testing. Production deployments
//! should back the traits with their document database and version history.

use crate::error::ConfigResult;
use crate::store::{CustomizationStore, DocumentStore, PluginRegistry, VersionResolver};
use async_trait::async_trait;
use childapp_types::{
    AppDocument, AppVersion, CustomizationRecord, Graph, RegistryEntry, ResolveResult,
};
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory owned-document store
pub struct InMemoryDocumentStore {
    documents: DashMap<String, AppDocument>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Insert or replace a document
    pub fn insert(&self, document: AppDocument) {
        self.documents.insert(document.id.clone(), document);
    }

    pub fn remove(&self, id: &str) -> Option<AppDocument> {
        self.documents.remove(id).map(|(_, d)| d)
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find_owned_document_by_id(&self, id: &str) -> ResolveResult<Option<AppDocument>> {
        Ok(self.documents.get(id).map(|d| d.clone()))
    }
}

/// Static plugin registry, fixed at construction
#[derive(Debug, Clone, Default)]
pub struct StaticPluginRegistry {
    entries: Arc<Vec<RegistryEntry>>,
}

impl StaticPluginRegistry {
    pub fn new(entries: Vec<RegistryEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Load a catalog from a JSON array of entries
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let entries: Vec<RegistryEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl PluginRegistry for StaticPluginRegistry {
    async fn list_registry_entries(&self) -> ResolveResult<Vec<RegistryEntry>> {
        Ok(self.entries.as_ref().clone())
    }

    async fn find_entry(&self, id: &str) -> ResolveResult<Option<RegistryEntry>> {
        Ok(self.entries.iter().find(|e| e.id == id).cloned())
    }
}

/// In-memory customization record store
pub struct InMemoryCustomizationStore {
    records: DashMap<(String, String), CustomizationRecord>,
}

impl InMemoryCustomizationStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn insert(&self, record: CustomizationRecord) {
        let key = (
            record.plugin_id.clone(),
            record.associated_plugin_id.clone(),
        );
        self.records.insert(key, record);
    }
}

impl Default for InMemoryCustomizationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomizationStore for InMemoryCustomizationStore {
    async fn find_customization(
        &self,
        registry_id: &str,
        associated_id: &str,
    ) -> ResolveResult<Option<CustomizationRecord>> {
        let key = (registry_id.to_string(), associated_id.to_string());
        Ok(self.records.get(&key).map(|r| r.clone()))
    }
}

/// A stored version of an owned document
#[derive(Debug, Clone)]
struct StoredVersion {
    version_id: String,
    is_publish: bool,
    graph: Graph,
}

/// In-memory version history
///
/// Versions are kept in insertion order per app. Latest means the most
/// recently added *published* version; with none published, the document's
/// draft graph is used and its node version stands in as the identifier.
pub struct InMemoryVersionStore {
    versions: DashMap<String, Vec<StoredVersion>>,
}

impl InMemoryVersionStore {
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    /// Record a published version
    pub fn publish(&self, app_id: &str, version_id: impl Into<String>, graph: Graph) {
        self.push(app_id, version_id.into(), true, graph);
    }

    /// Record an unpublished version; reachable only by explicit id
    pub fn save_draft(&self, app_id: &str, version_id: impl Into<String>, graph: Graph) {
        self.push(app_id, version_id.into(), false, graph);
    }

    fn push(&self, app_id: &str, version_id: String, is_publish: bool, graph: Graph) {
        self.versions
            .entry(app_id.to_string())
            .or_default()
            .push(StoredVersion {
                version_id,
                is_publish,
                graph,
            });
    }

    fn find<F>(&self, app_id: &str, predicate: F) -> Option<StoredVersion>
    where
        F: Fn(&StoredVersion) -> bool,
    {
        self.versions
            .get(app_id)
            .and_then(|versions| versions.iter().rev().find(|v| predicate(v)).cloned())
    }
}

impl Default for InMemoryVersionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn to_app_version(stored: StoredVersion, document: &AppDocument) -> AppVersion {
    AppVersion {
        version_id: Some(stored.version_id),
        nodes: stored.graph.nodes,
        edges: stored.graph.edges,
        chat_config: stored
            .graph
            .chat_config
            .or_else(|| document.chat_config.clone()),
    }
}

#[async_trait]
impl VersionResolver for InMemoryVersionStore {
    async fn latest_version(
        &self,
        app_id: &str,
        document: &AppDocument,
    ) -> ResolveResult<AppVersion> {
        if let Some(stored) = self.find(app_id, |v| v.is_publish) {
            return Ok(to_app_version(stored, document));
        }

        Ok(AppVersion {
            version_id: document.node_version().map(str::to_string),
            nodes: document.modules.clone(),
            edges: document.edges.clone(),
            chat_config: document.chat_config.clone(),
        })
    }

    async fn version_by_id(
        &self,
        app_id: &str,
        version_id: &str,
        document: &AppDocument,
    ) -> ResolveResult<AppVersion> {
        match self.find(app_id, |v| v.version_id == version_id) {
            Some(stored) => Ok(to_app_version(stored, document)),
            None => {
                tracing::debug!(app_id, version_id, "Unknown version, using latest");
                self.latest_version(app_id, document).await
            }
        }
    }
}
