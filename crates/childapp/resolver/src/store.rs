//! Collaborator traits consumed by the resolver
//!
//! Each backing source sits behind its own trait so deployments can plug in
//! their document database, catalog, and version history independently.
//! See [`crate::memory`] for reference implementations.

use async_trait::async_trait;
use childapp_types::{AppDocument, AppVersion, CustomizationRecord, RegistryEntry, ResolveResult};

/// Store of team-owned application documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Get an owned document by id
    async fn find_owned_document_by_id(&self, id: &str) -> ResolveResult<Option<AppDocument>>;
}

/// Static catalog of community and commercial plugins
#[async_trait]
pub trait PluginRegistry: Send + Sync {
    /// List every cataloged entry
    async fn list_registry_entries(&self) -> ResolveResult<Vec<RegistryEntry>>;

    /// Get an entry by exact id match
    async fn find_entry(&self, id: &str) -> ResolveResult<Option<RegistryEntry>> {
        let entries = self.list_registry_entries().await?;
        Ok(entries.into_iter().find(|e| e.id == id))
    }
}

/// Store of records linking registry entries to owned documents
#[async_trait]
pub trait CustomizationStore: Send + Sync {
    /// Get the record matching both the registry id and the associated document id
    async fn find_customization(
        &self,
        registry_id: &str,
        associated_id: &str,
    ) -> ResolveResult<Option<CustomizationRecord>>;
}

/// Version history of owned documents
#[async_trait]
pub trait VersionResolver: Send + Sync {
    /// Latest version of an application
    async fn latest_version(&self, app_id: &str, document: &AppDocument)
        -> ResolveResult<AppVersion>;

    /// A specific version of an application
    async fn version_by_id(
        &self,
        app_id: &str,
        version_id: &str,
        document: &AppDocument,
    ) -> ResolveResult<AppVersion>;
}
