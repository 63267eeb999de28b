//! Provenance routing
//!
//! [`ChildAppResolver`] turns a combined identifier into a [`ChildApp`]:
//!
//! - personal ids read the owned document and resolve one of its versions
//! - community/commercial ids read the static registry; an entry that fronts
//!   an owned document is authorized against a customization record, then
//!   takes the document's ownership and versioned graph while keeping its
//!   own display metadata
//!
//! Preview and runtime share the routing and differ only in [`ResolveMode`].

use crate::builder::{build_preview_node, build_runtime_descriptor};
use crate::codec::decode;
use crate::config::ResolverConfig;
use crate::store::{CustomizationStore, DocumentStore, PluginRegistry, VersionResolver};
use childapp_types::{
    AppDocument, AppVersion, ChildApp, PreviewNode, Provenance, ResolveError, ResolveResult,
    RuntimeDescriptor, TemplateType,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Version selection policy for a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveMode {
    /// Always the latest version (editor preview)
    LatestOnly,
    /// The given version, or latest when none is given (runtime)
    SpecificOrLatest(Option<String>),
}

impl ResolveMode {
    /// Explicitly requested version token, if any
    pub fn requested_version(&self) -> Option<&str> {
        match self {
            ResolveMode::LatestOnly => None,
            ResolveMode::SpecificOrLatest(version) => version.as_deref(),
        }
    }
}

/// Resolves child-app identifiers against injected collaborators
pub struct ChildAppResolver {
    documents: Arc<dyn DocumentStore>,
    registry: Arc<dyn PluginRegistry>,
    customizations: Arc<dyn CustomizationStore>,
    versions: Arc<dyn VersionResolver>,
    config: ResolverConfig,
}

impl ChildAppResolver {
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        registry: Arc<dyn PluginRegistry>,
        customizations: Arc<dyn CustomizationStore>,
        versions: Arc<dyn VersionResolver>,
    ) -> Self {
        Self {
            documents,
            registry,
            customizations,
            versions,
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Editor preview node for a combined identifier
    #[instrument(skip(self))]
    pub async fn get_child_app_preview_node(&self, id: &str) -> ResolveResult<PreviewNode> {
        let app = self.resolve_preview(id).await?;
        Ok(build_preview_node(app))
    }

    /// Runtime descriptor for a combined identifier, optionally pinned to a version
    #[instrument(skip(self))]
    pub async fn get_child_app_runtime_by_id(
        &self,
        id: &str,
        version_id: Option<&str>,
    ) -> ResolveResult<RuntimeDescriptor> {
        let app = self.resolve_runtime(id, version_id).await?;
        Ok(build_runtime_descriptor(app))
    }

    /// Resolve against the latest version
    pub async fn resolve_preview(&self, id: &str) -> ResolveResult<ChildApp> {
        self.resolve(id, &ResolveMode::LatestOnly).await
    }

    /// Resolve against a specific version, or latest when none is given
    pub async fn resolve_runtime(
        &self,
        id: &str,
        version_id: Option<&str>,
    ) -> ResolveResult<ChildApp> {
        let mode = ResolveMode::SpecificOrLatest(version_id.map(str::to_string));
        self.resolve(id, &mode).await
    }

    /// Shared routing for both entry points
    pub async fn resolve(&self, id: &str, mode: &ResolveMode) -> ResolveResult<ChildApp> {
        let decoded = decode(id)?;
        debug!(id, provenance = %decoded.provenance, "Routing child app");

        match decoded.provenance {
            Provenance::Personal => self.resolve_personal(&decoded.bare_id, mode).await,
            Provenance::Community | Provenance::Commercial => {
                self.resolve_registry(&decoded.bare_id, mode).await
            }
        }
    }

    async fn resolve_personal(&self, app_id: &str, mode: &ResolveMode) -> ResolveResult<ChildApp> {
        let document = self
            .documents
            .find_owned_document_by_id(app_id)
            .await?
            .ok_or_else(|| ResolveError::NotFound(app_id.to_string()))?;

        let (version_id, version) = self.resolve_version(app_id, &document, mode).await?;

        let version_token = match mode {
            ResolveMode::LatestOnly => version_id,
            ResolveMode::SpecificOrLatest(_) => document
                .node_version()
                .map(str::to_string)
                .unwrap_or_else(|| self.config.default_node_version.clone()),
        };

        Ok(ChildApp {
            id: document.id,
            team_id: Some(document.team_id),
            tmb_id: Some(document.tmb_id),
            name: document.name,
            avatar: document.avatar,
            intro: document.intro,
            course_url: None,
            user_guide: None,
            workflow: version.into_graph(),
            version: version_token,
            original_cost: 0.0,
            current_cost: 0.0,
            has_token_fee: false,
            template_type: TemplateType::TeamApp,
            plugin_order: 0,
            show_status: true,
        })
    }

    async fn resolve_registry(
        &self,
        plugin_id: &str,
        mode: &ResolveMode,
    ) -> ResolveResult<ChildApp> {
        // TODO: split registry misses out of Unauthorized once callers can
        // tell "no such plugin" apart from "not allowed".
        let entry = self.registry.find_entry(plugin_id).await?.ok_or_else(|| {
            warn!(plugin_id, "Registry entry not found");
            ResolveError::Unauthorized(plugin_id.to_string())
        })?;

        let Some(associated_id) = entry.associated_plugin_id.clone() else {
            return Ok(ChildApp::from(entry));
        };

        self.customizations
            .find_customization(&entry.id, &associated_id)
            .await?
            .ok_or_else(|| {
                warn!(
                    plugin_id,
                    associated_id = %associated_id,
                    "No customization record for association"
                );
                ResolveError::Unauthorized(plugin_id.to_string())
            })?;

        let document = self
            .documents
            .find_owned_document_by_id(&associated_id)
            .await?
            .ok_or_else(|| {
                warn!(plugin_id, associated_id = %associated_id, "Associated document missing");
                ResolveError::Unauthorized(plugin_id.to_string())
            })?;

        let (version_id, version) = self
            .resolve_version(&associated_id, &document, mode)
            .await?;
        let version_token = mode
            .requested_version()
            .map(str::to_string)
            .unwrap_or(version_id);

        let mut app = ChildApp::from(entry);
        app.workflow = version.into_graph();
        app.version = version_token;
        app.team_id = Some(document.team_id);
        app.tmb_id = Some(document.tmb_id);
        Ok(app)
    }

    /// Fetch the version the mode asks for; it must carry an identifier
    async fn resolve_version(
        &self,
        app_id: &str,
        document: &AppDocument,
        mode: &ResolveMode,
    ) -> ResolveResult<(String, AppVersion)> {
        let version = match mode.requested_version() {
            Some(version_id) => {
                self.versions
                    .version_by_id(app_id, version_id, document)
                    .await?
            }
            None => self.versions.latest_version(app_id, document).await?,
        };

        let version_id = version
            .version_id
            .clone()
            .ok_or_else(|| ResolveError::VersionNotFound(app_id.to_string()))?;

        debug!(app_id, version_id = %version_id, "Resolved app version");
        Ok((version_id, version))
    }
}
