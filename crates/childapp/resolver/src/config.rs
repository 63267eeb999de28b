//! Configuration for the child-app resolver

use crate::error::{ConfigError, ConfigResult};
use childapp_types::DEFAULT_NODE_VERSION;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Runtime version token for personal apps that declare no node version
    #[serde(default = "default_node_version")]
    pub default_node_version: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_node_version: default_node_version(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration, applied by the embedding binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_node_version() -> String {
    DEFAULT_NODE_VERSION.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ResolverConfig {
    /// Load configuration from defaults, an optional file, and `CHILDAPP__*` env vars
    ///
    /// Nested keys use `__` as well, e.g. `CHILDAPP__LOGGING__JSON=true`.
    pub fn load(path: Option<&str>) -> ConfigResult<Self> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&ResolverConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CHILDAPP")
                .separator("__")
                .try_parsing(true),
        );

        let config: ResolverConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_node_version.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_node_version must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl LoggingConfig {
    /// Install a global tracing subscriber; `RUST_LOG` overrides `level`
    pub fn init_tracing(&self) -> ConfigResult<()> {
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| self.level.clone().into());

        let result = if self.json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .try_init()
        };

        result.map_err(|e| ConfigError::Tracing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests that read or write process env vars must hold this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.default_node_version, "481");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_load_without_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = ResolverConfig::load(None).unwrap();
        assert_eq!(config.default_node_version, DEFAULT_NODE_VERSION);
    }

    #[test]
    fn test_missing_file_is_not_required() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = ResolverConfig::load(Some("does/not/exist/childapp")).unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("CHILDAPP__DEFAULT_NODE_VERSION", "999");
        std::env::set_var("CHILDAPP__LOGGING__JSON", "true");
        std::env::set_var("CHILDAPP_DEFAULT_NODE_VERSION", "777");

        let loaded = ResolverConfig::load(None);

        std::env::remove_var("CHILDAPP__DEFAULT_NODE_VERSION");
        std::env::remove_var("CHILDAPP__LOGGING__JSON");
        std::env::remove_var("CHILDAPP_DEFAULT_NODE_VERSION");

        let config = loaded.unwrap();
        assert_eq!(config.default_node_version, "999");
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_rejects_blank_node_version() {
        let config = ResolverConfig {
            default_node_version: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
