// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_query_path")]
    pub query_path: String,
    #[serde(default = "default_document_path")]
    pub document_path: String,
    #[serde(default = "default_upload_path")]
    pub upload_path: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Unset means requests never time out.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Upper bound on outstanding document fetches; unset fans out to every hit at once.
    #[serde(default)]
    pub max_concurrency: Option<usize>,
    #[serde(default)]
    pub order: FetchOrder,
}

/// Order in which fetched documents are appended to the result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FetchOrder {
    /// As each fetch completes.
    #[default]
    Completion,
    /// In the order the search returned the identifiers.
    Query,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub progress: bool,
    #[serde(default)]
    pub pretty_json: bool,
}

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_query_path() -> String {
    "/query".to_string()
}

fn default_document_path() -> String {
    "/document".to_string()
}

fn default_upload_path() -> String {
    "/upload".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            query_path: default_query_path(),
            document_path: default_document_path(),
            upload_path: default_upload_path(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl FetchConfig {
    /// Concurrency limit for a fan-out over `hits` identifiers.
    pub fn limit_for(&self, hits: usize) -> usize {
        match self.max_concurrency {
            Some(limit) => limit.max(1),
            None => hits.max(1),
        }
    }
}

impl Config {
    /// Layers the TOML file at `path` (required) or `config/default.toml`
    /// (optional) under `DOC_SEARCH__*` environment variables. The result is
    /// not validated, so callers can apply command-line overrides first.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_layered(path, Path::new(DEFAULT_CONFIG_PATH), None)
    }

    fn load_layered(
        path: Option<&Path>,
        fallback: &Path,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(fallback).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOC_SEARCH")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))
    }

    pub fn default_config() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            fetch: FetchConfig::default(),
            display: DisplayConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.gateway.base_url)
            .map_err(|e| SearchError::Config(e.payload()))?;

        for path in [
            &self.gateway.query_path,
            &self.gateway.document_path,
            &self.gateway.upload_path,
        ] {
            if !path.starts_with('/') {
                return Err(SearchError::Config(format!(
                    "gateway path must start with '/': {}",
                    path
                )));
            }
        }

        if self.fetch.max_concurrency == Some(0) {
            return Err(SearchError::Config(
                "max_concurrency must be greater than 0".to_string(),
            ));
        }

        if self.gateway.timeout_secs == Some(0) {
            return Err(SearchError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
