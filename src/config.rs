use serde::Deserialize;
use std::path::Path;

use crate::models::WatchTarget;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cluster: ClusterConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    5000
}

/// Which autoscaler and which pods the snapshot describes.
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_deployment_name")]
    pub deployment_name: String,
    #[serde(default = "default_hpa_name")]
    pub hpa_name: String,
    /// Label selector for the pods behind the autoscaler (e.g. "app=web-server").
    #[serde(default = "default_pod_selector")]
    pub pod_selector: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            deployment_name: default_deployment_name(),
            hpa_name: default_hpa_name(),
            pod_selector: default_pod_selector(),
        }
    }
}

fn default_namespace() -> String {
    "default".into()
}

fn default_deployment_name() -> String {
    "azure-k8s-site".into()
}

fn default_hpa_name() -> String {
    "web-autoscaler".into()
}

fn default_pod_selector() -> String {
    "app=web-server".into()
}

/// Per-pod counter endpoint (nginx stub_status).
#[derive(Debug, Clone, Deserialize)]
pub struct SamplingConfig {
    #[serde(default = "default_status_path")]
    pub status_path: String,
    #[serde(default = "default_status_port")]
    pub port: u16,
    /// Single-attempt timeout for one pod request.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            status_path: default_status_path(),
            port: default_status_port(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_status_path() -> String {
    "/nginx_status".into()
}

fn default_status_port() -> u16 {
    80
}

fn default_timeout_ms() -> u64 {
    1000
}

impl AppConfig {
    /// Reads `CONFIG_FILE` (default `config.toml`) when present, then applies
    /// `NAMESPACE`, `DEPLOYMENT_NAME` and `HPA_NAME` from the environment.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let mut config = Self::load_from_path(&path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Missing file means "all defaults".
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let s = std::fs::read_to_string(path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides cluster settings from `lookup`; empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(v) = get("NAMESPACE") {
            self.cluster.namespace = v;
        }
        if let Some(v) = get("DEPLOYMENT_NAME") {
            self.cluster.deployment_name = v;
        }
        if let Some(v) = get("HPA_NAME") {
            self.cluster.hpa_name = v;
        }
    }

    pub fn watch_target(&self) -> WatchTarget {
        WatchTarget {
            namespace: self.cluster.namespace.clone(),
            deployment: self.cluster.deployment_name.clone(),
            autoscaler: self.cluster.hpa_name.clone(),
            pod_selector: self.cluster.pod_selector.clone(),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.cluster.namespace.is_empty(),
            "cluster.namespace must be non-empty"
        );
        anyhow::ensure!(
            !self.cluster.hpa_name.is_empty(),
            "cluster.hpa_name must be non-empty"
        );
        anyhow::ensure!(
            !self.cluster.pod_selector.is_empty(),
            "cluster.pod_selector must be non-empty"
        );
        anyhow::ensure!(
            self.sampling.status_path.starts_with('/'),
            "sampling.status_path must start with '/', got {:?}",
            self.sampling.status_path
        );
        anyhow::ensure!(
            self.sampling.port > 0,
            "sampling.port must be between 1 and 65535, got {}",
            self.sampling.port
        );
        anyhow::ensure!(
            self.sampling.timeout_ms > 0,
            "sampling.timeout_ms must be > 0, got {}",
            self.sampling.timeout_ms
        );
        Ok(())
    }
}
