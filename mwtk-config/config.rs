use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::persistable::{read_file, write_file};
use crate::{ConfigError, Persistable, load_or_create_default};

#[cfg(test)]
#[path = "./config.tests.rs"]
mod config_tests;

pub const APP_NAME: &str = "mwtk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_MANAGED_BY: &str = "mwtk";

/// Helm invocation configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Helm {
    #[serde(default = "default_helm_binary")]
    pub binary: String,

    /// Environments an app can be installed in, release `{app}-{env}` belongs to the app only for these.
    #[serde(default = "default_helm_environments")]
    pub environments: Vec<String>,
}

impl Default for Helm {
    fn default() -> Self {
        Self {
            binary: default_helm_binary(),
            environments: default_helm_environments(),
        }
    }
}

/// Propagation policy sent with delete requests, the API server default is used when not set.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationPolicy {
    Orphan,
    Background,
    Foreground,
}

/// Resources deletion configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Deletion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propagation_policy: Option<PropagationPolicy>,

    #[serde(default)]
    pub stop_on_decline: bool,
}

/// Application configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kube_config: Option<String>,

    #[serde(default = "default_managed_by")]
    pub managed_by: String,

    #[serde(default)]
    pub helm: Helm,

    #[serde(default)]
    pub deletion: Deletion,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_owned()
}

fn default_managed_by() -> String {
    DEFAULT_MANAGED_BY.to_owned()
}

fn default_helm_binary() -> String {
    "helm".to_owned()
}

fn default_helm_environments() -> Vec<String> {
    ["dev", "test", "staging", "prod"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            kube_config: None,
            managed_by: default_managed_by(),
            helm: Helm::default(),
            deletion: Deletion::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a file or creates a default one if the file does not exist.
    pub async fn load_or_create() -> Result<Self, ConfigError> {
        load_or_create_default(&Self::default_path()).await
    }

    /// Returns path to the kubeconfig file the CLI should use.\
    /// **Note** that `KUBECONFIG` is not consulted here, `clap` already maps it to the CLI option.
    pub fn kube_config_path(&self, from_cli: Option<&str>) -> PathBuf {
        if let Some(path) = from_cli.or(self.kube_config.as_deref()) {
            return PathBuf::from(path);
        }

        match std::env::home_dir() {
            Some(path) => path.join(".kube").join("config"),
            None => PathBuf::from("config"),
        }
    }
}

impl Persistable<Config> for Config {
    /// Returns the default configuration path: `HOME/.mwtk/config.yaml`.
    fn default_path() -> PathBuf {
        match std::env::home_dir() {
            Some(path) => path.join(format!(".{APP_NAME}")).join("config.yaml"),
            None => PathBuf::from("config.yaml"),
        }
    }

    async fn load(path: &Path) -> Result<Config, ConfigError> {
        let config_str = read_file(path).await?;
        Ok(serde_yaml::from_str::<Config>(&config_str)?)
    }

    async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let config_str = serde_yaml::to_string(self)?;
        write_file(path, &config_str).await
    }
}
