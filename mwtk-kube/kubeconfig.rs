use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(test)]
#[path = "./kubeconfig.tests.rs"]
mod kubeconfig_tests;

const DEFAULT_CLUSTER_NAME: &str = "default-cluster";
const DEFAULT_CONTEXT_NAME: &str = "default-context";

/// Possible errors when writing kubeconfig files.
#[derive(thiserror::Error, Debug)]
pub enum KubeconfigError {
    /// Cannot read the certificate or write the kubeconfig file.
    #[error("cannot read/write file: {0}")]
    IoError(#[from] std::io::Error),

    /// Cannot serialize kubeconfig.
    #[error("cannot serialize kubeconfig: {0}")]
    SerializationError(#[from] serde_yaml::Error),
}

/// Minimal kubeconfig file with a single cluster, user and context.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct KubeconfigFile {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub clusters: Vec<NamedCluster>,
    pub users: Vec<NamedUser>,
    pub contexts: Vec<NamedContext>,
    pub current_context: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NamedCluster {
    pub name: String,
    pub cluster: ClusterEntry,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterEntry {
    pub server: String,
    pub certificate_authority_data: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NamedUser {
    pub name: String,
    pub user: UserEntry,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserEntry {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NamedContext {
    pub name: String,
    pub context: ContextEntry,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContextEntry {
    pub cluster: String,
    pub user: String,
}

impl KubeconfigFile {
    /// Creates new [`KubeconfigFile`] for the `user` authenticated with bearer `token`.\
    /// **Note** that `certificate` is the raw PEM content, it is base64-encoded here.
    pub fn new(user: &str, certificate: &[u8], server: &str, token: &str) -> Self {
        Self {
            api_version: "v1".to_owned(),
            kind: "Config".to_owned(),
            clusters: vec![NamedCluster {
                name: DEFAULT_CLUSTER_NAME.to_owned(),
                cluster: ClusterEntry {
                    server: server.to_owned(),
                    certificate_authority_data: STANDARD.encode(certificate),
                },
            }],
            users: vec![NamedUser {
                name: user.to_owned(),
                user: UserEntry { token: token.to_owned() },
            }],
            contexts: vec![NamedContext {
                name: DEFAULT_CONTEXT_NAME.to_owned(),
                context: ContextEntry {
                    cluster: DEFAULT_CLUSTER_NAME.to_owned(),
                    user: user.to_owned(),
                },
            }],
            current_context: DEFAULT_CONTEXT_NAME.to_owned(),
        }
    }

    /// Serializes kubeconfig to YAML.
    pub fn to_yaml(&self) -> Result<String, KubeconfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Writes kubeconfig to the `path`, creating missing parent directories.
    pub async fn write_to(&self, path: &Path) -> Result<(), KubeconfigError> {
        let yaml = self.to_yaml()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(path, yaml).await?;
        tracing::info!("Kubeconfig written to {}", path.display());

        Ok(())
    }
}
