use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::path::Path;
use tracing::info;

/// Possible errors from building kubernetes client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Failed to process kube configuration.
    #[error("failed to process kube configuration: {0}")]
    KubeconfigError(#[from] kube::config::KubeconfigError),

    /// Failed to build kubernetes client.
    #[error("failed to build kubernetes client: {0}")]
    KubeError(#[from] kube::Error),
}

/// Wrapper for the kubernetes [`Client`].
pub struct KubernetesClient {
    client: Client,
}

impl KubernetesClient {
    /// Creates new [`KubernetesClient`] instance from the kubeconfig file at `kube_config_path`.\
    /// **Note** that the current context from the file is used when `kube_context` is `None`.
    pub async fn new(kube_config_path: &Path, kube_context: Option<&str>) -> Result<Self, ClientError> {
        let kube_config = Kubeconfig::read_from(kube_config_path)?;
        let context = kube_context
            .map(String::from)
            .or_else(|| kube_config.current_context.clone())
            .unwrap_or_default();

        let options = KubeConfigOptions {
            context: kube_context.map(String::from),
            cluster: None,
            user: None,
        };
        let config = Config::from_custom_kubeconfig(kube_config, &options).await?;
        let client = Client::try_from(config)?;

        info!("Kubernetes client created for context '{}'", context);

        Ok(Self { client })
    }

    /// Returns cloned kubernetes client that can be consumed.
    pub fn get_client(&self) -> Client {
        self.client.clone()
    }
}
