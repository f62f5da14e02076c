use k8s_openapi::NamespaceResourceScope;
use k8s_openapi::api::core::v1::{Secret, ServiceAccount};
use k8s_openapi::api::rbac::v1::{Role, RoleBinding};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::{Api, DeleteParams, PostParams, Preconditions};
use kube::{Client, Resource};
use mwtk_config::PropagationPolicy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::{MANAGED_BY_LABEL, Manifest, ResourceKind, ResourceRef};

#[cfg(test)]
#[path = "./cluster.tests.rs"]
mod cluster_tests;

/// Possible errors reported by the cluster when working with resources.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// Kubernetes API responded with an error.
    #[error("{message}")]
    Api { message: String, code: u16 },

    /// Request did not reach the API or its response could not be processed.
    #[error("{0}")]
    Other(String),
}

impl ClusterError {
    /// Returns the upstream error message.
    pub fn message(&self) -> &str {
        match self {
            ClusterError::Api { message, .. } => message,
            ClusterError::Other(message) => message,
        }
    }
}

impl From<kube::Error> for ClusterError {
    fn from(error: kube::Error) -> Self {
        match error {
            kube::Error::Api(response) => ClusterError::Api {
                message: response.message.clone(),
                code: response.code,
            },
            other => ClusterError::Other(other.to_string()),
        }
    }
}

/// Kubernetes object resolved in the cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundResource {
    pub resource: ResourceRef,
    pub uid: Option<String>,
    pub managed_by: Option<String>,
}

impl FoundResource {
    /// Creates new [`FoundResource`] instance from the object's metadata.
    pub fn from_metadata(resource: ResourceRef, metadata: &ObjectMeta) -> Self {
        let managed_by = metadata
            .labels
            .as_ref()
            .and_then(|labels| labels.get(MANAGED_BY_LABEL))
            .cloned();

        Self {
            resource,
            uid: metadata.uid.clone(),
            managed_by,
        }
    }

    /// Returns `true` if the object carries the managed-by label with the `manager` value.
    pub fn is_managed_by(&self, manager: &str) -> bool {
        self.managed_by.as_deref() == Some(manager)
    }
}

/// Cluster operations the CLI commands depend on.
pub trait ClusterResources {
    /// Looks up the object, returns `None` if it does not exist.
    fn find_by_name(&self, resource: &ResourceRef) -> impl Future<Output = Result<Option<FoundResource>, ClusterError>>;

    /// Deletes previously resolved object.
    fn delete(&self, resource: &FoundResource) -> impl Future<Output = Result<(), ClusterError>>;

    /// Creates the object described by the manifest.
    fn create(&self, manifest: &Manifest) -> impl Future<Output = Result<(), ClusterError>>;
}

/// [`ClusterResources`] backed by the Kubernetes API.
pub struct KubeCluster {
    client: Client,
    propagation_policy: Option<PropagationPolicy>,
}

impl KubeCluster {
    /// Creates new [`KubeCluster`] instance.
    pub fn new(client: Client, propagation_policy: Option<PropagationPolicy>) -> Self {
        Self {
            client,
            propagation_policy,
        }
    }

    fn api<K>(&self, namespace: &str) -> Api<K>
    where
        K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>,
    {
        Api::namespaced(self.client.clone(), namespace)
    }
}

impl ClusterResources for KubeCluster {
    async fn find_by_name(&self, resource: &ResourceRef) -> Result<Option<FoundResource>, ClusterError> {
        let metadata = match resource.kind {
            ResourceKind::ServiceAccount => get_metadata(self.api::<ServiceAccount>(&resource.namespace), &resource.name).await?,
            ResourceKind::Role => get_metadata(self.api::<Role>(&resource.namespace), &resource.name).await?,
            ResourceKind::RoleBinding => get_metadata(self.api::<RoleBinding>(&resource.namespace), &resource.name).await?,
            ResourceKind::Secret => get_metadata(self.api::<Secret>(&resource.namespace), &resource.name).await?,
        };

        Ok(metadata.map(|metadata| FoundResource::from_metadata(resource.clone(), &metadata)))
    }

    async fn delete(&self, found: &FoundResource) -> Result<(), ClusterError> {
        let resource = &found.resource;
        let params = delete_params(self.propagation_policy, found.uid.as_deref());
        match resource.kind {
            ResourceKind::ServiceAccount => {
                self.api::<ServiceAccount>(&resource.namespace)
                    .delete(&resource.name, &params)
                    .await?;
            },
            ResourceKind::Role => {
                self.api::<Role>(&resource.namespace)
                    .delete(&resource.name, &params)
                    .await?;
            },
            ResourceKind::RoleBinding => {
                self.api::<RoleBinding>(&resource.namespace)
                    .delete(&resource.name, &params)
                    .await?;
            },
            ResourceKind::Secret => {
                self.api::<Secret>(&resource.namespace)
                    .delete(&resource.name, &params)
                    .await?;
            },
        }

        tracing::info!("Deleted {}", resource);
        Ok(())
    }

    async fn create(&self, manifest: &Manifest) -> Result<(), ClusterError> {
        let namespace = manifest.resource_ref().namespace;
        match manifest {
            Manifest::ServiceAccount(object) => create_object(self.api(&namespace), object).await?,
            Manifest::Role(object) => create_object(self.api(&namespace), object).await?,
            Manifest::RoleBinding(object) => create_object(self.api(&namespace), object).await?,
            Manifest::Secret(object) => create_object(self.api(&namespace), object).await?,
        }

        tracing::info!("Created {}", manifest.resource_ref());
        Ok(())
    }
}

/// Builds delete parameters for an object resolved earlier.\
/// **Note** that the `uid` precondition makes the API reject the request if the object was re-created since then.
fn delete_params(propagation_policy: Option<PropagationPolicy>, uid: Option<&str>) -> DeleteParams {
    DeleteParams {
        propagation_policy: propagation_policy.map(|policy| match policy {
            PropagationPolicy::Orphan => kube::api::PropagationPolicy::Orphan,
            PropagationPolicy::Background => kube::api::PropagationPolicy::Background,
            PropagationPolicy::Foreground => kube::api::PropagationPolicy::Foreground,
        }),
        preconditions: uid.map(|uid| Preconditions {
            uid: Some(uid.to_owned()),
            resource_version: None,
        }),
        ..Default::default()
    }
}

async fn get_metadata<K>(api: Api<K>, name: &str) -> Result<Option<ObjectMeta>, kube::Error>
where
    K: Resource + Clone + DeserializeOwned + Debug,
{
    Ok(api.get_opt(name).await?.map(|object| object.meta().clone()))
}

async fn create_object<K>(api: Api<K>, object: &K) -> Result<(), kube::Error>
where
    K: Resource + Clone + Serialize + DeserializeOwned + Debug,
{
    api.create(&PostParams::default(), object).await?;
    Ok(())
}
