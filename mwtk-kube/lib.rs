pub use self::cluster::{ClusterError, ClusterResources, FoundResource, KubeCluster};
pub use self::core::{MANAGED_BY_LABEL, ResourceKind, ResourceRef};
pub use self::kubeconfig::{KubeconfigError, KubeconfigFile};
pub use self::manifests::{Manifest, super_user_manifests};

pub mod client;

mod cluster;
mod core;
mod kubeconfig;
mod manifests;
