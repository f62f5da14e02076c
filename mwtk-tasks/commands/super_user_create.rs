use mwtk_common::capitalize;
use mwtk_kube::{ClusterResources, ResourceKind, ResourceRef, super_user_manifests};
use tracing::error;

use crate::Reporter;
use crate::commands::CommandOutcome;

#[cfg(test)]
#[path = "./super_user_create.tests.rs"]
mod super_user_create_tests;

/// Command that creates a super-user service account with full access to a namespace.
pub struct SuperUserCreateCommand {
    pub account: String,
    pub namespace: String,
    managed_by: String,
}

impl SuperUserCreateCommand {
    /// Creates new [`SuperUserCreateCommand`] instance.
    pub fn new(account: String, namespace: String, managed_by: String) -> Self {
        Self {
            account,
            namespace,
            managed_by,
        }
    }

    /// Creates service account, role, role binding and token secret.\
    /// **Note** that it stops on the first failure, already created objects are left in place.
    pub async fn execute<C: ClusterResources, R: Reporter>(self, cluster: &C, reporter: &R) -> CommandOutcome {
        let account = ResourceRef::derived(ResourceKind::ServiceAccount, &self.account, &self.namespace);
        match cluster.find_by_name(&account).await {
            Ok(None) => (),
            Ok(Some(_)) => {
                reporter.error(&format!(
                    "Service account \"{}\" already exists in namespace \"{}\".",
                    self.account, self.namespace
                ));
                return CommandOutcome::Invalid;
            },
            Err(error) => {
                error!("Cannot look up {}: {}", account, error);
                reporter.error(&format!("Failed looking up the service account: {}.", error.message()));
                return CommandOutcome::Failure;
            },
        }

        for manifest in super_user_manifests(&self.account, &self.namespace, &self.managed_by) {
            let resource = manifest.resource_ref();
            if let Err(error) = cluster.create(&manifest).await {
                error!("Cannot create {}: {}", resource, error);
                reporter.error(&format!("Failed creating the {}: {}.", resource.kind, error.message()));
                return CommandOutcome::Failure;
            }

            reporter.info(&format!(
                "{} \"{}\" created.",
                capitalize(resource.kind.display_name()),
                resource.name
            ));
        }

        reporter.success(&format!("Service account \"{}\" created successfully!", self.account));
        CommandOutcome::Success
    }
}
