use mwtk_common::capitalize;
use mwtk_kube::{ResourceKind, ResourceRef};

#[cfg(test)]
#[path = "./plan.tests.rs"]
mod plan_tests;

/// Kinds that make up a super-user, from the most dependent to the least dependent one.
const SUPER_USER_KINDS: [ResourceKind; 3] = [ResourceKind::RoleBinding, ResourceKind::Role, ResourceKind::ServiceAccount];

/// Ordered list of resources to delete.\
/// **Note** that resources are ordered from the most dependent to the least dependent one.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionPlan {
    subject: String,
    steps: Vec<ResourceRef>,
}

impl DeletionPlan {
    /// Creates new [`DeletionPlan`] instance for the `subject` (used in the summary message).
    pub fn new(subject: impl Into<String>, steps: Vec<ResourceRef>) -> Self {
        Self {
            subject: subject.into(),
            steps,
        }
    }

    /// Creates plan that removes the super-user `account`: its role binding, role and the service account itself.
    pub fn super_user(account: &str, namespace: &str) -> Self {
        let steps = SUPER_USER_KINDS
            .iter()
            .map(|kind| ResourceRef::derived(*kind, account, namespace))
            .collect();
        let subject = format!("{} \"{}\"", capitalize(ResourceKind::ServiceAccount.display_name()), account);

        Self::new(subject, steps)
    }

    /// Returns human-readable name of the deletion target, e.g. `Service account "ops"`.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns number of steps in the plan.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns an iterator over the planned resources in deletion order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceRef> {
        self.steps.iter()
    }
}
