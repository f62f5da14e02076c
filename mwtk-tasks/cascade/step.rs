use mwtk_common::capitalize;
use mwtk_kube::{ClusterResources, ResourceRef};
use tracing::{info, warn};

use crate::{Confirmation, ConfirmationGate, Prompter, Reporter};

#[cfg(test)]
#[path = "./step.tests.rs"]
mod step_tests;

/// Why a step did not delete anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Resource does not exist in the cluster.
    NotFound,

    /// Operator declined the deletion.
    Declined,

    /// Step was not attempted because an earlier decline stopped the plan.
    Aborted,
}

/// Result of a single deletion step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    Deleted,
    Skipped(SkipReason),
    Failed(String),
}

impl StepResult {
    /// Returns `true` if the resource was deleted.
    pub fn is_deleted(&self) -> bool {
        matches!(self, StepResult::Deleted)
    }

    /// Returns `true` if the operator declined the deletion.
    pub fn is_declined(&self) -> bool {
        matches!(self, StepResult::Skipped(SkipReason::Declined))
    }

    /// Returns upstream error message for a failed step.
    pub fn cause(&self) -> Option<&str> {
        match self {
            StepResult::Failed(cause) => Some(cause),
            _ => None,
        }
    }
}

/// Resolves, confirms and deletes one planned resource.\
/// **Note** that it never returns an error, every failure becomes a [`StepResult`].
pub struct StepExecutor<'a, C: ClusterResources, P: Prompter, R: Reporter> {
    cluster: &'a C,
    gate: &'a ConfirmationGate<'a, P>,
    reporter: &'a R,
}

impl<'a, C: ClusterResources, P: Prompter, R: Reporter> StepExecutor<'a, C, P, R> {
    /// Creates new [`StepExecutor`] instance.
    pub fn new(cluster: &'a C, gate: &'a ConfirmationGate<'a, P>, reporter: &'a R) -> Self {
        Self { cluster, gate, reporter }
    }

    /// Executes one deletion step for the `resource`.
    pub async fn execute(&self, resource: &ResourceRef) -> StepResult {
        let found = match self.cluster.find_by_name(resource).await {
            Ok(Some(found)) => found,
            Ok(None) => {
                info!("{} not found, skipping", resource);
                self.reporter.info(&format!(
                    "{} \"{}\" not found, skipping.",
                    capitalize(resource.kind.display_name()),
                    resource.name
                ));
                return StepResult::Skipped(SkipReason::NotFound);
            },
            Err(error) => {
                warn!("Cannot look up {}: {}", resource, error);
                self.reporter
                    .warning(&format!("Failed looking up the {}: {}.", resource.kind, error.message()));
                return StepResult::Failed(error.message().to_owned());
            },
        };

        if self.gate.confirm(&found) == Confirmation::Cancelled {
            info!("Deletion of {} declined", resource);
            self.reporter.info(&format!("Skipping the {} \"{}\".", resource.kind, resource.name));
            return StepResult::Skipped(SkipReason::Declined);
        }

        match self.cluster.delete(&found).await {
            Ok(()) => {
                self.reporter.success(&format!(
                    "{} \"{}\" deleted.",
                    capitalize(resource.kind.display_name()),
                    resource.name
                ));
                StepResult::Deleted
            },
            Err(error) => {
                warn!("Cannot delete {}: {}", resource, error);
                self.reporter
                    .warning(&format!("Failed deleting the {}: {}.", resource.kind, error.message()));
                StepResult::Failed(error.message().to_owned())
            },
        }
    }
}
