use mwtk_kube::ClusterResources;

use crate::commands::CommandOutcome;
use crate::{CascadeOrchestrator, ConfirmationGate, DeclinePolicy, DeletionPlan, Prompter, Reporter, StepExecutor};

#[cfg(test)]
#[path = "./super_user_delete.tests.rs"]
mod super_user_delete_tests;

/// Command that deletes a super-user service account together with its role and role binding.
pub struct SuperUserDeleteCommand {
    pub account: String,
    pub namespace: String,
    decline_policy: DeclinePolicy,
}

impl SuperUserDeleteCommand {
    /// Creates new [`SuperUserDeleteCommand`] instance.
    pub fn new(account: String, namespace: String, decline_policy: DeclinePolicy) -> Self {
        Self {
            account,
            namespace,
            decline_policy,
        }
    }

    /// Deletes all super-user resources and reports the graded result.
    pub async fn execute<C: ClusterResources, P: Prompter, R: Reporter>(
        self,
        cluster: &C,
        gate: &ConfirmationGate<'_, P>,
        reporter: &R,
    ) -> CommandOutcome {
        let plan = DeletionPlan::super_user(&self.account, &self.namespace);
        let executor = StepExecutor::new(cluster, gate, reporter);
        let run = CascadeOrchestrator::new(executor, self.decline_policy).run(&plan).await;

        let outcome = run.outcome();
        reporter.report(outcome.report_kind(), &outcome.message(plan.subject()));

        outcome.command_outcome()
    }
}
