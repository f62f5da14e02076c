use mwtk_kube::{ClusterResources, ResourceRef};
use tracing::info;

use crate::{DeletionPlan, Prompter, Reporter, RunOutcome, SkipReason, StepExecutor, StepResult};

#[cfg(test)]
#[path = "./orchestrator.tests.rs"]
mod orchestrator_tests;

/// What happens with the rest of the plan when the operator declines a step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DeclinePolicy {
    /// Skip only the declined step.
    #[default]
    SkipStep,

    /// Skip the declined step and every step after it.
    AbortRemaining,
}

impl From<bool> for DeclinePolicy {
    fn from(stop_on_decline: bool) -> Self {
        if stop_on_decline {
            DeclinePolicy::AbortRemaining
        } else {
            DeclinePolicy::SkipStep
        }
    }
}

/// Planned resource together with its step result.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub resource: ResourceRef,
    pub result: StepResult,
}

/// Accumulated results of a cascade run, in plan order.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeRun {
    records: Vec<StepRecord>,
    deleted_count: usize,
    total_steps: usize,
}

impl CascadeRun {
    /// Creates new empty [`CascadeRun`] for a plan with `total_steps` steps.
    pub fn new(total_steps: usize) -> Self {
        Self {
            records: Vec::with_capacity(total_steps),
            deleted_count: 0,
            total_steps,
        }
    }

    /// Records result of the next step.
    pub fn record(&mut self, resource: ResourceRef, result: StepResult) {
        if result.is_deleted() {
            self.deleted_count += 1;
        }

        self.records.push(StepRecord { resource, result });
    }

    /// Returns recorded steps in plan order.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Returns number of deleted resources.
    pub fn deleted_count(&self) -> usize {
        self.deleted_count
    }

    /// Returns number of steps in the executed plan.
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Returns counters used to grade the run.
    pub fn outcome(&self) -> RunOutcome {
        RunOutcome::new(self.deleted_count, self.total_steps)
    }
}

/// Runs the whole [`DeletionPlan`] step by step.\
/// **Note** that steps are executed sequentially and a failed step never stops the plan.
pub struct CascadeOrchestrator<'a, C: ClusterResources, P: Prompter, R: Reporter> {
    executor: StepExecutor<'a, C, P, R>,
    decline_policy: DeclinePolicy,
}

impl<'a, C: ClusterResources, P: Prompter, R: Reporter> CascadeOrchestrator<'a, C, P, R> {
    /// Creates new [`CascadeOrchestrator`] instance.
    pub fn new(executor: StepExecutor<'a, C, P, R>, decline_policy: DeclinePolicy) -> Self {
        Self {
            executor,
            decline_policy,
        }
    }

    /// Executes all steps of the `plan` in order and returns their results.
    pub async fn run(&self, plan: &DeletionPlan) -> CascadeRun {
        let mut run = CascadeRun::new(plan.len());
        let mut aborted = false;

        for resource in plan.iter() {
            let result = if aborted {
                StepResult::Skipped(SkipReason::Aborted)
            } else {
                self.executor.execute(resource).await
            };

            if result.is_declined() && self.decline_policy == DeclinePolicy::AbortRemaining {
                info!("Deletion stopped after {} was declined", resource);
                aborted = true;
            }

            run.record(resource.clone(), result);
        }

        info!(
            "Deletion of {} finished: {} of {} resources deleted",
            plan.subject(),
            run.deleted_count(),
            run.total_steps()
        );

        run
    }
}
