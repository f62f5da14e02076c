use mwtk_kube::ResourceKind;

use crate::testing::{FakeCluster, FakePrompter, RecordingReporter};
use crate::{ConfirmationGate, ConfirmationPolicy, ReportKind, Verdict};

use super::*;

fn plan() -> DeletionPlan {
    DeletionPlan::super_user("ops", "apps")
}

fn all_resources() -> Vec<ResourceRef> {
    plan().iter().cloned().collect()
}

async fn run_plan(
    cluster: &FakeCluster,
    prompter: &FakePrompter,
    policy: ConfirmationPolicy,
    decline_policy: DeclinePolicy,
    reporter: &RecordingReporter,
) -> CascadeRun {
    let gate = ConfirmationGate::new(prompter, policy, "mwtk");
    let executor = StepExecutor::new(cluster, &gate, reporter);
    CascadeOrchestrator::new(executor, decline_policy).run(&plan()).await
}

fn results(run: &CascadeRun) -> Vec<StepResult> {
    run.records().iter().map(|r| r.result.clone()).collect()
}

#[tokio::test]
async fn all_confirmed_and_deleted_test() {
    let cluster = FakeCluster::with(&all_resources());
    let prompter = FakePrompter::answering(&[true, true, true]);
    let reporter = RecordingReporter::default();

    let run = run_plan(&cluster, &prompter, ConfirmationPolicy::Prompt, DeclinePolicy::SkipStep, &reporter).await;

    assert_eq!(3, run.deleted_count());
    assert_eq!(3, run.total_steps());
    assert_eq!(Verdict::FullyDeleted, run.outcome().verdict());
    assert_eq!(all_resources(), cluster.deleted());
    assert_eq!(3, prompter.asked().len());
    assert_eq!(3, reporter.lines_of(ReportKind::Success).len());
}

#[tokio::test]
async fn first_not_found_test() {
    let existing = all_resources().into_iter().skip(1).collect::<Vec<_>>();
    let cluster = FakeCluster::with(&existing);
    let prompter = FakePrompter::answering(&[]);
    let reporter = RecordingReporter::default();

    let run = run_plan(&cluster, &prompter, ConfirmationPolicy::AssumeYes, DeclinePolicy::SkipStep, &reporter).await;

    assert_eq!(
        vec![StepResult::Skipped(SkipReason::NotFound), StepResult::Deleted, StepResult::Deleted],
        results(&run)
    );
    assert_eq!(2, run.deleted_count());
    assert_eq!(Verdict::PartiallyDeleted, run.outcome().verdict());
    assert!(run.outcome().message("x").contains("2 resources (out of 3)"));
    assert!(reporter.lines_of(ReportKind::Warning).is_empty());
}

#[tokio::test]
async fn nothing_deleted_test() {
    let existing = all_resources().into_iter().skip(2).collect::<Vec<_>>();
    let cluster = FakeCluster::with(&existing);
    let prompter = FakePrompter::answering(&[false]);
    let reporter = RecordingReporter::default();

    let run = run_plan(&cluster, &prompter, ConfirmationPolicy::Prompt, DeclinePolicy::SkipStep, &reporter).await;

    assert_eq!(
        vec![
            StepResult::Skipped(SkipReason::NotFound),
            StepResult::Skipped(SkipReason::NotFound),
            StepResult::Skipped(SkipReason::Declined),
        ],
        results(&run)
    );
    assert_eq!(0, run.deleted_count());
    assert_eq!(Verdict::NoneDeleted, run.outcome().verdict());
    assert!(cluster.deleted().is_empty());
}

#[tokio::test]
async fn api_error_does_not_stop_plan_test() {
    let cluster = FakeCluster::with(&all_resources()).failing_delete(ResourceKind::Role, "etcd timeout");
    let prompter = FakePrompter::answering(&[]);
    let reporter = RecordingReporter::default();

    let run = run_plan(&cluster, &prompter, ConfirmationPolicy::AssumeYes, DeclinePolicy::SkipStep, &reporter).await;

    assert_eq!(
        vec![StepResult::Deleted, StepResult::Failed("etcd timeout".to_owned()), StepResult::Deleted],
        results(&run)
    );
    assert_eq!(
        vec!["Failed deleting the role: etcd timeout.".to_owned()],
        reporter.lines_of(ReportKind::Warning)
    );
    assert_eq!(2, run.deleted_count());
    assert_eq!(Verdict::PartiallyDeleted, run.outcome().verdict());
    assert!(cluster.deleted().contains(&ResourceRef::derived(ResourceKind::ServiceAccount, "ops", "apps")));
}

#[tokio::test]
async fn decline_skips_only_that_step_test() {
    let cluster = FakeCluster::with(&all_resources());
    let prompter = FakePrompter::answering(&[false, true, true]);
    let reporter = RecordingReporter::default();

    let run = run_plan(&cluster, &prompter, ConfirmationPolicy::Prompt, DeclinePolicy::SkipStep, &reporter).await;

    assert_eq!(
        vec![StepResult::Skipped(SkipReason::Declined), StepResult::Deleted, StepResult::Deleted],
        results(&run)
    );
    assert_eq!(all_resources(), cluster.lookups());
}

#[tokio::test]
async fn decline_aborts_remaining_steps_test() {
    let cluster = FakeCluster::with(&all_resources());
    let prompter = FakePrompter::answering(&[true, false, true]);
    let reporter = RecordingReporter::default();

    let run = run_plan(
        &cluster,
        &prompter,
        ConfirmationPolicy::Prompt,
        DeclinePolicy::AbortRemaining,
        &reporter,
    )
    .await;

    assert_eq!(
        vec![
            StepResult::Deleted,
            StepResult::Skipped(SkipReason::Declined),
            StepResult::Skipped(SkipReason::Aborted),
        ],
        results(&run)
    );
    assert_eq!(2, cluster.lookups().len());
    assert_eq!(2, prompter.asked().len());
    assert_eq!(1, run.deleted_count());
    assert_eq!(3, run.records().len());
}

#[tokio::test]
async fn records_keep_plan_order_test() {
    let cluster = FakeCluster::with(&all_resources()).failing_lookup(ResourceKind::RoleBinding, "forbidden");
    let prompter = FakePrompter::answering(&[]);
    let reporter = RecordingReporter::default();

    let run = run_plan(&cluster, &prompter, ConfirmationPolicy::AssumeYes, DeclinePolicy::SkipStep, &reporter).await;

    let resources = run.records().iter().map(|r| r.resource.clone()).collect::<Vec<_>>();
    assert_eq!(all_resources(), resources);
    assert_eq!(2, run.deleted_count());
}

#[test]
fn decline_policy_from_flag_test() {
    assert_eq!(DeclinePolicy::AbortRemaining, DeclinePolicy::from(true));
    assert_eq!(DeclinePolicy::SkipStep, DeclinePolicy::from(false));
    assert_eq!(DeclinePolicy::SkipStep, DeclinePolicy::default());
}
