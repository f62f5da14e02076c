use mwtk_kube::ResourceKind;

use crate::testing::{FakeCluster, FakePrompter, RecordingReporter};
use crate::{ConfirmationPolicy, ReportKind};

use super::*;

fn role() -> ResourceRef {
    ResourceRef::derived(ResourceKind::Role, "ops", "apps")
}

#[tokio::test]
async fn deletes_found_resource_test() {
    let cluster = FakeCluster::with(&[role()]);
    let prompter = FakePrompter::answering(&[]);
    let gate = ConfirmationGate::new(&prompter, ConfirmationPolicy::AssumeYes, "mwtk");
    let reporter = RecordingReporter::default();

    let result = StepExecutor::new(&cluster, &gate, &reporter).execute(&role()).await;

    assert_eq!(StepResult::Deleted, result);
    assert_eq!(vec![role()], cluster.deleted());
    assert_eq!(vec![(ReportKind::Success, "Role \"ops-role\" deleted.".to_owned())], reporter.lines());
}

#[tokio::test]
async fn not_found_is_skipped_test() {
    let cluster = FakeCluster::with(&[]);
    let prompter = FakePrompter::answering(&[]);
    let gate = ConfirmationGate::new(&prompter, ConfirmationPolicy::Prompt, "mwtk");
    let reporter = RecordingReporter::default();

    let result = StepExecutor::new(&cluster, &gate, &reporter).execute(&role()).await;

    assert_eq!(StepResult::Skipped(SkipReason::NotFound), result);
    assert!(prompter.asked().is_empty());
    assert!(cluster.deleted().is_empty());
    assert!(reporter.lines_of(ReportKind::Warning).is_empty());
    assert!(reporter.lines_of(ReportKind::Error).is_empty());
}

#[tokio::test]
async fn declined_is_skipped_test() {
    let cluster = FakeCluster::with(&[role()]);
    let prompter = FakePrompter::answering(&[false]);
    let gate = ConfirmationGate::new(&prompter, ConfirmationPolicy::Prompt, "mwtk");
    let reporter = RecordingReporter::default();

    let result = StepExecutor::new(&cluster, &gate, &reporter).execute(&role()).await;

    assert_eq!(StepResult::Skipped(SkipReason::Declined), result);
    assert!(result.is_declined());
    assert!(cluster.deleted().is_empty());
}

#[tokio::test]
async fn api_error_is_failed_test() {
    let cluster = FakeCluster::with(&[role()]).failing_delete(ResourceKind::Role, "roles \"ops-role\" is forbidden");
    let prompter = FakePrompter::answering(&[]);
    let gate = ConfirmationGate::new(&prompter, ConfirmationPolicy::AssumeYes, "mwtk");
    let reporter = RecordingReporter::default();

    let result = StepExecutor::new(&cluster, &gate, &reporter).execute(&role()).await;

    assert_eq!(Some("roles \"ops-role\" is forbidden"), result.cause());
    assert_eq!(
        vec!["Failed deleting the role: roles \"ops-role\" is forbidden.".to_owned()],
        reporter.lines_of(ReportKind::Warning)
    );
}

#[tokio::test]
async fn lookup_error_is_failed_test() {
    let cluster = FakeCluster::with(&[role()]).failing_lookup(ResourceKind::Role, "connection refused");
    let prompter = FakePrompter::answering(&[]);
    let gate = ConfirmationGate::new(&prompter, ConfirmationPolicy::AssumeYes, "mwtk");
    let reporter = RecordingReporter::default();

    let result = StepExecutor::new(&cluster, &gate, &reporter).execute(&role()).await;

    assert_eq!(StepResult::Failed("connection refused".to_owned()), result);
    assert!(cluster.deleted().is_empty());
    assert_eq!(1, reporter.lines_of(ReportKind::Warning).len());
}
