use mwtk_kube::{ResourceKind, ResourceRef};

use crate::testing::{FakeCluster, FakePrompter, RecordingReporter};
use crate::{ConfirmationPolicy, ReportKind};

use super::*;

fn resources() -> Vec<ResourceRef> {
    DeletionPlan::super_user("ops", "apps").iter().cloned().collect()
}

fn command() -> SuperUserDeleteCommand {
    SuperUserDeleteCommand::new("ops".to_owned(), "apps".to_owned(), DeclinePolicy::SkipStep)
}

#[tokio::test]
async fn full_deletion_succeeds_test() {
    let cluster = FakeCluster::with(&resources());
    let prompter = FakePrompter::answering(&[]);
    let gate = ConfirmationGate::new(&prompter, ConfirmationPolicy::AssumeYes, "mwtk");
    let reporter = RecordingReporter::default();

    let outcome = command().execute(&cluster, &gate, &reporter).await;

    assert_eq!(CommandOutcome::Success, outcome);
    assert_eq!(
        Some(&(ReportKind::Success, "Service account \"ops\" deleted successfully!".to_owned())),
        reporter.lines().last()
    );
}

#[tokio::test]
async fn partial_deletion_is_invalid_test() {
    let cluster = FakeCluster::with(&resources()).failing_delete(ResourceKind::ServiceAccount, "denied");
    let prompter = FakePrompter::answering(&[]);
    let gate = ConfirmationGate::new(&prompter, ConfirmationPolicy::AssumeYes, "mwtk");
    let reporter = RecordingReporter::default();

    let outcome = command().execute(&cluster, &gate, &reporter).await;

    assert_eq!(CommandOutcome::Invalid, outcome);
    assert_eq!(
        vec!["Only 2 resources (out of 3) have been deleted successfully.".to_owned()],
        reporter.lines_of(ReportKind::Error)
    );
}

#[tokio::test]
async fn non_interactive_without_opt_in_deletes_nothing_test() {
    let cluster = FakeCluster::with(&resources());
    let prompter = FakePrompter::answering(&[true, true, true]);
    let gate = ConfirmationGate::new(&prompter, ConfirmationPolicy::from_flags(false, false, false), "mwtk");
    let reporter = RecordingReporter::default();

    let outcome = command().execute(&cluster, &gate, &reporter).await;

    assert_eq!(CommandOutcome::Invalid, outcome);
    assert!(cluster.deleted().is_empty());
    assert!(prompter.asked().is_empty());
    assert_eq!(
        Some(&(ReportKind::Warning, "No resource has been deleted.".to_owned())),
        reporter.lines().last()
    );
}
