use crate::ReportKind;
use crate::testing::{FakeCluster, RecordingReporter};

use super::*;

fn command() -> SuperUserCreateCommand {
    SuperUserCreateCommand::new("ops".to_owned(), "apps".to_owned(), "mwtk".to_owned())
}

#[tokio::test]
async fn creates_all_resources_in_order_test() {
    let cluster = FakeCluster::with(&[]);
    let reporter = RecordingReporter::default();

    let outcome = command().execute(&cluster, &reporter).await;

    assert_eq!(CommandOutcome::Success, outcome);
    let kinds = cluster.created().into_iter().map(|r| r.kind).collect::<Vec<_>>();
    assert_eq!(
        vec![
            ResourceKind::ServiceAccount,
            ResourceKind::Role,
            ResourceKind::RoleBinding,
            ResourceKind::Secret
        ],
        kinds
    );
    assert_eq!(
        vec!["Service account \"ops\" created successfully!".to_owned()],
        reporter.lines_of(ReportKind::Success)
    );
}

#[tokio::test]
async fn existing_account_is_invalid_test() {
    let cluster = FakeCluster::with(&[ResourceRef::derived(ResourceKind::ServiceAccount, "ops", "apps")]);
    let reporter = RecordingReporter::default();

    let outcome = command().execute(&cluster, &reporter).await;

    assert_eq!(CommandOutcome::Invalid, outcome);
    assert!(cluster.created().is_empty());
}

#[tokio::test]
async fn first_failure_stops_creation_test() {
    let cluster = FakeCluster::with(&[]).failing_create(ResourceKind::Role, "quota exceeded");
    let reporter = RecordingReporter::default();

    let outcome = command().execute(&cluster, &reporter).await;

    assert_eq!(CommandOutcome::Failure, outcome);
    assert_eq!(1, cluster.created().len());
    assert_eq!(
        vec!["Failed creating the role: quota exceeded.".to_owned()],
        reporter.lines_of(ReportKind::Error)
    );
}
