use crate::ReportKind;
use crate::testing::{FakeHelm, RecordingReporter};

use super::*;

fn command(env: Option<&str>) -> AppUninstallCommand {
    AppUninstallCommand {
        app: "shop".to_owned(),
        env: env.map(String::from),
        environments: vec!["staging".to_owned(), "prod".to_owned()],
        namespace: "apps".to_owned(),
    }
}

#[tokio::test]
async fn uninstall_all_envs_test() {
    let helm = FakeHelm::default().responding("list", "shop-staging\nshop-prod\nblog\n");
    let reporter = RecordingReporter::default();

    let outcome = command(None).execute(&helm, &reporter).await;

    assert_eq!(CommandOutcome::Success, outcome);
    let calls = helm.calls();
    assert_eq!(3, calls.len());
    assert_eq!(vec!["uninstall", "shop-staging", "--namespace", "apps"], calls[1]);
    assert_eq!(vec!["uninstall", "shop-prod", "--namespace", "apps"], calls[2]);
    assert_eq!(
        vec!["App \"shop\" uninstalled successfully!".to_owned()],
        reporter.lines_of(ReportKind::Success)
    );
}

#[tokio::test]
async fn uninstall_single_env_test() {
    let helm = FakeHelm::default().responding("list", "shop-staging\nshop-prod\n");
    let reporter = RecordingReporter::default();

    let outcome = command(Some("prod")).execute(&helm, &reporter).await;

    assert_eq!(CommandOutcome::Success, outcome);
    assert_eq!(2, helm.calls().len());
    assert_eq!("shop-prod", helm.calls()[1][1]);
}

#[tokio::test]
async fn no_release_is_failure_test() {
    let helm = FakeHelm::default().responding("list", "blog\n");
    let reporter = RecordingReporter::default();

    let outcome = command(None).execute(&helm, &reporter).await;

    assert_eq!(CommandOutcome::Failure, outcome);
    assert_eq!(1, helm.calls().len());
}

#[tokio::test]
async fn failed_release_does_not_stop_others_test() {
    let helm = FakeHelm::default()
        .responding("list", "shop-staging\nshop-prod\n")
        .failing("uninstall shop-staging", 1, "release: not found");
    let reporter = RecordingReporter::default();

    let outcome = command(None).execute(&helm, &reporter).await;

    assert_eq!(CommandOutcome::Failure, outcome);
    assert_eq!(3, helm.calls().len());
    assert_eq!(1, reporter.lines_of(ReportKind::Warning).len());
    assert_eq!(vec!["Release \"shop-prod\" uninstalled.".to_owned()], reporter.lines_of(ReportKind::Info));
}

#[tokio::test]
async fn uninstall_leaves_other_apps_untouched_test() {
    let helm = FakeHelm::default().responding("list", "shop\nshop-api\nshop-api-prod\n");
    let reporter = RecordingReporter::default();

    let outcome = command(None).execute(&helm, &reporter).await;

    assert_eq!(CommandOutcome::Success, outcome);
    let calls = helm.calls();
    assert_eq!(2, calls.len());
    assert_eq!(vec!["uninstall", "shop", "--namespace", "apps"], calls[1]);
}
