use crate::ReportKind;
use crate::testing::{FakeHelm, RecordingReporter};

use super::*;

fn command(values: Option<PathBuf>) -> AppInstallCommand {
    AppInstallCommand {
        app: "shop".to_owned(),
        chart: "repo/shop".to_owned(),
        env: Some("staging".to_owned()),
        namespace: "apps".to_owned(),
        values,
    }
}

#[tokio::test]
async fn install_test() {
    let helm = FakeHelm::default();
    let reporter = RecordingReporter::default();

    let outcome = command(None).execute(&helm, &reporter).await;

    assert_eq!(CommandOutcome::Success, outcome);
    assert_eq!("shop-staging", helm.calls()[0][2]);
    assert_eq!(
        vec!["App \"shop\" installed successfully!".to_owned()],
        reporter.lines_of(ReportKind::Success)
    );
}

#[tokio::test]
async fn missing_values_file_test() {
    let helm = FakeHelm::default();
    let reporter = RecordingReporter::default();

    let outcome = command(Some(PathBuf::from("/nonexistent/values.yaml")))
        .execute(&helm, &reporter)
        .await;

    assert_eq!(CommandOutcome::Invalid, outcome);
    assert!(helm.calls().is_empty());
}

#[tokio::test]
async fn helm_failure_test() {
    let helm = FakeHelm::default().failing("upgrade", 1, "chart not found");
    let reporter = RecordingReporter::default();

    let outcome = command(None).execute(&helm, &reporter).await;

    assert_eq!(CommandOutcome::Failure, outcome);
    assert_eq!(1, reporter.lines_of(ReportKind::Error).len());
}
