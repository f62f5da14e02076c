use kube::config::Kubeconfig;
use std::path::Path;

use crate::ReportKind;
use crate::testing::{FakePrompter, RecordingReporter};

use super::*;

fn write_certificate(dir: &Path) -> PathBuf {
    let path = dir.join("ca.crt");
    std::fs::write(&path, "-----BEGIN CERTIFICATE-----").unwrap();
    path
}

#[tokio::test]
async fn creates_config_test() {
    let dir = tempfile::tempdir().unwrap();
    let certificate = write_certificate(dir.path());
    let kube_config = dir.path().join("kube").join("config");
    let prompter = FakePrompter::typing(&["https://10.0.0.1:6443", "token-123"]);
    let reporter = RecordingReporter::default();

    let outcome = ConfigCreateCommand::new(kube_config.clone(), certificate, false, true)
        .execute(&prompter, &reporter)
        .await;

    assert_eq!(CommandOutcome::Success, outcome);
    assert_eq!(vec!["Cluster URL".to_owned(), "Access token".to_owned()], prompter.asked());
    let config = Kubeconfig::read_from(&kube_config).unwrap();
    assert_eq!("default-user", config.auth_infos[0].name);
    assert_eq!(
        vec!["New configuration file created successfully!".to_owned()],
        reporter.lines_of(ReportKind::Success)
    );
}

#[tokio::test]
async fn non_interactive_is_invalid_test() {
    let dir = tempfile::tempdir().unwrap();
    let certificate = write_certificate(dir.path());
    let prompter = FakePrompter::typing(&[]);
    let reporter = RecordingReporter::default();

    let outcome = ConfigCreateCommand::new(dir.path().join("config"), certificate, false, false)
        .execute(&prompter, &reporter)
        .await;

    assert_eq!(CommandOutcome::Invalid, outcome);
    assert!(prompter.asked().is_empty());
}

#[tokio::test]
async fn existing_config_requires_force_test() {
    let dir = tempfile::tempdir().unwrap();
    let certificate = write_certificate(dir.path());
    let kube_config = dir.path().join("config");
    std::fs::write(&kube_config, "old").unwrap();
    let reporter = RecordingReporter::default();

    let prompter = FakePrompter::typing(&[]);
    let outcome = ConfigCreateCommand::new(kube_config.clone(), certificate.clone(), false, true)
        .execute(&prompter, &reporter)
        .await;
    assert_eq!(CommandOutcome::Invalid, outcome);
    assert_eq!("old", std::fs::read_to_string(&kube_config).unwrap());

    let prompter = FakePrompter::typing(&["https://cluster", "token"]);
    let outcome = ConfigCreateCommand::new(kube_config.clone(), certificate, true, true)
        .execute(&prompter, &reporter)
        .await;
    assert_eq!(CommandOutcome::Success, outcome);
    assert_ne!("old", std::fs::read_to_string(&kube_config).unwrap());
}

#[tokio::test]
async fn missing_certificate_is_invalid_test() {
    let dir = tempfile::tempdir().unwrap();
    let prompter = FakePrompter::typing(&[]);
    let reporter = RecordingReporter::default();

    let outcome = ConfigCreateCommand::new(dir.path().join("config"), dir.path().join("missing.crt"), false, true)
        .execute(&prompter, &reporter)
        .await;

    assert_eq!(CommandOutcome::Invalid, outcome);
    assert!(reporter.lines_of(ReportKind::Error)[0].starts_with("No certificate found at"));
}

#[tokio::test]
async fn empty_answer_is_invalid_test() {
    let dir = tempfile::tempdir().unwrap();
    let certificate = write_certificate(dir.path());
    let kube_config = dir.path().join("config");
    let prompter = FakePrompter::typing(&["  "]);
    let reporter = RecordingReporter::default();

    let outcome = ConfigCreateCommand::new(kube_config.clone(), certificate, false, true)
        .execute(&prompter, &reporter)
        .await;

    assert_eq!(CommandOutcome::Invalid, outcome);
    assert!(!kube_config.exists());
    assert_eq!(vec!["Cluster URL cannot be empty.".to_owned()], reporter.lines_of(ReportKind::Error));
}
