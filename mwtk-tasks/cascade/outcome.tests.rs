use rstest::rstest;

use super::*;

#[rstest]
#[case(0, 3, Verdict::NoneDeleted)]
#[case(1, 3, Verdict::PartiallyDeleted)]
#[case(2, 3, Verdict::PartiallyDeleted)]
#[case(3, 3, Verdict::FullyDeleted)]
#[case(0, 1, Verdict::NoneDeleted)]
#[case(1, 1, Verdict::FullyDeleted)]
#[case(4, 5, Verdict::PartiallyDeleted)]
#[case(0, 0, Verdict::NoneDeleted)]
fn verdict_test(#[case] deleted: usize, #[case] total: usize, #[case] expected: Verdict) {
    assert_eq!(expected, RunOutcome::new(deleted, total).verdict());
}

#[rstest]
#[case(0, 3, "No resource has been deleted.")]
#[case(1, 3, "Only 1 resource (out of 3) has been deleted successfully.")]
#[case(2, 3, "Only 2 resources (out of 3) have been deleted successfully.")]
#[case(3, 3, "Service account \"ops\" deleted successfully!")]
#[case(1, 5, "Only 1 resource (out of 5) has been deleted successfully.")]
fn message_test(#[case] deleted: usize, #[case] total: usize, #[case] expected: &str) {
    assert_eq!(expected, RunOutcome::new(deleted, total).message("Service account \"ops\""));
}

#[test]
fn exit_classification_test() {
    assert_eq!(CommandOutcome::Invalid, RunOutcome::new(0, 3).command_outcome());
    assert_eq!(CommandOutcome::Invalid, RunOutcome::new(2, 3).command_outcome());
    assert_eq!(CommandOutcome::Success, RunOutcome::new(3, 3).command_outcome());

    assert_eq!(ReportKind::Warning, RunOutcome::new(0, 3).report_kind());
    assert_eq!(ReportKind::Error, RunOutcome::new(1, 3).report_kind());
    assert_eq!(ReportKind::Success, RunOutcome::new(3, 3).report_kind());
}
