use mwtk_kube::{ResourceKind, ResourceRef};
use rstest::rstest;

use crate::testing::FakePrompter;

use super::*;

fn found(managed_by: Option<&str>) -> FoundResource {
    FoundResource {
        resource: ResourceRef::derived(ResourceKind::Role, "ops", "apps"),
        uid: None,
        managed_by: managed_by.map(String::from),
    }
}

#[rstest]
#[case(true, false, false, ConfirmationPolicy::AssumeYes)]
#[case(false, true, false, ConfirmationPolicy::AssumeYes)]
#[case(true, false, true, ConfirmationPolicy::AssumeYes)]
#[case(false, false, true, ConfirmationPolicy::Prompt)]
#[case(false, false, false, ConfirmationPolicy::AssumeNo)]
fn from_flags_test(#[case] force: bool, #[case] yes: bool, #[case] interactive: bool, #[case] expected: ConfirmationPolicy) {
    assert_eq!(expected, ConfirmationPolicy::from_flags(force, yes, interactive));
}

#[test]
fn forced_gate_does_not_prompt_test() {
    let prompter = FakePrompter::answering(&[]);
    let gate = ConfirmationGate::new(&prompter, ConfirmationPolicy::AssumeYes, "mwtk");

    assert_eq!(Confirmation::Proceed, gate.confirm(&found(None)));
    assert!(prompter.asked().is_empty());
}

#[test]
fn non_interactive_gate_declines_test() {
    let prompter = FakePrompter::answering(&[]);
    let gate = ConfirmationGate::new(&prompter, ConfirmationPolicy::AssumeNo, "mwtk");

    assert_eq!(Confirmation::Cancelled, gate.confirm(&found(Some("mwtk"))));
    assert!(prompter.asked().is_empty());
}

#[test]
fn prompt_gate_follows_answer_test() {
    let prompter = FakePrompter::answering(&[true, false]);
    let gate = ConfirmationGate::new(&prompter, ConfirmationPolicy::Prompt, "mwtk");

    assert_eq!(Confirmation::Proceed, gate.confirm(&found(Some("mwtk"))));
    assert_eq!(Confirmation::Cancelled, gate.confirm(&found(Some("mwtk"))));
    assert_eq!(2, prompter.asked().len());
}

#[test]
fn prompt_error_declines_test() {
    let prompter = FakePrompter::failing();
    let gate = ConfirmationGate::new(&prompter, ConfirmationPolicy::Prompt, "mwtk");

    assert_eq!(Confirmation::Cancelled, gate.confirm(&found(Some("mwtk"))));
}

#[test]
fn prompt_text_test() {
    let prompter = FakePrompter::answering(&[]);
    let gate = ConfirmationGate::new(&prompter, ConfirmationPolicy::Prompt, "mwtk");

    assert_eq!(
        "Delete role \"ops-role\" from namespace \"apps\"?",
        gate.prompt_text(&found(Some("mwtk")))
    );
    assert_eq!(
        "Delete role \"ops-role\" from namespace \"apps\"? Note that it was not created by mwtk.",
        gate.prompt_text(&found(Some("helm")))
    );
}
