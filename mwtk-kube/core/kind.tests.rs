use rstest::rstest;

use super::*;

#[rstest]
#[case(ResourceKind::ServiceAccount, "admin")]
#[case(ResourceKind::Role, "admin-role")]
#[case(ResourceKind::RoleBinding, "admin-role-binding")]
#[case(ResourceKind::Secret, "admin-token")]
fn resource_name_test(#[case] kind: ResourceKind, #[case] expected: &str) {
    assert_eq!(expected, kind.resource_name("admin"));
}

#[test]
fn display_test() {
    assert_eq!("role binding", ResourceKind::RoleBinding.to_string());
    assert_eq!("service account", format!("{}", ResourceKind::ServiceAccount));
}
