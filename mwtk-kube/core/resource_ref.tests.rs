use super::*;

#[test]
fn derived_test() {
    let resource = ResourceRef::derived(ResourceKind::RoleBinding, "ops", "apps");

    assert_eq!(ResourceKind::RoleBinding, resource.kind);
    assert_eq!("ops-role-binding", resource.name);
    assert_eq!("apps", resource.namespace);
    assert_eq!(ResourceRef::new(ResourceKind::RoleBinding, "ops-role-binding", "apps"), resource);
}

#[test]
fn display_test() {
    let resource = ResourceRef::derived(ResourceKind::Role, "ops", "default");
    assert_eq!("role \"ops-role\" (ns: default)", resource.to_string());
}
