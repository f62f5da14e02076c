use super::*;

#[test]
fn super_user_manifests_order_test() {
    let manifests = super_user_manifests("ops", "apps", "mwtk");
    let refs = manifests.iter().map(Manifest::resource_ref).collect::<Vec<_>>();

    assert_eq!(
        vec![
            ResourceRef::new(ResourceKind::ServiceAccount, "ops", "apps"),
            ResourceRef::new(ResourceKind::Role, "ops-role", "apps"),
            ResourceRef::new(ResourceKind::RoleBinding, "ops-role-binding", "apps"),
            ResourceRef::new(ResourceKind::Secret, "ops-token", "apps"),
        ],
        refs
    );
}

#[test]
fn super_user_role_binding_test() {
    let manifests = super_user_manifests("ops", "apps", "mwtk");
    let Manifest::RoleBinding(binding) = &manifests[2] else {
        panic!("expected role binding");
    };

    assert_eq!("ops-role", binding.role_ref.name);
    assert_eq!("Role", binding.role_ref.kind);
    let subjects = binding.subjects.as_ref().unwrap();
    assert_eq!(1, subjects.len());
    assert_eq!("ServiceAccount", subjects[0].kind);
    assert_eq!("ops", subjects[0].name);
    assert_eq!(Some("apps"), subjects[0].namespace.as_deref());
}

#[test]
fn super_user_labels_test() {
    for manifest in super_user_manifests("ops", "apps", "custom") {
        let metadata = match &manifest {
            Manifest::ServiceAccount(o) => &o.metadata,
            Manifest::Role(o) => &o.metadata,
            Manifest::RoleBinding(o) => &o.metadata,
            Manifest::Secret(o) => &o.metadata,
        };

        let labels = metadata.labels.as_ref().unwrap();
        assert_eq!(Some(&"custom".to_owned()), labels.get(MANAGED_BY_LABEL));
    }
}

#[test]
fn super_user_token_test() {
    let manifests = super_user_manifests("ops", "apps", "mwtk");
    let Manifest::Secret(secret) = &manifests[3] else {
        panic!("expected secret");
    };

    assert_eq!(Some("kubernetes.io/service-account-token"), secret.type_.as_deref());
    let annotations = secret.metadata.annotations.as_ref().unwrap();
    assert_eq!(Some(&"ops".to_owned()), annotations.get("kubernetes.io/service-account.name"));
}
