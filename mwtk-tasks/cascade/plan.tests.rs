use super::*;

#[test]
fn super_user_plan_order_test() {
    let plan = DeletionPlan::super_user("ops", "apps");

    assert_eq!(3, plan.len());
    assert_eq!(
        vec![
            ResourceRef::new(ResourceKind::RoleBinding, "ops-role-binding", "apps"),
            ResourceRef::new(ResourceKind::Role, "ops-role", "apps"),
            ResourceRef::new(ResourceKind::ServiceAccount, "ops", "apps"),
        ],
        plan.iter().cloned().collect::<Vec<_>>()
    );
}

#[test]
fn super_user_plan_is_deterministic_test() {
    assert_eq!(DeletionPlan::super_user("ops", "apps"), DeletionPlan::super_user("ops", "apps"));
    assert_ne!(DeletionPlan::super_user("ops", "apps"), DeletionPlan::super_user("ops", "default"));
}

#[test]
fn super_user_plan_subject_test() {
    assert_eq!("Service account \"ops\"", DeletionPlan::super_user("ops", "apps").subject());
}
