use rstest::rstest;
use std::collections::BTreeMap;

use super::*;

#[rstest]
#[case(None, None)]
#[case(Some(PropagationPolicy::Orphan), Some(kube::api::PropagationPolicy::Orphan))]
#[case(Some(PropagationPolicy::Background), Some(kube::api::PropagationPolicy::Background))]
#[case(Some(PropagationPolicy::Foreground), Some(kube::api::PropagationPolicy::Foreground))]
fn delete_params_propagation_test(
    #[case] policy: Option<PropagationPolicy>,
    #[case] expected: Option<kube::api::PropagationPolicy>,
) {
    let params = delete_params(policy, None);

    assert_eq!(format!("{expected:?}"), format!("{:?}", params.propagation_policy));
    assert!(params.preconditions.is_none());
}

#[test]
fn delete_params_uid_precondition_test() {
    let params = delete_params(None, Some("0b7e5a3c"));

    let preconditions = params.preconditions.expect("uid precondition");
    assert_eq!(Some("0b7e5a3c"), preconditions.uid.as_deref());
    assert_eq!(None, preconditions.resource_version);
}

#[test]
fn found_resource_from_metadata_test() {
    let metadata = ObjectMeta {
        name: Some("ops-role".to_owned()),
        uid: Some("0b7e5a3c".to_owned()),
        labels: Some(BTreeMap::from([(MANAGED_BY_LABEL.to_owned(), "mwtk".to_owned())])),
        ..Default::default()
    };

    let found = FoundResource::from_metadata(ResourceRef::derived(ResourceKind::Role, "ops", "apps"), &metadata);

    assert_eq!(Some("0b7e5a3c"), found.uid.as_deref());
    assert!(found.is_managed_by("mwtk"));
    assert!(!found.is_managed_by("helm"));
}

#[test]
fn api_error_keeps_message_test() {
    let error = ClusterError::Api {
        message: "Precondition failed: UID in precondition: 0b7e5a3c, UID in object meta: 9f1d".to_owned(),
        code: 409,
    };

    assert_eq!(error.message(), error.to_string());
}
