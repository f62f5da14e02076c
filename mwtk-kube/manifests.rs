use k8s_openapi::api::core::v1::{Secret, ServiceAccount};
use k8s_openapi::api::rbac::v1::{PolicyRule, Role, RoleBinding, RoleRef, Subject};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

use crate::{MANAGED_BY_LABEL, ResourceKind, ResourceRef};

#[cfg(test)]
#[path = "./manifests.tests.rs"]
mod manifests_tests;

const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";
const SERVICE_ACCOUNT_NAME_ANNOTATION: &str = "kubernetes.io/service-account.name";
const SERVICE_ACCOUNT_TOKEN_TYPE: &str = "kubernetes.io/service-account-token";

/// Kubernetes object that can be created in the cluster.
#[derive(Debug, Clone, PartialEq)]
pub enum Manifest {
    ServiceAccount(ServiceAccount),
    Role(Role),
    RoleBinding(RoleBinding),
    Secret(Secret),
}

impl Manifest {
    /// Returns the kind of the described object.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Manifest::ServiceAccount(_) => ResourceKind::ServiceAccount,
            Manifest::Role(_) => ResourceKind::Role,
            Manifest::RoleBinding(_) => ResourceKind::RoleBinding,
            Manifest::Secret(_) => ResourceKind::Secret,
        }
    }

    /// Returns [`ResourceRef`] pointing to the described object.
    pub fn resource_ref(&self) -> ResourceRef {
        let metadata = match self {
            Manifest::ServiceAccount(object) => &object.metadata,
            Manifest::Role(object) => &object.metadata,
            Manifest::RoleBinding(object) => &object.metadata,
            Manifest::Secret(object) => &object.metadata,
        };

        ResourceRef::new(
            self.kind(),
            metadata.name.clone().unwrap_or_default(),
            metadata.namespace.clone().unwrap_or_default(),
        )
    }
}

/// Builds all objects that make up a super-user `account` in the `namespace`.\
/// **Note** that objects are ordered from the least dependent to the most dependent one.
pub fn super_user_manifests(account: &str, namespace: &str, managed_by: &str) -> Vec<Manifest> {
    let role_name = ResourceKind::Role.resource_name(account);

    let service_account = ServiceAccount {
        metadata: metadata(ResourceKind::ServiceAccount, account, namespace, managed_by),
        ..Default::default()
    };

    let role = Role {
        metadata: metadata(ResourceKind::Role, account, namespace, managed_by),
        rules: Some(vec![PolicyRule {
            api_groups: Some(vec!["*".to_owned()]),
            resources: Some(vec!["*".to_owned()]),
            verbs: vec!["*".to_owned()],
            ..Default::default()
        }]),
    };

    let role_binding = RoleBinding {
        metadata: metadata(ResourceKind::RoleBinding, account, namespace, managed_by),
        role_ref: RoleRef {
            api_group: RBAC_API_GROUP.to_owned(),
            kind: ResourceKind::Role.api_kind().to_owned(),
            name: role_name,
        },
        subjects: Some(vec![Subject {
            kind: ResourceKind::ServiceAccount.api_kind().to_owned(),
            name: account.to_owned(),
            namespace: Some(namespace.to_owned()),
            ..Default::default()
        }]),
    };

    let mut token_metadata = metadata(ResourceKind::Secret, account, namespace, managed_by);
    token_metadata.annotations = Some(BTreeMap::from([(
        SERVICE_ACCOUNT_NAME_ANNOTATION.to_owned(),
        account.to_owned(),
    )]));
    let token = Secret {
        metadata: token_metadata,
        type_: Some(SERVICE_ACCOUNT_TOKEN_TYPE.to_owned()),
        ..Default::default()
    };

    vec![
        Manifest::ServiceAccount(service_account),
        Manifest::Role(role),
        Manifest::RoleBinding(role_binding),
        Manifest::Secret(token),
    ]
}

fn metadata(kind: ResourceKind, account: &str, namespace: &str, managed_by: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(kind.resource_name(account)),
        namespace: Some(namespace.to_owned()),
        labels: Some(BTreeMap::from([(MANAGED_BY_LABEL.to_owned(), managed_by.to_owned())])),
        ..Default::default()
    }
}
