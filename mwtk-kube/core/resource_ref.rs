use std::fmt::Display;

use super::ResourceKind;

#[cfg(test)]
#[path = "./resource_ref.tests.rs"]
mod resource_ref_tests;

/// Points to the specific namespaced kubernetes object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub name: String,
    pub namespace: String,
}

impl ResourceRef {
    /// Creates new [`ResourceRef`] for an explicitly named object.
    pub fn new(kind: ResourceKind, name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Creates new [`ResourceRef`] with the name derived from `base` identifier and `kind`.
    pub fn derived(kind: ResourceKind, base: &str, namespace: impl Into<String>) -> Self {
        Self::new(kind, kind.resource_name(base), namespace)
    }
}

impl Display for ResourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} \"{}\" (ns: {})", self.kind, self.name, self.namespace)
    }
}
