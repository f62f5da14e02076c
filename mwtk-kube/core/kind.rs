use std::fmt::Display;

#[cfg(test)]
#[path = "./kind.tests.rs"]
mod kind_tests;

/// Kubernetes object types managed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    ServiceAccount,
    Role,
    RoleBinding,
    Secret,
}

impl ResourceKind {
    /// Returns human-readable name of the kind, e.g. `role binding`.
    pub const fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::ServiceAccount => "service account",
            ResourceKind::Role => "role",
            ResourceKind::RoleBinding => "role binding",
            ResourceKind::Secret => "secret",
        }
    }

    /// Returns the Kubernetes `kind` of the object.
    pub const fn api_kind(&self) -> &'static str {
        match self {
            ResourceKind::ServiceAccount => "ServiceAccount",
            ResourceKind::Role => "Role",
            ResourceKind::RoleBinding => "RoleBinding",
            ResourceKind::Secret => "Secret",
        }
    }

    /// Returns suffix appended to the base identifier to build the object name.
    pub const fn name_suffix(&self) -> &'static str {
        match self {
            ResourceKind::ServiceAccount => "",
            ResourceKind::Role => "-role",
            ResourceKind::RoleBinding => "-role-binding",
            ResourceKind::Secret => "-token",
        }
    }

    /// Derives the object name for the given `base` identifier.
    pub fn resource_name(&self, base: &str) -> String {
        format!("{base}{}", self.name_suffix())
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
