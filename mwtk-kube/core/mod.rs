pub use self::kind::ResourceKind;
pub use self::resource_ref::ResourceRef;

/// Label used to mark resources that were provisioned by this CLI.
pub const MANAGED_BY_LABEL: &str = "app.kubernetes.io/managed-by";

mod kind;
mod resource_ref;
