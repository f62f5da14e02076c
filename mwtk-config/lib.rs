pub use self::config::{
    APP_NAME, APP_VERSION, Config, DEFAULT_MANAGED_BY, DEFAULT_NAMESPACE, Deletion, Helm, PropagationPolicy,
};
pub use self::errors::ConfigError;
pub use self::persistable::{Persistable, load_or_create_default};

mod config;
mod errors;
mod persistable;
