pub use self::app_install::AppInstallCommand;
pub use self::app_uninstall::AppUninstallCommand;
pub use self::config_create::ConfigCreateCommand;
pub use self::super_user_create::SuperUserCreateCommand;
pub use self::super_user_delete::SuperUserDeleteCommand;

mod app_install;
mod app_uninstall;
mod config_create;
mod super_user_create;
mod super_user_delete;

/// Exit classification of a CLI command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    Failure,
    Invalid,
}

impl CommandOutcome {
    /// Returns process exit code for the outcome.
    pub const fn exit_code(&self) -> u8 {
        match self {
            CommandOutcome::Success => 0,
            CommandOutcome::Failure => 1,
            CommandOutcome::Invalid => 2,
        }
    }
}
