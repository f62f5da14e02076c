use std::path::PathBuf;

use crate::commands::CommandOutcome;
use crate::{HelmAppsManager, HelmRunner, Reporter};

#[cfg(test)]
#[path = "./app_install.tests.rs"]
mod app_install_tests;

/// Command that installs (or upgrades) an app using helm.
pub struct AppInstallCommand {
    pub app: String,
    pub chart: String,
    pub env: Option<String>,
    pub namespace: String,
    pub values: Option<PathBuf>,
}

impl AppInstallCommand {
    /// Installs the app release.
    pub async fn execute<H: HelmRunner, R: Reporter>(self, helm: &H, reporter: &R) -> CommandOutcome {
        if let Some(values) = &self.values
            && !values.is_file()
        {
            reporter.error(&format!("No values file found at \"{}\".", values.display()));
            return CommandOutcome::Invalid;
        }

        let manager = HelmAppsManager::new(helm);
        let installed = manager
            .install(
                &self.app,
                &self.chart,
                self.env.as_deref(),
                &self.namespace,
                self.values.as_deref(),
            )
            .await;

        match installed {
            Ok(release) => {
                tracing::info!("Release {} installed in {}", release, self.namespace);
                reporter.success(&format!("App \"{}\" installed successfully!", self.app));
                CommandOutcome::Success
            },
            Err(error) => {
                reporter.error(&format!("Failed installing the app \"{}\": {}.", self.app, error));
                CommandOutcome::Failure
            },
        }
    }
}
