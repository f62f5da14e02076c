use tracing::{info, warn};

use crate::commands::CommandOutcome;
use crate::{HelmAppsManager, HelmRunner, Reporter};

#[cfg(test)]
#[path = "./app_uninstall.tests.rs"]
mod app_uninstall_tests;

/// Command that uninstalls an app using helm.\
/// **Note** that without `env` the app release is uninstalled from all known `environments`.
pub struct AppUninstallCommand {
    pub app: String,
    pub env: Option<String>,
    pub environments: Vec<String>,
    pub namespace: String,
}

impl AppUninstallCommand {
    /// Uninstalls all matching releases, each one independently of the others.
    pub async fn execute<H: HelmRunner, R: Reporter>(self, helm: &H, reporter: &R) -> CommandOutcome {
        let manager = HelmAppsManager::new(helm);
        let releases = match manager
            .find_releases(&self.app, self.env.as_deref(), &self.environments, &self.namespace)
            .await
        {
            Ok(releases) => releases,
            Err(error) => {
                reporter.error(&format!("Failed listing releases: {error}."));
                return CommandOutcome::Failure;
            },
        };

        if releases.is_empty() {
            reporter.error(&format!(
                "No release found for the app \"{}\" in namespace \"{}\".",
                self.app, self.namespace
            ));
            return CommandOutcome::Failure;
        }

        let mut failed = 0;
        for release in &releases {
            match manager.uninstall(release, &self.namespace).await {
                Ok(()) => {
                    info!("Release {} uninstalled from {}", release, self.namespace);
                    reporter.info(&format!("Release \"{release}\" uninstalled."));
                },
                Err(error) => {
                    warn!("Cannot uninstall release {}: {}", release, error);
                    reporter.warning(&format!("Failed uninstalling the release \"{release}\": {error}."));
                    failed += 1;
                },
            }
        }

        if failed > 0 {
            return CommandOutcome::Failure;
        }

        reporter.success(&format!("App \"{}\" uninstalled successfully!", self.app));
        CommandOutcome::Success
    }
}
