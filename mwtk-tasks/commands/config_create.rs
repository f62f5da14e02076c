use mwtk_kube::KubeconfigFile;
use std::path::PathBuf;
use tracing::error;

use crate::commands::CommandOutcome;
use crate::{Prompter, Reporter};

#[cfg(test)]
#[path = "./config_create.tests.rs"]
mod config_create_tests;

const DEFAULT_USER: &str = "default-user";

/// Command that creates a local kubeconfig file from the CA certificate, cluster URL and access token.
pub struct ConfigCreateCommand {
    pub kube_config_path: PathBuf,
    pub certificate_path: PathBuf,
    force: bool,
    interactive: bool,
}

impl ConfigCreateCommand {
    /// Creates new [`ConfigCreateCommand`] instance.
    pub fn new(kube_config_path: PathBuf, certificate_path: PathBuf, force: bool, interactive: bool) -> Self {
        Self {
            kube_config_path,
            certificate_path,
            force,
            interactive,
        }
    }

    /// Asks for the cluster details and writes the kubeconfig file.
    pub async fn execute<P: Prompter, R: Reporter>(self, prompter: &P, reporter: &R) -> CommandOutcome {
        if !self.interactive {
            reporter.error("This command cannot run in \"--no-interaction\" mode.");
            return CommandOutcome::Invalid;
        }

        if !self.force && self.kube_config_path.is_file() {
            reporter.error("A configuration file already exists, please use \"--force\" to overwrite it.");
            return CommandOutcome::Invalid;
        }

        if !self.certificate_path.is_file() {
            reporter.error(&format!(
                "No certificate found at \"{}\", please use \"--certificate\" to specify a custom path.",
                self.certificate_path.display()
            ));
            return CommandOutcome::Invalid;
        }

        let Some(url) = ask(prompter, reporter, "Cluster URL", false) else {
            return CommandOutcome::Invalid;
        };
        let Some(token) = ask(prompter, reporter, "Access token", true) else {
            return CommandOutcome::Invalid;
        };

        let certificate = match tokio::fs::read(&self.certificate_path).await {
            Ok(certificate) => certificate,
            Err(err) => {
                error!("Cannot read certificate {}: {}", self.certificate_path.display(), err);
                reporter.error(&format!("Cannot read the certificate: {err}."));
                return CommandOutcome::Failure;
            },
        };

        let config = KubeconfigFile::new(DEFAULT_USER, &certificate, &url, &token);
        if let Err(err) = config.write_to(&self.kube_config_path).await {
            error!("Cannot write kubeconfig {}: {}", self.kube_config_path.display(), err);
            reporter.error(&format!("Cannot write the configuration file: {err}."));
            return CommandOutcome::Failure;
        }

        reporter.success("New configuration file created successfully!");
        CommandOutcome::Success
    }
}

fn ask<P: Prompter, R: Reporter>(prompter: &P, reporter: &R, question: &str, secret: bool) -> Option<String> {
    let answer = if secret {
        prompter.ask_secret(question)
    } else {
        prompter.ask(question)
    };

    match answer {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_owned()),
        Ok(_) => {
            reporter.error(&format!("{question} cannot be empty."));
            None
        },
        Err(err) => {
            error!("Cannot ask for {}: {}", question, err);
            reporter.error(&format!("{question} cannot be read: {err}."));
            None
        },
    }
}
