use clap::{Args as ClapArgs, Parser, Subcommand};
use mwtk_config::Config;
use std::path::PathBuf;

#[cfg(test)]
#[path = "./cli.tests.rs"]
mod cli_tests;

/// mwtk manages apps and access credentials in a Kubernetes cluster.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the kubeconfig file (defaults to $HOME/.kube/config).
    #[arg(long, global = true, env = "KUBECONFIG")]
    pub kube_config: Option<String>,

    /// Context to use from the kubeconfig file.
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// Do not ask any interactive question.
    #[arg(long, short = 'n', global = true)]
    pub no_interaction: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Installs an app using Helm.
    #[command(name = "app:install")]
    AppInstall(AppInstallArgs),

    /// Uninstalls an app using Helm.
    #[command(name = "app:uninstall")]
    AppUninstall(AppUninstallArgs),

    /// Creates a new local kubectl config file.
    #[command(name = "config:create")]
    ConfigCreate(ConfigCreateArgs),

    /// Creates a super-user service account in the given namespace.
    #[command(name = "super-user:create")]
    SuperUserCreate(SuperUserCreateArgs),

    /// Deletes a super-user service account from the given namespace.
    #[command(name = "super-user:delete")]
    SuperUserDelete(SuperUserDeleteArgs),
}

/// Namespace option shared by the namespaced commands.
#[derive(ClapArgs, Debug, Default)]
pub struct NamespaceArg {
    /// The namespace to work in (defaults to the configured namespace).
    #[arg(long)]
    pub namespace: Option<String>,
}

impl NamespaceArg {
    /// Returns the namespace option or the one from configuration.
    pub fn resolve(&self, config: &Config) -> String {
        self.namespace.clone().unwrap_or_else(|| config.namespace.clone())
    }
}

#[derive(ClapArgs, Debug)]
pub struct AppInstallArgs {
    /// The app name.
    pub app: String,

    /// The chart to install (e.g. "repo/chart" or a local path).
    pub chart: String,

    /// Runs this command just on a specific env (e.g. "staging").
    #[arg(long)]
    pub env: Option<String>,

    /// Values file passed to Helm.
    #[arg(long, short = 'f')]
    pub values: Option<PathBuf>,

    #[command(flatten)]
    pub namespace: NamespaceArg,
}

#[derive(ClapArgs, Debug)]
pub struct AppUninstallArgs {
    /// The app name.
    pub app: String,

    /// Runs this command just on a specific env (e.g. "staging").
    #[arg(long)]
    pub env: Option<String>,

    #[command(flatten)]
    pub namespace: NamespaceArg,
}

#[derive(ClapArgs, Debug)]
pub struct ConfigCreateArgs {
    /// Path to the CA certificate file.
    #[arg(long, short = 'c', default_value = "./ca.crt")]
    pub certificate: PathBuf,

    /// Overwrite existing config.
    #[arg(long)]
    pub force: bool,
}

#[derive(ClapArgs, Debug)]
pub struct SuperUserCreateArgs {
    /// The service account name.
    pub service_account: String,

    #[command(flatten)]
    pub namespace: NamespaceArg,
}

#[derive(ClapArgs, Debug)]
pub struct SuperUserDeleteArgs {
    /// The service account name.
    pub service_account: String,

    #[command(flatten)]
    pub namespace: NamespaceArg,

    /// Deletes resources without asking, even if they were not created by this CLI.
    #[arg(long)]
    pub force: bool,

    /// Answers "yes" to every confirmation (also in non-interactive mode).
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Stops deleting remaining resources after the first declined one.
    #[arg(long)]
    pub stop_on_decline: bool,
}
