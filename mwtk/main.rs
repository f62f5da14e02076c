use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use mwtk_config::{APP_NAME, APP_VERSION, Config};
use mwtk_kube::client::KubernetesClient;
use mwtk_kube::KubeCluster;
use mwtk_tasks::commands::{
    AppInstallCommand, AppUninstallCommand, CommandOutcome, ConfigCreateCommand, SuperUserCreateCommand,
    SuperUserDeleteCommand,
};
use mwtk_tasks::{ConfirmationGate, ConfirmationPolicy, ConsolePrompter, ConsoleReporter, DeclinePolicy, HelmCli};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use tokio::runtime::Builder;
use tracing::{error, info};

pub mod cli;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let _logging_guard = mwtk_common::logging::initialize(APP_NAME)?;
    info!("{} v{} started", APP_NAME, APP_VERSION);

    match run_application(args) {
        Ok(outcome) => {
            info!("{} v{} stopped with {:?}", APP_NAME, APP_VERSION, outcome);
            Ok(ExitCode::from(outcome.exit_code()))
        },
        Err(error) => {
            error!("{} v{} terminated with an error: {}", APP_NAME, APP_VERSION, error);
            Err(error)
        },
    }
}

fn run_application(args: Args) -> Result<CommandOutcome> {
    let rt = Builder::new_multi_thread().enable_all().build()?;
    let config = rt.block_on(Config::load_or_create())?;

    rt.block_on(run_command(args, config))
}

async fn run_command(args: Args, config: Config) -> Result<CommandOutcome> {
    let reporter = ConsoleReporter;
    let prompter = ConsolePrompter;
    let interactive = !args.no_interaction && std::io::stdin().is_terminal();
    let kube_config_path = config.kube_config_path(args.kube_config.as_deref());

    let outcome = match args.command {
        Command::SuperUserDelete(delete) => {
            let cluster = connect(&kube_config_path, args.context.as_deref(), &config).await?;
            let policy = ConfirmationPolicy::from_flags(delete.force, delete.yes, interactive);
            let gate = ConfirmationGate::new(&prompter, policy, config.managed_by.as_str());
            let decline_policy = DeclinePolicy::from(delete.stop_on_decline || config.deletion.stop_on_decline);

            SuperUserDeleteCommand::new(delete.service_account, delete.namespace.resolve(&config), decline_policy)
                .execute(&cluster, &gate, &reporter)
                .await
        },
        Command::SuperUserCreate(create) => {
            let cluster = connect(&kube_config_path, args.context.as_deref(), &config).await?;

            SuperUserCreateCommand::new(
                create.service_account,
                create.namespace.resolve(&config),
                config.managed_by.clone(),
            )
            .execute(&cluster, &reporter)
            .await
        },
        Command::ConfigCreate(create) => {
            ConfigCreateCommand::new(kube_config_path, create.certificate, create.force, interactive)
                .execute(&prompter, &reporter)
                .await
        },
        Command::AppInstall(install) => {
            let helm = HelmCli::new(config.helm.binary.as_str(), Some(kube_config_path), args.context);
            let namespace = install.namespace.resolve(&config);

            AppInstallCommand {
                app: install.app,
                chart: install.chart,
                env: install.env,
                namespace,
                values: install.values,
            }
            .execute(&helm, &reporter)
            .await
        },
        Command::AppUninstall(uninstall) => {
            let helm = HelmCli::new(config.helm.binary.as_str(), Some(kube_config_path), args.context);
            let namespace = uninstall.namespace.resolve(&config);

            AppUninstallCommand {
                app: uninstall.app,
                env: uninstall.env,
                environments: config.helm.environments.clone(),
                namespace,
            }
            .execute(&helm, &reporter)
            .await
        },
    };

    Ok(outcome)
}

async fn connect(kube_config_path: &Path, context: Option<&str>, config: &Config) -> Result<KubeCluster> {
    let client = KubernetesClient::new(kube_config_path, context).await?;
    Ok(KubeCluster::new(client.get_client(), config.deletion.propagation_policy))
}
