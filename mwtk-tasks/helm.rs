use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{info, warn};

#[cfg(test)]
#[path = "./helm.tests.rs"]
mod helm_tests;

/// Possible errors when running helm.
#[derive(thiserror::Error, Debug)]
pub enum HelmError {
    /// Helm binary could not be started.
    #[error("cannot run helm: {0}")]
    Spawn(#[from] std::io::Error),

    /// Helm exited with a non-zero status.
    #[error("helm exited with code {}: {stderr}", .code.map_or_else(|| "n/a".to_owned(), |c| c.to_string()))]
    Failed { code: Option<i32>, stderr: String },
}

/// Runs helm sub-commands and returns their standard output.
pub trait HelmRunner {
    fn run(&self, args: &[String]) -> impl Future<Output = Result<String, HelmError>>;
}

/// [`HelmRunner`] that shells out to the helm binary.
pub struct HelmCli {
    binary: String,
    kube_config: Option<PathBuf>,
    context: Option<String>,
}

impl HelmCli {
    /// Creates new [`HelmCli`] instance.
    pub fn new(binary: impl Into<String>, kube_config: Option<PathBuf>, context: Option<String>) -> Self {
        Self {
            binary: binary.into(),
            kube_config,
            context,
        }
    }
}

impl HelmRunner for HelmCli {
    async fn run(&self, args: &[String]) -> Result<String, HelmError> {
        let mut command = Command::new(&self.binary);
        command.args(args);
        if let Some(kube_config) = &self.kube_config {
            command.arg("--kubeconfig").arg(kube_config);
        }
        if let Some(context) = &self.context {
            command.arg("--kube-context").arg(context);
        }

        info!("Running {} {}", self.binary, args.join(" "));
        let output = command.output().await?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            warn!("{} failed: {}", self.binary, stderr);
            Err(HelmError::Failed {
                code: output.status.code(),
                stderr,
            })
        }
    }
}

/// Manages applications installed as helm releases.\
/// **Note** that a release is named `{app}-{env}` when the environment is given, `{app}` otherwise.
pub struct HelmAppsManager<'a, H: HelmRunner> {
    helm: &'a H,
}

impl<'a, H: HelmRunner> HelmAppsManager<'a, H> {
    /// Creates new [`HelmAppsManager`] instance.
    pub fn new(helm: &'a H) -> Self {
        Self { helm }
    }

    /// Returns release name for the `app` in the optional `env`.
    pub fn release_name(app: &str, env: Option<&str>) -> String {
        match env {
            Some(env) if !env.is_empty() => format!("{app}-{env}"),
            _ => app.to_owned(),
        }
    }

    /// Installs or upgrades the `app` from the `chart` and returns the release name.
    pub async fn install(
        &self,
        app: &str,
        chart: &str,
        env: Option<&str>,
        namespace: &str,
        values: Option<&Path>,
    ) -> Result<String, HelmError> {
        let release = Self::release_name(app, env);
        let mut args = vec![
            "upgrade".to_owned(),
            "--install".to_owned(),
            release.clone(),
            chart.to_owned(),
            "--namespace".to_owned(),
            namespace.to_owned(),
            "--create-namespace".to_owned(),
        ];
        if let Some(values) = values {
            args.push("--values".to_owned());
            args.push(values.display().to_string());
        }

        self.helm.run(&args).await?;
        Ok(release)
    }

    /// Returns names of all releases in the `namespace`.
    pub async fn list_releases(&self, namespace: &str) -> Result<Vec<String>, HelmError> {
        let args = ["list", "--short", "--namespace", namespace].map(String::from);
        let output = self.helm.run(&args).await?;

        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// Returns releases that belong to the `app`, either in the given `env` or in all known `environments`.\
    /// **Note** that other `{app}-*` releases are left out, they can belong to a different app.
    pub async fn find_releases(
        &self,
        app: &str,
        env: Option<&str>,
        environments: &[String],
        namespace: &str,
    ) -> Result<Vec<String>, HelmError> {
        let releases = self.list_releases(namespace).await?;
        let found = match env {
            Some(env) if !env.is_empty() => {
                let release = Self::release_name(app, Some(env));
                releases.into_iter().filter(|r| *r == release).collect()
            },
            _ => releases
                .into_iter()
                .filter(|r| r == app || is_env_release(r, app, environments))
                .collect(),
        };

        Ok(found)
    }

    /// Uninstalls the `release` from the `namespace`.
    pub async fn uninstall(&self, release: &str, namespace: &str) -> Result<(), HelmError> {
        let args = ["uninstall", release, "--namespace", namespace].map(String::from);
        self.helm.run(&args).await?;

        Ok(())
    }
}

fn is_env_release(release: &str, app: &str, environments: &[String]) -> bool {
    release
        .strip_prefix(app)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|env| environments.iter().any(|e| e == env))
}
