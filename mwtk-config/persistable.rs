use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::ConfigError;

/// Configurations that can be saved to and load from a file.
pub trait Persistable<T> {
    /// Returns the default configuration path.
    fn default_path() -> PathBuf;

    /// Loads configuration from the file.
    fn load(path: &Path) -> impl Future<Output = Result<T, ConfigError>> + Send;

    /// Saves configuration to the file.
    fn save(&self, path: &Path) -> impl Future<Output = Result<(), ConfigError>> + Send;
}

/// Loads configuration from `path` or creates (and saves) a default one if the file does not exist.\
/// **Note** that a file that exists but cannot be read or parsed is left untouched and the defaults are used instead.
pub async fn load_or_create_default<T: Persistable<T> + Default>(path: &Path) -> Result<T, ConfigError> {
    match T::load(path).await {
        Ok(configuration) => Ok(configuration),
        Err(ConfigError::IoError(error)) if error.kind() == ErrorKind::NotFound => {
            tracing::info!("Config file {} not found, creating default one", path.display());
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let configuration = T::default();
            configuration.save(path).await?;
            Ok(configuration)
        },
        Err(error) => {
            tracing::error!("Cannot load config from {}: {}", path.display(), error);
            Ok(T::default())
        },
    }
}

/// Reads the whole file into a string.
pub(crate) async fn read_file(path: &Path) -> Result<String, ConfigError> {
    let mut file = File::open(path).await?;

    let mut content = String::new();
    file.read_to_string(&mut content).await?;

    Ok(content)
}

/// Writes `content` to the file, replacing it if it already exists.
pub(crate) async fn write_file(path: &Path, content: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path).await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;

    Ok(())
}
