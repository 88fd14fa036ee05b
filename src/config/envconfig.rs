use std::path::PathBuf;

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Variables backing an [`EnvConfig`] when they do not come from the process.
pub type EnvVars = config_rs::Map<String, String>;

/// Config assembled from `PREFIX`ed environment variables, `SEPARATOR`
/// splitting nested sections (`APP_DATABASE__URL` -> `database.url`).
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";
    /// Names an env file to load instead of searching for `.env`. Kept outside
    /// `PREFIX` so it never reaches the deserializer.
    const ENV_FILE_VAR: &'static str = "TODOS_ENV_FILE";

    /// Loads the env file into the process. Variables already set win; a
    /// missing file is fine, an unreadable one is not.
    fn load_env_file() -> Result<Option<PathBuf>> {
        let loaded = match std::env::var_os(Self::ENV_FILE_VAR) {
            Some(path) => {
                let path = PathBuf::from(path);
                dotenvy::from_path(&path).map(|()| path)
            }
            None => dotenvy::dotenv(),
        };

        match loaded {
            Ok(path) => Ok(Some(path)),
            Err(err) if err.not_found() => Ok(None),
            Err(err) => Err(err).context("failed to load env file"),
        }
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        Self::load_env_file()?;
        Self::from_vars(None)
    }

    /// Builds from `vars` when given, from the process environment otherwise.
    fn from_vars(vars: Option<EnvVars>) -> Result<Self> {
        let settings = config_rs::Config::builder()
            .add_source(
                config_rs::Environment::with_prefix(Self::PREFIX)
                    .prefix_separator("_")
                    .separator(Self::SEPARATOR)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()
            .context("failed to read environment variables for config")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}
