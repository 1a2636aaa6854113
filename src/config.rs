//! Settings for the command line app, read from a TOML file and the environment.
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::{Result, eyre::WrapErr};
use serde::Deserialize;

use crate::api::rest::ClientConfig;

/// Configuration as loaded from `config.toml` and `TODOIST_*` environment variables.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// The API token, also read from `TODOIST_AUTH_TOKEN`.
    pub auth_token: Option<String>,
    /// Overrides the default API endpoint.
    pub url: Option<url::Url>,
    /// Overrides the default request timeout, in seconds.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Where the config file is looked up when no explicit path is given.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("doist-rest").join("config.toml"))
    }

    /// Loads the config file followed by the environment, later sources taking precedence.
    ///
    /// An explicitly given `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let mut builder = config::Config::builder();
        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                if let Some(path) = Self::default_path() {
                    builder = builder.add_source(config::File::from(path).required(false));
                }
            }
        }
        builder
            .add_source(config::Environment::with_prefix("TODOIST"))
            .build()
            .wrap_err("unable to read config")?
            .try_deserialize()
            .wrap_err("unable to parse config")
    }

    /// Turns the loaded settings into what the [`crate::api::rest::Gateway`] needs.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(url) = &self.url {
            config = config.with_base_url(url.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[cfg(test)]
mod test {
    use assert_fs::{NamedTempFile, prelude::*};

    use super::*;

    #[test]
    fn loads_file() {
        let file = NamedTempFile::new("config.toml").unwrap();
        file.write_str(
            r#"
url = "http://localhost:8080/"
timeout_secs = 3
"#,
        )
        .unwrap();
        let cfg = Config::load(Some(file.path())).unwrap();
        assert_eq!(
            cfg.url.as_ref().map(|u| u.as_str()),
            Some("http://localhost:8080/")
        );
        let client = cfg.client_config();
        assert_eq!(client.timeout, Duration::from_secs(3));
        assert_eq!(client.base_url.as_str(), "http://localhost:8080/");
    }

    #[test]
    fn missing_explicit_file_fails() {
        assert!(Config::load(Some(Path::new("/does/not/exist/config.toml"))).is_err());
    }

    #[test]
    fn defaults() {
        let client = Config::default().client_config();
        assert_eq!(client.base_url.as_str(), "https://api.todoist.com/rest/v2/");
        assert_eq!(client.timeout, Duration::from_secs(15));
    }
}
