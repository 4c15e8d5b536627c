use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogSettings {
    pub api_base_url: String,
    pub api_key: String,
    pub language: String,
    pub image_base_url: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.themoviedb.org/3".into(),
            api_key: String::new(),
            language: "en-US".into(),
            image_base_url: "https://image.tmdb.org/t/p/w185_and_h278_bestv2".into(),
        }
    }
}

impl CatalogSettings {
    pub fn search_endpoint(&self) -> Result<Url, ConfigError> {
        let mut url = Url::parse(self.api_base_url.trim()).map_err(|source| {
            ConfigError::InvalidUrl {
                url: self.api_base_url.clone(),
                source,
            }
        })?;
        url.path_segments_mut()
            .map_err(|()| ConfigError::NotABase(self.api_base_url.clone()))?
            .pop_if_empty()
            .extend(["search", "movie"]);
        Ok(url)
    }
}

/// Defaults, then `path` if it exists, then the process environment.
pub fn load_settings(path: impl AsRef<Path>) -> CatalogSettings {
    let raw = fs::read_to_string(path.as_ref()).ok();
    load_settings_from(raw.as_deref(), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> CatalogSettings {
    let mut settings = CatalogSettings::default();

    if let Some(raw) = file_contents {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("api_base_url") {
                    settings.api_base_url = v.clone();
                }
                if let Some(v) = file_cfg.get("api_key") {
                    settings.api_key = v.clone();
                }
                if let Some(v) = file_cfg.get("language") {
                    settings.language = v.clone();
                }
                if let Some(v) = file_cfg.get("image_base_url") {
                    settings.image_base_url = v.clone();
                }
            }
            Err(err) => tracing::warn!(error = %err, "ignoring unreadable catalog config file"),
        }
    }

    if let Some(v) = env_override(&env, "CATALOG_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = env_override(&env, "CATALOG_API_KEY") {
        settings.api_key = v;
    }
    if let Some(v) = env_override(&env, "CATALOG_LANGUAGE") {
        settings.language = v;
    }
    if let Some(v) = env_override(&env, "CATALOG_IMAGE_BASE_URL") {
        settings.image_base_url = v;
    }

    settings
}

/// `APP__<NAME>` takes precedence over the bare `<NAME>`.
fn env_override(env: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    env(&format!("APP__{name}")).or_else(|| env(name))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
