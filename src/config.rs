use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".gqblog.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub data: DataSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve GraphiQL on `GET /graphql`.
    #[serde(default = "default_playground")]
    pub playground: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_playground() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            playground: default_playground(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSettings {
    /// Fixture file, relative to the project root. The bundled dataset is
    /// used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures: Option<String>,

    /// Make posts created through `createPost` visible to later queries.
    #[serde(default)]
    pub persist_created_posts: bool,
}

impl BlogConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?
            .ok_or_else(|| BlogError::Config(format!("No {} found", CONFIG_FILE_NAME)))?;
        Self::load_file(&config_path)
    }

    /// Loads the nearest config file, or falls back to defaults rooted at
    /// `start_path` when there is none.
    pub fn load_or_default(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path)? {
            Some(config_path) => Self::load_file(&config_path),
            None => {
                tracing::debug!(path = %start_path.display(), "No config file, using defaults");
                Ok((Self::default(), start_path.to_path_buf()))
            }
        }
    }

    pub fn load_file(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: BlogConfig = if content.trim().is_empty() {
            BlogConfig::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        let project_root = config_path
            .parent()
            .ok_or_else(|| BlogError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(Some(config_path));
            }
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    pub fn fixtures_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.data.fixtures.as_ref().map(|p| project_root.join(p))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
