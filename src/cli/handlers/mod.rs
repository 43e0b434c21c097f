mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BlogConfig;
use crate::graphql::{BlogSchema, build_schema};
use crate::storage::BlogRepository;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BlogConfig,
    pub root: PathBuf,
    pub repo: Arc<BlogRepository>,
}

impl CommandContext {
    pub fn new(config: BlogConfig, root: PathBuf) -> Result<Self> {
        let repo = BlogRepository::from_config(&config, &root)
            .context("Failed to load blog fixtures")?;
        Ok(Self {
            config,
            root,
            repo: Arc::new(repo),
        })
    }

    /// Loads the explicit config file if given, otherwise the nearest
    /// `.gqblog.yml` above `cwd`, otherwise defaults.
    pub fn load(config_path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let (config, root) = match config_path {
            Some(path) => BlogConfig::load_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => BlogConfig::load_or_default(cwd).context("Failed to load gqblog configuration")?,
        };
        Self::new(config, root)
    }

    pub fn schema(&self) -> BlogSchema {
        build_schema(self.repo.clone())
    }
}

/// Parses `--variables` JSON, defaulting to no variables.
pub(crate) fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object"),
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Executes a document and prints the JSON response. Returns whether the
/// response carried errors.
pub(crate) fn execute_and_print(
    schema: &BlogSchema,
    document: &str,
    variables: async_graphql::Variables,
) -> Result<bool> {
    let request = async_graphql::Request::new(document).variables(variables);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    let failed = response.is_err();
    if failed {
        for error in &response.errors {
            tracing::debug!(message = %error.message, path = ?error.path, "Field error");
        }
    }
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(failed)
}
