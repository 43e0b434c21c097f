use crate::config::{BlogConfig, CONFIG_FILE_NAME, DataSettings, ServerSettings};
use crate::error::BlogError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(port: u16, fixtures: Option<String>, persist_created_posts: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(BlogError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    if let Some(ref path) = fixtures {
        let fixtures_path = cwd.join(path);
        if !fixtures_path.exists() {
            anyhow::bail!("Fixture file does not exist: {}", fixtures_path.display());
        }
    }

    let config = BlogConfig {
        server: ServerSettings {
            port,
            ..ServerSettings::default()
        },
        data: DataSettings {
            fixtures,
            persist_created_posts,
        },
    };

    config.save(&config_path)?;

    println!(
        "{} gqblog project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());

    Ok(())
}
