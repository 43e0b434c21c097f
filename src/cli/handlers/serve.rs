use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::graphql::{GRAPHQL_PATH, run_server};

pub fn handle_serve(
    ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    no_playground: bool,
) -> Result<()> {
    let mut settings = ctx.config.server.clone();
    if let Some(h) = host {
        settings.host = h;
    }
    if let Some(p) = port {
        settings.port = p;
    }
    if no_playground {
        settings.playground = false;
    }

    let schema = ctx.schema();
    let url = format!("http://{}:{}{}", settings.host, settings.port, GRAPHQL_PATH);

    println!("{} GraphQL server on {}", "Starting".green(), url.cyan());
    if settings.playground {
        println!("GraphiQL: {}", url.cyan());
    }
    if ctx.repo.persists_created_posts() {
        println!("Created posts are {} for this process", "kept".yellow());
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &settings))?;
    Ok(())
}
