use anyhow::Result;
use clap::Parser;

use gqblog::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use gqblog::cli::{Cli, Commands};
use gqblog::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let load_context = || -> Result<CommandContext> {
        let cwd = std::env::current_dir()?;
        CommandContext::load(cli.config.as_deref(), &cwd)
    };

    match cli.command {
        Commands::Init {
            port,
            fixtures,
            persist_created_posts,
        } => handle_init(port, fixtures, persist_created_posts),
        Commands::Query { query, variables } => {
            let failed = handle_query(load_context()?, query, variables)?;
            exit_on_errors(failed);
            Ok(())
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let failed = handle_mutate(load_context()?, mutation, variables)?;
            exit_on_errors(failed);
            Ok(())
        }
        Commands::Serve {
            host,
            port,
            no_playground,
        } => handle_serve(load_context()?, host, port, no_playground),
        Commands::Schema => handle_schema(load_context()?),
    }
}

/// The response is already printed; a non-zero exit lets scripts notice
/// field errors.
fn exit_on_errors(failed: bool) {
    if failed {
        std::process::exit(1);
    }
}
