use crate::config::ServerSettings;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gqblog")]
#[command(
    author,
    version,
    about = "A GraphQL API over a small blog of authors, posts and comments"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .gqblog.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "GQBLOG_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .gqblog.yml in the current directory
    Init {
        /// Port the server listens on
        #[arg(long, default_value_t = ServerSettings::default().port)]
        port: u16,

        /// Fixture file to load instead of the bundled dataset
        #[arg(long)]
        fixtures: Option<String>,

        /// Keep posts created through createPost for later queries
        #[arg(long)]
        persist_created_posts: bool,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Disable the GraphiQL page on GET /graphql
        #[arg(long)]
        no_playground: bool,
    },

    /// Print the schema in GraphQL SDL
    Schema,
}
