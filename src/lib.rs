//! # gqblog - A GraphQL API over a small blog
//!
//! gqblog serves a fixed dataset of authors, posts and comments through a
//! GraphQL schema with six query fields and one mutation.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API with GraphiQL on http://127.0.0.1:5000/graphql
//! gqblog serve
//!
//! # Query from the command line
//! gqblog query '{ posts(category: METEOR) { title timestamp } }'
//!
//! # Print the schema
//! gqblog schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Fixture records (AuthorRecord, PostRecord, CommentRecord, Category)
//! - [`storage`]: The in-memory data source

/// Command-line interface using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.gqblog.yml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BlogError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server around it.
pub mod graphql;

pub mod logging;

/// Data models for the blog.
pub mod model;

/// In-memory data source loaded from fixtures.
pub mod storage;

pub mod timefmt;
