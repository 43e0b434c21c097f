//! GraphQL schema and resolvers for the blog.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! gqblog serve --port 5000
//!
//! # Execute a query from CLI
//! gqblog query '{ latestPost { title author { name } } }'
//!
//! # Execute a mutation from CLI
//! gqblog mutate 'createPost(id: "p", title: "T", content: "C", author: "arunoda") { ok }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `posts`, `latestPost`, `recentPosts`, `post`, `authors`, `author`
//! - **Mutations**: `createPost`
//! - **Interfaces**: `HasAuthor`, implemented by `Comment` and `Post`

mod schema;
mod server;
mod types;

pub use schema::{BlogSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::{Author, Category, Comment, CreatePostPayload, HasAuthor, Post};
