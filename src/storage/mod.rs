//! In-memory storage layer for the blog.
//!
//! All data comes from a YAML fixture document, loaded once at startup.
//!
//! ## Fixture Format
//!
//! ```yaml
//! authors:
//!   arunoda: { id: arunoda, name: Arunoda Susiripala, twitter: arunoda }
//! posts:
//!   - id: kadira-debug
//!     title: Introducing Kadira Debug
//!     category: product
//!     summary: A new tool
//!     content: ...
//!     date: 2015-11-05T14:00:00Z
//!     author: arunoda
//! comments:
//!   - { id: c1, content: Nice!, author: arunoda }
//! replies:
//!   - { id: r1, content: Thanks, author: arunoda }
//! ```
//!
//! ## Components
//!
//! - [`BlogRepository`]: Read accessors over the dataset, plus post creation
//! - [`Fixtures`]: The parsed fixture document

mod fixtures;
mod repository;

pub use fixtures::{BUNDLED_FIXTURES, Fixtures};
pub use repository::BlogRepository;
