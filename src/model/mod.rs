//! Data models for the blog.
//!
//! These are the raw fixture records, shaped like the stored data rather
//! than the API:
//!
//! - [`AuthorRecord`]: An author, keyed by id
//! - [`PostRecord`]: A post with its raw `date` and author id
//! - [`CommentRecord`]: A comment or reply with its author id
//! - [`Category`]: Post categories (meteor, product, user-story, other)

mod author;
mod comment;
mod post;
mod types;

pub use author::AuthorRecord;
pub use comment::CommentRecord;
pub use post::PostRecord;
pub use types::Category;
