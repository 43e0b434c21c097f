use crate::{
    error::Result,
    model::{AuthorRecord, CommentRecord, PostRecord},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The dataset shipped with the binary.
pub const BUNDLED_FIXTURES: &str = include_str!("../../fixtures/blog.yml");

/// A complete fixture document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub authors: BTreeMap<String, AuthorRecord>,

    #[serde(default)]
    pub posts: Vec<PostRecord>,

    #[serde(default)]
    pub comments: Vec<CommentRecord>,

    #[serde(default)]
    pub replies: Vec<CommentRecord>,
}

impl Fixtures {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_FIXTURES)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Post and comment author ids missing from the author mapping.
    /// These are not rejected at load time; they surface as lookup faults
    /// when the `author` field is resolved.
    pub fn dangling_authors(&self) -> Vec<&str> {
        let posts = self.posts.iter().map(|p| p.author.as_str());
        let comments = self
            .comments
            .iter()
            .chain(self.replies.iter())
            .map(|c| c.author.as_str());
        let mut missing: Vec<&str> = posts
            .chain(comments)
            .filter(|id| !self.authors.contains_key(*id))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}
