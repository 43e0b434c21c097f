use super::fixtures::Fixtures;
use crate::{
    config::BlogConfig,
    error::{BlogError, Result},
    model::{AuthorRecord, CommentRecord, PostRecord},
};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard};

/// The blog's data source.
///
/// Authors, comments and replies never change after construction. The
/// post list sits behind a lock because `create_post` may append to it
/// when persistence is enabled.
pub struct BlogRepository {
    authors: BTreeMap<String, AuthorRecord>,
    posts: RwLock<Vec<PostRecord>>,
    comments: Vec<CommentRecord>,
    replies: Vec<CommentRecord>,
    persist_created_posts: bool,
}

impl BlogRepository {
    pub fn new(fixtures: Fixtures) -> Self {
        let dangling = fixtures.dangling_authors();
        if !dangling.is_empty() {
            tracing::warn!(authors = ?dangling, "Fixtures reference unknown authors");
        }
        tracing::info!(
            authors = fixtures.authors.len(),
            posts = fixtures.posts.len(),
            comments = fixtures.comments.len(),
            replies = fixtures.replies.len(),
            "Loaded fixtures"
        );
        Self {
            authors: fixtures.authors,
            posts: RwLock::new(fixtures.posts),
            comments: fixtures.comments,
            replies: fixtures.replies,
            persist_created_posts: false,
        }
    }

    pub fn from_config(config: &BlogConfig, project_root: &Path) -> Result<Self> {
        let fixtures = match config.fixtures_path(project_root) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Reading fixtures");
                Fixtures::load(&path)?
            }
            None => Fixtures::bundled()?,
        };
        Ok(Self::new(fixtures).with_persisted_posts(config.data.persist_created_posts))
    }

    pub fn with_persisted_posts(mut self, persist: bool) -> Self {
        self.persist_created_posts = persist;
        self
    }

    pub fn persists_created_posts(&self) -> bool {
        self.persist_created_posts
    }

    fn posts(&self) -> Result<RwLockReadGuard<'_, Vec<PostRecord>>> {
        self.posts
            .read()
            .map_err(|_| BlogError::Storage("Post list lock poisoned".to_string()))
    }

    pub fn list_posts(&self) -> Result<Vec<PostRecord>> {
        Ok(self.posts()?.clone())
    }

    pub fn map_authors(&self) -> &BTreeMap<String, AuthorRecord> {
        &self.authors
    }

    pub fn list_comments(&self) -> &[CommentRecord] {
        &self.comments
    }

    pub fn list_replies(&self) -> &[CommentRecord] {
        &self.replies
    }

    pub fn get_author(&self, id: &str) -> Result<&AuthorRecord> {
        tracing::debug!(id = %id, "Looking up author");
        self.authors.get(id).ok_or_else(|| {
            tracing::warn!(id = %id, "Author not found");
            BlogError::AuthorNotFound(id.to_string())
        })
    }

    pub fn find_post(&self, id: &str) -> Result<Option<PostRecord>> {
        Ok(self.posts()?.iter().find(|p| p.id == id).cloned())
    }

    pub fn post_exists(&self, id: &str) -> Result<bool> {
        Ok(self.posts()?.iter().any(|p| p.id == id))
    }

    /// Checks a new post against the dataset and, when persistence is
    /// enabled, appends it to the post list.
    ///
    /// Fails with [`BlogError::PostExists`] on a duplicate id, then with
    /// [`BlogError::UnknownAuthor`] when the author is not in the mapping.
    pub fn create_post(&self, post: PostRecord) -> Result<PostRecord> {
        tracing::info!(id = %post.id, title = %post.title, "Creating post");

        // The duplicate check and the append happen under one write lock so
        // two concurrent creates with the same id cannot both succeed.
        let mut posts = self
            .posts
            .write()
            .map_err(|_| BlogError::Storage("Post list lock poisoned".to_string()))?;

        if posts.iter().any(|p| p.id == post.id) {
            return Err(BlogError::PostExists(post.id));
        }
        if !self.authors.contains_key(&post.author) {
            return Err(BlogError::UnknownAuthor(post.author));
        }

        if self.persist_created_posts {
            posts.push(post.clone());
        } else {
            tracing::debug!(id = %post.id, "Created post not persisted");
        }
        Ok(post)
    }
}
