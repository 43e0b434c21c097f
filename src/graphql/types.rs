use std::sync::Arc;

use async_graphql::{Context, Enum, ErrorExtensions, Interface, Object, SimpleObject};

use crate::model::{self, AuthorRecord, CommentRecord, PostRecord};
use crate::storage::BlogRepository;
use crate::timefmt::get_time;

// Object fields are nullable in the published schema, hence the `Option`
// return types on fields that can never actually be empty.

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Category {
    Meteor,
    Product,
    UserStory,
    Other,
}

impl From<model::Category> for Category {
    fn from(c: model::Category) -> Self {
        match c {
            model::Category::Meteor => Category::Meteor,
            model::Category::Product => Category::Product,
            model::Category::UserStory => Category::UserStory,
            model::Category::Other => Category::Other,
        }
    }
}

impl From<Category> for model::Category {
    fn from(c: Category) -> Self {
        match c {
            Category::Meteor => model::Category::Meteor,
            Category::Product => model::Category::Product,
            Category::UserStory => model::Category::UserStory,
            Category::Other => model::Category::Other,
        }
    }
}

pub(super) fn repo<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<BlogRepository>> {
    ctx.data::<Arc<BlogRepository>>()
}

/// Resolves an author id through the author mapping. A missing id is a
/// field error, never a null.
pub(super) fn resolve_author(ctx: &Context<'_>, id: &str) -> async_graphql::Result<Author> {
    repo(ctx)?
        .get_author(id)
        .map(|record| record.clone().into())
        .map_err(|e| e.extend())
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct Author {
    pub id: Option<String>,
    pub name: Option<String>,
    pub twitter: Option<String>,
}

impl From<AuthorRecord> for Author {
    fn from(a: AuthorRecord) -> Self {
        Self {
            id: Some(a.id),
            name: Some(a.name),
            twitter: Some(a.twitter),
        }
    }
}

/// Anything that stores an author id and exposes the resolved `author`.
#[derive(Interface)]
#[graphql(field(name = "author", ty = "Option<Author>"))]
pub enum HasAuthor {
    Comment(Comment),
    Post(Post),
}

pub struct Comment(pub CommentRecord);

impl From<CommentRecord> for Comment {
    fn from(c: CommentRecord) -> Self {
        Self(c)
    }
}

#[Object]
impl Comment {
    async fn id(&self) -> Option<&str> {
        Some(&self.0.id)
    }

    async fn content(&self) -> Option<&str> {
        Some(&self.0.content)
    }

    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        resolve_author(ctx, &self.0.author).map(Some)
    }

    /// Every comment carries the same, global reply list.
    async fn replies(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Comment>>> {
        let replies = repo(ctx)?
            .list_replies()
            .iter()
            .cloned()
            .map(Comment::from)
            .collect();
        Ok(Some(replies))
    }
}

pub struct Post {
    record: PostRecord,
    /// Comments attached to this instance. `None` resolves to the global
    /// comment list, like every fixture post.
    comments: Option<Vec<CommentRecord>>,
}

impl Post {
    /// A post answered straight from a mutation, with no comments yet.
    pub fn created(record: PostRecord) -> Self {
        Self {
            record,
            comments: Some(Vec::new()),
        }
    }
}

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        Self {
            record,
            comments: None,
        }
    }
}

#[Object]
impl Post {
    async fn id(&self) -> Option<&str> {
        Some(&self.record.id)
    }

    async fn title(&self) -> Option<&str> {
        Some(&self.record.title)
    }

    async fn category(&self) -> Option<Category> {
        self.record.category.map(Into::into)
    }

    async fn summary(&self) -> Option<&str> {
        self.record.summary.as_deref()
    }

    async fn content(&self) -> Option<&str> {
        Some(&self.record.content)
    }

    /// Milliseconds since the Unix epoch.
    async fn timestamp(&self) -> async_graphql::Result<Option<f64>> {
        get_time(&self.record.date).map(Some).map_err(|e| e.extend())
    }

    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        resolve_author(ctx, &self.record.author).map(Some)
    }

    /// The post's comments, cut to the first `count` entries when `count`
    /// is positive.
    async fn comments(
        &self,
        ctx: &Context<'_>,
        count: Option<i32>,
    ) -> async_graphql::Result<Option<Vec<Comment>>> {
        let all = match &self.comments {
            Some(own) => own.as_slice(),
            None => repo(ctx)?.list_comments(),
        };
        let selected = match count {
            Some(n) if n > 0 => &all[..all.len().min(n as usize)],
            _ => all,
        };
        Ok(Some(selected.iter().cloned().map(Comment::from).collect()))
    }
}

#[derive(SimpleObject)]
#[graphql(name = "CreatePost")]
pub struct CreatePostPayload {
    pub ok: Option<bool>,
    pub post: Option<Post>,
}
