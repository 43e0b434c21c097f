use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema};

use crate::model::PostRecord;
use crate::storage::BlogRepository;

use super::types::*;

pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(repo: Arc<BlogRepository>) -> BlogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .register_output_type::<HasAuthor>()
        .data(repo)
        .finish()
}

/// Takes the first `count` items, counting from the end for negative
/// values the way a slice `[:count]` does.
fn take_prefix<T>(items: Vec<T>, count: i32) -> Vec<T> {
    let len = items.len();
    let end = if count >= 0 {
        len.min(count as usize)
    } else {
        len.saturating_sub(count.unsigned_abs() as usize)
    };
    items.into_iter().take(end).collect()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Posts in the given category. Without a category nothing matches.
    async fn posts(
        &self,
        ctx: &Context<'_>,
        category: Option<Category>,
    ) -> async_graphql::Result<Option<Vec<Post>>> {
        let posts = repo(ctx)?.list_posts().map_err(|e| e.extend())?;
        let Some(category) = category.map(crate::model::Category::from) else {
            return Ok(Some(Vec::new()));
        };
        let matching = posts
            .into_iter()
            .filter(|p| p.category == Some(category))
            .map(Post::from)
            .collect();
        Ok(Some(matching))
    }

    /// The first post in the list; list order, not timestamps, decides.
    async fn latest_post(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Post>> {
        let posts = repo(ctx)?.list_posts().map_err(|e| e.extend())?;
        Ok(posts.into_iter().next().map(Post::from))
    }

    /// The first `count` posts, or all of them when `count` is omitted.
    async fn recent_posts(
        &self,
        ctx: &Context<'_>,
        count: Option<i32>,
    ) -> async_graphql::Result<Option<Vec<Post>>> {
        let posts = repo(ctx)?.list_posts().map_err(|e| e.extend())?;
        let posts = match count {
            Some(n) => take_prefix(posts, n),
            None => posts,
        };
        Ok(Some(posts.into_iter().map(Post::from).collect()))
    }

    /// A single post by id, or null when there is none.
    async fn post(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<Post>> {
        let post = repo(ctx)?.find_post(&id).map_err(|e| e.extend())?;
        Ok(post.map(Post::from))
    }

    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Author>>> {
        let authors = repo(ctx)?
            .map_authors()
            .values()
            .cloned()
            .map(Author::from)
            .collect();
        Ok(Some(authors))
    }

    /// A single author by id. Unknown ids are an error.
    async fn author(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<Author>> {
        resolve_author(ctx, &id).map(Some)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new post
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        id: String,
        title: String,
        content: String,
        author: String,
        summary: Option<String>,
        category: Option<Category>,
    ) -> async_graphql::Result<Option<CreatePostPayload>> {
        let post = PostRecord::new(id, title, content, author)
            .with_summary(summary)
            .with_category(category.map(Into::into));

        let post = repo(ctx)?.create_post(post).map_err(|e| e.extend())?;
        Ok(Some(CreatePostPayload {
            ok: Some(true),
            post: Some(Post::created(post)),
        }))
    }
}
