//! Post Use Cases
//!
//! Create/list/get/update/delete for posts. Mutating operations check
//! ownership through [`can_mutate`] after the auth gate has resolved
//! the acting identity.

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;
use kernel::id::PostId;

use crate::domain::entities::{NewPost, PostDetail, PostSummary};
use crate::domain::repository::PostRepository;
use crate::domain::services::can_mutate;
use crate::error::{ContentError, ContentResult};

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
}

/// Update post input
///
/// Both fields are required on update even though only the content is
/// mutated.
pub struct UpdatePostInput {
    pub title: String,
    pub content: String,
}

/// Create post use case
pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, author: UserId, input: CreatePostInput) -> ContentResult<PostId> {
        if input.title.is_empty() || input.content.is_empty() {
            return Err(ContentError::MissingPostFields);
        }

        let post = NewPost {
            user_id: author,
            title: input.title,
            content: input.content,
        };

        let post_id = self.post_repo.create(&post).await?;

        tracing::info!(post_id = %post_id, user_id = %author, "Post created");

        Ok(post_id)
    }
}

/// List posts use case
pub struct ListPostsUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ListPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    /// All posts, newest first. No results is an empty list, not an error.
    pub async fn execute(&self) -> ContentResult<Vec<PostSummary>> {
        self.post_repo.list().await
    }
}

/// Get post use case
pub struct GetPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> GetPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, post_id: PostId) -> ContentResult<PostDetail> {
        self.post_repo
            .find_detail(post_id)
            .await?
            .ok_or(ContentError::PostNotFound)
    }
}

/// Update post use case
pub struct UpdatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> UpdatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(
        &self,
        actor: UserId,
        post_id: PostId,
        input: UpdatePostInput,
    ) -> ContentResult<()> {
        if input.title.is_empty() || input.content.is_empty() {
            return Err(ContentError::MissingPostFields);
        }

        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(ContentError::PostNotFound)?;

        if !can_mutate(post.user_id, actor) {
            return Err(ContentError::NotOwner);
        }

        self.post_repo.update_content(post_id, &input.content).await
    }
}

/// Delete post use case
pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, actor: UserId, post_id: PostId) -> ContentResult<()> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(ContentError::PostNotFound)?;

        if !can_mutate(post.user_id, actor) {
            return Err(ContentError::NotOwner);
        }

        self.post_repo.delete(post_id).await?;

        tracing::info!(post_id = %post_id, user_id = %actor, "Post deleted");

        Ok(())
    }
}
