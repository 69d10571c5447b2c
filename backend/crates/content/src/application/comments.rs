//! Comment Use Cases
//!
//! Same state machine as posts, keyed on the comment text. Creation
//! records the target post id without checking that the post exists;
//! listing for an unknown post is simply empty.

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;
use kernel::id::{CommentId, PostId};

use crate::domain::entities::{CommentView, NewComment};
use crate::domain::repository::CommentRepository;
use crate::domain::services::can_mutate;
use crate::error::{ContentError, ContentResult};

/// Create comment use case
pub struct CreateCommentUseCase<C>
where
    C: CommentRepository,
{
    comment_repo: Arc<C>,
}

impl<C> CreateCommentUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comment_repo: Arc<C>) -> Self {
        Self { comment_repo }
    }

    pub async fn execute(
        &self,
        author: UserId,
        post_id: PostId,
        comment: String,
    ) -> ContentResult<CommentId> {
        if comment.is_empty() {
            return Err(ContentError::MissingCommentText);
        }

        let comment = NewComment {
            post_id,
            user_id: author,
            comment,
        };

        let comment_id = self.comment_repo.create(&comment).await?;

        tracing::info!(
            comment_id = %comment_id,
            post_id = %post_id,
            user_id = %author,
            "Comment created"
        );

        Ok(comment_id)
    }
}

/// List comments use case
pub struct ListCommentsUseCase<C>
where
    C: CommentRepository,
{
    comment_repo: Arc<C>,
}

impl<C> ListCommentsUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comment_repo: Arc<C>) -> Self {
        Self { comment_repo }
    }

    /// Comments on a post, newest first
    pub async fn execute(&self, post_id: PostId) -> ContentResult<Vec<CommentView>> {
        self.comment_repo.list_for_post(post_id).await
    }
}

/// Update comment use case
pub struct UpdateCommentUseCase<C>
where
    C: CommentRepository,
{
    comment_repo: Arc<C>,
}

impl<C> UpdateCommentUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comment_repo: Arc<C>) -> Self {
        Self { comment_repo }
    }

    pub async fn execute(
        &self,
        actor: UserId,
        comment_id: CommentId,
        comment: String,
    ) -> ContentResult<()> {
        if comment.is_empty() {
            return Err(ContentError::MissingCommentText);
        }

        let existing = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or(ContentError::CommentNotFound)?;

        if !can_mutate(existing.user_id, actor) {
            return Err(ContentError::NotOwner);
        }

        self.comment_repo.update_text(comment_id, &comment).await
    }
}

/// Delete comment use case
pub struct DeleteCommentUseCase<C>
where
    C: CommentRepository,
{
    comment_repo: Arc<C>,
}

impl<C> DeleteCommentUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(comment_repo: Arc<C>) -> Self {
        Self { comment_repo }
    }

    pub async fn execute(&self, actor: UserId, comment_id: CommentId) -> ContentResult<()> {
        let existing = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or(ContentError::CommentNotFound)?;

        if !can_mutate(existing.user_id, actor) {
            return Err(ContentError::NotOwner);
        }

        self.comment_repo.delete(comment_id).await?;

        tracing::info!(comment_id = %comment_id, user_id = %actor, "Comment deleted");

        Ok(())
    }
}
