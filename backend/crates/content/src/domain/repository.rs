//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{CommentId, PostId};

use crate::domain::entities::{
    Comment, CommentView, NewComment, NewPost, Post, PostDetail, PostSummary,
};
use crate::error::ContentResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post, returning the database-assigned id
    async fn create(&self, post: &NewPost) -> ContentResult<PostId>;

    /// Find a post by ID (ownership fields only, no join)
    async fn find_by_id(&self, post_id: PostId) -> ContentResult<Option<Post>>;

    /// Find a post by ID joined with the owner's nickname
    async fn find_detail(&self, post_id: PostId) -> ContentResult<Option<PostDetail>>;

    /// All posts joined with owner nicknames, newest first
    async fn list(&self) -> ContentResult<Vec<PostSummary>>;

    /// Replace the content of a post
    async fn update_content(&self, post_id: PostId, content: &str) -> ContentResult<()>;

    /// Delete a post
    async fn delete(&self, post_id: PostId) -> ContentResult<()>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Create a new comment, returning the database-assigned id
    async fn create(&self, comment: &NewComment) -> ContentResult<CommentId>;

    /// Find a comment by ID
    async fn find_by_id(&self, comment_id: CommentId) -> ContentResult<Option<Comment>>;

    /// Comments on a post joined with author nicknames, newest first.
    /// An unknown post yields an empty list, never an error.
    async fn list_for_post(&self, post_id: PostId) -> ContentResult<Vec<CommentView>>;

    /// Replace the text of a comment
    async fn update_text(&self, comment_id: CommentId, comment: &str) -> ContentResult<()>;

    /// Delete a comment
    async fn delete(&self, comment_id: CommentId) -> ContentResult<()>;
}
