//! Domain Entities
//!
//! Posts and comments as stored, plus the read models the public
//! listing endpoints return (record fields joined with the owner's
//! nickname).

use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId};

/// Post entity - a blog post as stored
///
/// The owner is set at creation and never reassigned. `likes` is
/// guarded against going negative both here and by a database CHECK.
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post that has not been persisted yet (no id until the insert)
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: UserId,
    pub title: String,
    pub content: String,
}

/// Listing row for posts: everything but the content, joined with the
/// owner's nickname
#[derive(Debug, Clone)]
pub struct PostSummary {
    pub post_id: PostId,
    pub user_id: UserId,
    pub nickname: String,
    pub title: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detail row for a single post, content included
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post_id: PostId,
    pub user_id: UserId,
    pub nickname: String,
    pub title: String,
    pub content: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment entity - a comment as stored
///
/// `post_id` records which post the comment was written against and is
/// never revalidated afterwards; a comment may outlive its post.
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: PostId,
    pub user_id: UserId,
    pub comment: String,
}

/// Listing row for comments, joined with the author's nickname
#[derive(Debug, Clone)]
pub struct CommentView {
    pub comment_id: CommentId,
    pub user_id: UserId,
    pub nickname: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
