//! PostgreSQL Repository Implementations

use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId};
use sqlx::PgPool;

use crate::domain::entities::{
    Comment, CommentView, NewComment, NewPost, Post, PostDetail, PostSummary,
};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::ContentResult;

/// PostgreSQL-backed post/comment repository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgContentRepository {
    async fn create(&self, post: &NewPost) -> ContentResult<PostId> {
        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO posts (
                user_id,
                title,
                content
            ) VALUES ($1, $2, $3)
            RETURNING post_id
            "#,
        )
        .bind(post.user_id.as_i64())
        .bind(&post.title)
        .bind(&post.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(PostId::from_i64(row.0))
    }

    async fn find_by_id(&self, post_id: PostId) -> ContentResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                user_id,
                title,
                content,
                likes,
                created_at,
                updated_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn find_detail(&self, post_id: PostId) -> ContentResult<Option<PostDetail>> {
        let row = sqlx::query_as::<_, PostDetailRow>(
            r#"
            SELECT
                p.post_id,
                p.user_id,
                u.nickname,
                p.title,
                p.content,
                p.likes,
                p.created_at,
                p.updated_at
            FROM posts p
            JOIN users u USING (user_id)
            WHERE p.post_id = $1
            "#,
        )
        .bind(post_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostDetailRow::into_detail))
    }

    async fn list(&self) -> ContentResult<Vec<PostSummary>> {
        let rows = sqlx::query_as::<_, PostSummaryRow>(
            r#"
            SELECT
                p.post_id,
                p.user_id,
                u.nickname,
                p.title,
                p.likes,
                p.created_at,
                p.updated_at
            FROM posts p
            JOIN users u USING (user_id)
            ORDER BY p.created_at DESC, p.post_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostSummaryRow::into_summary).collect())
    }

    async fn update_content(&self, post_id: PostId, content: &str) -> ContentResult<()> {
        sqlx::query(
            r#"
            UPDATE posts
            SET content = $2, updated_at = now()
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_i64())
        .bind(content)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, post_id: PostId) -> ContentResult<()> {
        sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgContentRepository {
    async fn create(&self, comment: &NewComment) -> ContentResult<CommentId> {
        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO comments (
                post_id,
                user_id,
                comment
            ) VALUES ($1, $2, $3)
            RETURNING comment_id
            "#,
        )
        .bind(comment.post_id.as_i64())
        .bind(comment.user_id.as_i64())
        .bind(&comment.comment)
        .fetch_one(&self.pool)
        .await?;

        Ok(CommentId::from_i64(row.0))
    }

    async fn find_by_id(&self, comment_id: CommentId) -> ContentResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT
                comment_id,
                post_id,
                user_id,
                comment,
                created_at,
                updated_at
            FROM comments
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CommentRow::into_comment))
    }

    async fn list_for_post(&self, post_id: PostId) -> ContentResult<Vec<CommentView>> {
        let rows = sqlx::query_as::<_, CommentViewRow>(
            r#"
            SELECT
                c.comment_id,
                c.user_id,
                u.nickname,
                c.comment,
                c.created_at,
                c.updated_at
            FROM comments c
            JOIN users u USING (user_id)
            WHERE c.post_id = $1
            ORDER BY c.created_at DESC, c.comment_id DESC
            "#,
        )
        .bind(post_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentViewRow::into_view).collect())
    }

    async fn update_text(&self, comment_id: CommentId, comment: &str) -> ContentResult<()> {
        sqlx::query(
            r#"
            UPDATE comments
            SET comment = $2, updated_at = now()
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id.as_i64())
        .bind(comment)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, comment_id: CommentId) -> ContentResult<()> {
        sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: i64,
    user_id: i64,
    title: String,
    content: String,
    likes: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_i64(self.post_id),
            user_id: UserId::from_i64(self.user_id),
            title: self.title,
            content: self.content,
            likes: self.likes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostSummaryRow {
    post_id: i64,
    user_id: i64,
    nickname: String,
    title: String,
    likes: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostSummaryRow {
    fn into_summary(self) -> PostSummary {
        PostSummary {
            post_id: PostId::from_i64(self.post_id),
            user_id: UserId::from_i64(self.user_id),
            nickname: self.nickname,
            title: self.title,
            likes: self.likes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostDetailRow {
    post_id: i64,
    user_id: i64,
    nickname: String,
    title: String,
    content: String,
    likes: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostDetailRow {
    fn into_detail(self) -> PostDetail {
        PostDetail {
            post_id: PostId::from_i64(self.post_id),
            user_id: UserId::from_i64(self.user_id),
            nickname: self.nickname,
            title: self.title,
            content: self.content,
            likes: self.likes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: i64,
    post_id: i64,
    user_id: i64,
    comment: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: CommentId::from_i64(self.comment_id),
            post_id: PostId::from_i64(self.post_id),
            user_id: UserId::from_i64(self.user_id),
            comment: self.comment,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentViewRow {
    comment_id: i64,
    user_id: i64,
    nickname: String,
    comment: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CommentViewRow {
    fn into_view(self) -> CommentView {
        CommentView {
            comment_id: CommentId::from_i64(self.comment_id),
            user_id: UserId::from_i64(self.user_id),
            nickname: self.nickname,
            comment: self.comment,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
