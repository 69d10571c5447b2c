//! HTTP Handlers
//!
//! Protected handlers receive the acting identity from the auth gate
//! via request extensions; public handlers never look at it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;

use auth::presentation::middleware::CurrentUser;
use kernel::id::{CommentId, PostId};

use crate::application::{
    CreateCommentUseCase, CreatePostInput, CreatePostUseCase, DeleteCommentUseCase,
    DeletePostUseCase, GetPostUseCase, ListCommentsUseCase, ListPostsUseCase,
    UpdateCommentUseCase, UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::ContentResult;
use crate::presentation::dto::{
    CommentListResponse, CreateCommentRequest, CreatePostRequest, MessageResponse,
    PostDetailResponse, PostListResponse, UpdateCommentRequest, UpdatePostRequest,
};

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Posts
// ============================================================================

/// POST /api/posts
pub async fn create_post<R>(
    State(state): State<ContentAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreatePostRequest>,
) -> ContentResult<impl IntoResponse>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());

    use_case
        .execute(
            user.user_id,
            CreatePostInput {
                title: req.title,
                content: req.content,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "post created",
        }),
    ))
}

/// GET /api/posts
pub async fn list_posts<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<PostListResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());
    let posts = use_case.execute().await?;

    Ok(Json(PostListResponse {
        data: posts.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/posts/{id}
pub async fn get_post<R>(
    State(state): State<ContentAppState<R>>,
    Path(post_id): Path<i64>,
) -> ContentResult<Json<PostDetailResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone());
    let detail = use_case.execute(PostId::from_i64(post_id)).await?;

    Ok(Json(PostDetailResponse {
        data: detail.into(),
    }))
}

/// PUT /api/posts/{id}
pub async fn update_post<R>(
    State(state): State<ContentAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Path(post_id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> ContentResult<Json<MessageResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePostUseCase::new(state.repo.clone());

    use_case
        .execute(
            user.user_id,
            PostId::from_i64(post_id),
            UpdatePostInput {
                title: req.title,
                content: req.content,
            },
        )
        .await?;

    Ok(Json(MessageResponse {
        message: "post updated",
    }))
}

/// DELETE /api/posts/{id}
pub async fn delete_post<R>(
    State(state): State<ContentAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Path(post_id): Path<i64>,
) -> ContentResult<Json<MessageResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.repo.clone());
    use_case.execute(user.user_id, PostId::from_i64(post_id)).await?;

    Ok(Json(MessageResponse {
        message: "post deleted",
    }))
}

// ============================================================================
// Comments
// ============================================================================

/// POST /api/comments/{postId}
pub async fn create_comment<R>(
    State(state): State<ContentAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Path(post_id): Path<i64>,
    Json(req): Json<CreateCommentRequest>,
) -> ContentResult<impl IntoResponse>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateCommentUseCase::new(state.repo.clone());

    use_case
        .execute(user.user_id, PostId::from_i64(post_id), req.comment)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "comment created",
        }),
    ))
}

/// GET /api/comments/{postId}
pub async fn list_comments<R>(
    State(state): State<ContentAppState<R>>,
    Path(post_id): Path<i64>,
) -> ContentResult<Json<CommentListResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCommentsUseCase::new(state.repo.clone());
    let comments = use_case.execute(PostId::from_i64(post_id)).await?;

    Ok(Json(CommentListResponse {
        data: comments.into_iter().map(Into::into).collect(),
    }))
}

/// PUT /api/comments/{id}
pub async fn update_comment<R>(
    State(state): State<ContentAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Path(comment_id): Path<i64>,
    Json(req): Json<UpdateCommentRequest>,
) -> ContentResult<Json<MessageResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateCommentUseCase::new(state.repo.clone());

    use_case
        .execute(user.user_id, CommentId::from_i64(comment_id), req.comment)
        .await?;

    Ok(Json(MessageResponse {
        message: "comment updated",
    }))
}

/// DELETE /api/comments/{id}
pub async fn delete_comment<R>(
    State(state): State<ContentAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Path(comment_id): Path<i64>,
) -> ContentResult<Json<MessageResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteCommentUseCase::new(state.repo.clone());
    use_case
        .execute(user.user_id, CommentId::from_i64(comment_id))
        .await?;

    Ok(Json(MessageResponse {
        message: "comment deleted",
    }))
}
