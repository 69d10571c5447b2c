//! API DTOs (Data Transfer Objects)
//!
//! Request text fields default to empty strings so an absent field and
//! an empty one share the validation branch. Response field names are
//! camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CommentView, PostDetail, PostSummary};

// ============================================================================
// Posts
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Update post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Listing entry for a post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummaryDto {
    pub post_id: i64,
    pub user_id: i64,
    pub nickname: String,
    pub title: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostSummary> for PostSummaryDto {
    fn from(summary: PostSummary) -> Self {
        Self {
            post_id: summary.post_id.as_i64(),
            user_id: summary.user_id.as_i64(),
            nickname: summary.nickname,
            title: summary.title,
            likes: summary.likes,
            created_at: summary.created_at,
            updated_at: summary.updated_at,
        }
    }
}

/// Detail view of a post, content included
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailDto {
    pub post_id: i64,
    pub user_id: i64,
    pub nickname: String,
    pub title: String,
    pub content: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostDetail> for PostDetailDto {
    fn from(detail: PostDetail) -> Self {
        Self {
            post_id: detail.post_id.as_i64(),
            user_id: detail.user_id.as_i64(),
            nickname: detail.nickname,
            title: detail.title,
            content: detail.content,
            likes: detail.likes,
            created_at: detail.created_at,
            updated_at: detail.updated_at,
        }
    }
}

/// Post list response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub data: Vec<PostSummaryDto>,
}

/// Post detail response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub data: PostDetailDto,
}

// ============================================================================
// Comments
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub comment: String,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    #[serde(default)]
    pub comment: String,
}

/// Listing entry for a comment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub comment_id: i64,
    pub user_id: i64,
    pub nickname: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CommentView> for CommentDto {
    fn from(view: CommentView) -> Self {
        Self {
            comment_id: view.comment_id.as_i64(),
            user_id: view.user_id.as_i64(),
            nickname: view.nickname,
            comment: view.comment,
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

/// Comment list response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListResponse {
    pub data: Vec<CommentDto>,
}

// ============================================================================
// Shared
// ============================================================================

/// Plain success acknowledgement
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_request_missing_fields_default_to_empty() {
        let request: CreatePostRequest = serde_json::from_str(r#"{"title":"hello"}"#).unwrap();
        assert_eq!(request.title, "hello");
        assert_eq!(request.content, "");

        let request: CreatePostRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.title, "");
        assert_eq!(request.content, "");
    }

    #[test]
    fn test_create_comment_request_missing_text_defaults_to_empty() {
        let request: CreateCommentRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.comment, "");
    }

    #[test]
    fn test_post_summary_serializes_camel_case() {
        let dto = PostSummaryDto {
            post_id: 1,
            user_id: 2,
            nickname: "Developer".to_string(),
            title: "hello".to_string(),
            likes: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&PostListResponse { data: vec![dto] }).unwrap();
        assert!(json.contains(r#""postId":1"#));
        assert!(json.contains(r#""userId":2"#));
        assert!(json.contains(r#""createdAt""#));
        assert!(json.contains(r#""updatedAt""#));
        assert!(json.contains(r#""likes":0"#));
        assert!(json.starts_with(r#"{"data":["#));
    }

    #[test]
    fn test_comment_dto_serializes_camel_case() {
        let dto = CommentDto {
            comment_id: 5,
            user_id: 2,
            nickname: "Developer".to_string(),
            comment: "nice post".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains(r#""commentId":5"#));
        assert!(json.contains(r#""comment":"nice post""#));
    }
}
