//! Unit tests for the content crate
//!
//! Use-case tests and router-level tests run against an in-memory store
//! implementing the same repository traits as the PostgreSQL one. The
//! router tests drive the real auth gate: the store also implements the
//! user repository trait, so signup/login/token verification all work
//! end to end without a database.

use std::sync::{Arc, Mutex};

use auth::domain::entity::user::{NewUser, User};
use auth::domain::repository::UserRepository;
use auth::domain::value_object::{nickname::Nickname, user_id::UserId};
use auth::error::AuthError;
use chrono::Utc;
use kernel::id::{CommentId, PostId};

use crate::domain::entities::{
    Comment, CommentView, NewComment, NewPost, Post, PostDetail, PostSummary,
};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{ContentError, ContentResult};

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Clone, Default)]
pub(crate) struct MemBlogStore {
    inner: Arc<Mutex<MemInner>>,
}

#[derive(Default)]
struct MemInner {
    next_user: i64,
    next_post: i64,
    next_comment: i64,
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl MemInner {
    fn nickname_of(&self, user_id: UserId) -> String {
        self.users
            .iter()
            .find(|u| u.user_id == user_id)
            .map(|u| u.nickname.as_str().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

impl UserRepository for MemBlogStore {
    async fn create(&self, user: &NewUser) -> Result<UserId, AuthError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|u| u.nickname == user.nickname) {
            return Err(AuthError::NicknameTaken);
        }
        inner.next_user += 1;
        let user_id = UserId::from_i64(inner.next_user);
        let now = Utc::now();
        inner.users.push(User {
            user_id,
            nickname: user.nickname.clone(),
            password_hash: user.password_hash.clone(),
            created_at: now,
            updated_at: now,
        });
        Ok(user_id)
    }

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, AuthError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.user_id == user_id).cloned())
    }

    async fn find_by_nickname(&self, nickname: &Nickname) -> Result<Option<User>, AuthError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| &u.nickname == nickname).cloned())
    }

    async fn exists_by_nickname(&self, nickname: &Nickname) -> Result<bool, AuthError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().any(|u| &u.nickname == nickname))
    }
}

impl PostRepository for MemBlogStore {
    async fn create(&self, post: &NewPost) -> ContentResult<PostId> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_post += 1;
        let post_id = PostId::from_i64(inner.next_post);
        let now = Utc::now();
        inner.posts.push(Post {
            post_id,
            user_id: post.user_id,
            title: post.title.clone(),
            content: post.content.clone(),
            likes: 0,
            created_at: now,
            updated_at: now,
        });
        Ok(post_id)
    }

    async fn find_by_id(&self, post_id: PostId) -> ContentResult<Option<Post>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.posts.iter().find(|p| p.post_id == post_id).cloned())
    }

    async fn find_detail(&self, post_id: PostId) -> ContentResult<Option<PostDetail>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .posts
            .iter()
            .find(|p| p.post_id == post_id)
            .map(|p| PostDetail {
                post_id: p.post_id,
                user_id: p.user_id,
                nickname: inner.nickname_of(p.user_id),
                title: p.title.clone(),
                content: p.content.clone(),
                likes: p.likes,
                created_at: p.created_at,
                updated_at: p.updated_at,
            }))
    }

    async fn list(&self) -> ContentResult<Vec<PostSummary>> {
        let inner = self.inner.lock().unwrap();
        let mut summaries: Vec<PostSummary> = inner
            .posts
            .iter()
            .map(|p| PostSummary {
                post_id: p.post_id,
                user_id: p.user_id,
                nickname: inner.nickname_of(p.user_id),
                title: p.title.clone(),
                likes: p.likes,
                created_at: p.created_at,
                updated_at: p.updated_at,
            })
            .collect();
        // Same order as the SQL: created_at desc, id desc as tiebreak
        summaries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.post_id.cmp(&a.post_id))
        });
        Ok(summaries)
    }

    async fn update_content(&self, post_id: PostId, content: &str) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(post) = inner.posts.iter_mut().find(|p| p.post_id == post_id) {
            post.content = content.to_string();
            post.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, post_id: PostId) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.posts.retain(|p| p.post_id != post_id);
        Ok(())
    }
}

impl CommentRepository for MemBlogStore {
    async fn create(&self, comment: &NewComment) -> ContentResult<CommentId> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_comment += 1;
        let comment_id = CommentId::from_i64(inner.next_comment);
        let now = Utc::now();
        inner.comments.push(Comment {
            comment_id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            comment: comment.comment.clone(),
            created_at: now,
            updated_at: now,
        });
        Ok(comment_id)
    }

    async fn find_by_id(&self, comment_id: CommentId) -> ContentResult<Option<Comment>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .comments
            .iter()
            .find(|c| c.comment_id == comment_id)
            .cloned())
    }

    async fn list_for_post(&self, post_id: PostId) -> ContentResult<Vec<CommentView>> {
        let inner = self.inner.lock().unwrap();
        let mut views: Vec<CommentView> = inner
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .map(|c| CommentView {
                comment_id: c.comment_id,
                user_id: c.user_id,
                nickname: inner.nickname_of(c.user_id),
                comment: c.comment.clone(),
                created_at: c.created_at,
                updated_at: c.updated_at,
            })
            .collect();
        views.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.comment_id.cmp(&a.comment_id))
        });
        Ok(views)
    }

    async fn update_text(&self, comment_id: CommentId, comment: &str) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(existing) = inner
            .comments
            .iter_mut()
            .find(|c| c.comment_id == comment_id)
        {
            existing.comment = comment.to_string();
            existing.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, comment_id: CommentId) -> ContentResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.comments.retain(|c| c.comment_id != comment_id);
        Ok(())
    }
}

// ============================================================================
// Post use cases
// ============================================================================

#[cfg(test)]
mod post_use_case_tests {
    use super::*;
    use crate::application::{
        CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase,
        UpdatePostInput, UpdatePostUseCase,
    };

    fn store() -> Arc<MemBlogStore> {
        Arc::new(MemBlogStore::default())
    }

    async fn create(store: &Arc<MemBlogStore>, author: i64, title: &str, content: &str) -> ContentResult<PostId> {
        CreatePostUseCase::new(store.clone())
            .execute(
                UserId::from_i64(author),
                CreatePostInput {
                    title: title.to_string(),
                    content: content.to_string(),
                },
            )
            .await
    }

    #[tokio::test]
    async fn test_create_requires_title_and_content() {
        let store = store();
        for (title, content) in [("", "body"), ("title", ""), ("", "")] {
            let err = create(&store, 1, title, content).await.unwrap_err();
            assert!(matches!(err, ContentError::MissingPostFields));
        }
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let store = store();
        let post_id = create(&store, 1, "hello", "first post").await.unwrap();

        let detail = GetPostUseCase::new(store.clone())
            .execute(post_id)
            .await
            .unwrap();
        assert_eq!(detail.title, "hello");
        assert_eq!(detail.content, "first post");
        assert_eq!(detail.user_id, UserId::from_i64(1));
        assert_eq!(detail.likes, 0);
    }

    #[tokio::test]
    async fn test_get_missing_post_is_not_found() {
        let store = store();
        let err = GetPostUseCase::new(store.clone())
            .execute(PostId::from_i64(999))
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::PostNotFound));
    }

    #[tokio::test]
    async fn test_list_is_reverse_insertion_order() {
        let store = store();
        let first = create(&store, 1, "first", "a").await.unwrap();
        let second = create(&store, 1, "second", "b").await.unwrap();
        let third = create(&store, 1, "third", "c").await.unwrap();

        let listed = ListPostsUseCase::new(store.clone()).execute().await.unwrap();
        let ids: Vec<PostId> = listed.iter().map(|p| p.post_id).collect();
        assert_eq!(ids, vec![third, second, first]);
    }

    #[tokio::test]
    async fn test_list_empty_is_ok() {
        let store = store();
        let listed = ListPostsUseCase::new(store.clone()).execute().await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_update_mutates_content_only() {
        let store = store();
        let post_id = create(&store, 1, "title", "old").await.unwrap();

        UpdatePostUseCase::new(store.clone())
            .execute(
                UserId::from_i64(1),
                post_id,
                UpdatePostInput {
                    title: "ignored".to_string(),
                    content: "new".to_string(),
                },
            )
            .await
            .unwrap();

        let detail = GetPostUseCase::new(store.clone())
            .execute(post_id)
            .await
            .unwrap();
        assert_eq!(detail.content, "new");
        assert_eq!(detail.title, "title");
    }

    #[tokio::test]
    async fn test_update_by_non_owner_rejected() {
        let store = store();
        let post_id = create(&store, 1, "title", "body").await.unwrap();

        let err = UpdatePostUseCase::new(store.clone())
            .execute(
                UserId::from_i64(2),
                post_id,
                UpdatePostInput {
                    title: "title".to_string(),
                    content: "hijacked".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::NotOwner));
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let store = store();
        let err = UpdatePostUseCase::new(store.clone())
            .execute(
                UserId::from_i64(1),
                PostId::from_i64(999),
                UpdatePostInput {
                    title: "t".to_string(),
                    content: "c".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::PostNotFound));
    }

    #[tokio::test]
    async fn test_validation_runs_before_existence_check() {
        let store = store();
        let err = UpdatePostUseCase::new(store.clone())
            .execute(
                UserId::from_i64(1),
                PostId::from_i64(999),
                UpdatePostInput {
                    title: String::new(),
                    content: String::new(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::MissingPostFields));
    }

    #[tokio::test]
    async fn test_delete_twice_second_is_not_found() {
        let store = store();
        let post_id = create(&store, 1, "title", "body").await.unwrap();
        let use_case = DeletePostUseCase::new(store.clone());

        use_case.execute(UserId::from_i64(1), post_id).await.unwrap();

        let err = use_case
            .execute(UserId::from_i64(1), post_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::PostNotFound));
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_rejected() {
        let store = store();
        let post_id = create(&store, 1, "title", "body").await.unwrap();

        let err = DeletePostUseCase::new(store.clone())
            .execute(UserId::from_i64(2), post_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::NotOwner));

        // Still there for the owner
        assert!(
            GetPostUseCase::new(store.clone())
                .execute(post_id)
                .await
                .is_ok()
        );
    }
}

// ============================================================================
// Comment use cases
// ============================================================================

#[cfg(test)]
mod comment_use_case_tests {
    use super::*;
    use crate::application::{
        CreateCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase, UpdateCommentUseCase,
    };

    fn store() -> Arc<MemBlogStore> {
        Arc::new(MemBlogStore::default())
    }

    async fn comment(
        store: &Arc<MemBlogStore>,
        author: i64,
        post: i64,
        text: &str,
    ) -> ContentResult<CommentId> {
        CreateCommentUseCase::new(store.clone())
            .execute(
                UserId::from_i64(author),
                PostId::from_i64(post),
                text.to_string(),
            )
            .await
    }

    #[tokio::test]
    async fn test_empty_comment_rejected() {
        let store = store();
        let err = comment(&store, 1, 1, "").await.unwrap_err();
        assert!(matches!(err, ContentError::MissingCommentText));
    }

    #[tokio::test]
    async fn test_comment_against_nonexistent_post_is_accepted() {
        // The post id is recorded, never validated
        let store = store();
        assert!(comment(&store, 1, 999, "shouting into the void").await.is_ok());
    }

    #[tokio::test]
    async fn test_listing_unknown_post_is_empty_not_an_error() {
        let store = store();
        let listed = ListCommentsUseCase::new(store.clone())
            .execute(PostId::from_i64(999))
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_listing_filters_by_post_and_is_reverse_order() {
        let store = store();
        let a = comment(&store, 1, 1, "first on 1").await.unwrap();
        let _other = comment(&store, 1, 2, "first on 2").await.unwrap();
        let b = comment(&store, 1, 1, "second on 1").await.unwrap();

        let listed = ListCommentsUseCase::new(store.clone())
            .execute(PostId::from_i64(1))
            .await
            .unwrap();
        let ids: Vec<CommentId> = listed.iter().map(|c| c.comment_id).collect();
        assert_eq!(ids, vec![b, a]);
    }

    #[tokio::test]
    async fn test_update_by_non_owner_rejected() {
        let store = store();
        let comment_id = comment(&store, 1, 1, "mine").await.unwrap();

        let err = UpdateCommentUseCase::new(store.clone())
            .execute(UserId::from_i64(2), comment_id, "hijacked".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::NotOwner));
    }

    #[tokio::test]
    async fn test_update_missing_comment_is_not_found() {
        let store = store();
        let err = UpdateCommentUseCase::new(store.clone())
            .execute(UserId::from_i64(1), CommentId::from_i64(999), "text".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::CommentNotFound));
    }

    #[tokio::test]
    async fn test_delete_twice_second_is_not_found() {
        let store = store();
        let comment_id = comment(&store, 1, 1, "to be deleted").await.unwrap();
        let use_case = DeleteCommentUseCase::new(store.clone());

        use_case
            .execute(UserId::from_i64(1), comment_id)
            .await
            .unwrap();

        let err = use_case
            .execute(UserId::from_i64(1), comment_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::CommentNotFound));
    }
}

// ============================================================================
// Router (end to end through the auth gate)
// ============================================================================

#[cfg(test)]
mod http_tests {
    use super::*;
    use auth::application::config::AuthConfig;
    use auth::presentation::middleware::AuthGateState;
    use auth::presentation::router::auth_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::presentation::router::content_router_generic;

    fn app() -> Router {
        let store = MemBlogStore::default();
        let config = AuthConfig::with_random_secret();
        let gate = AuthGateState {
            repo: Arc::new(store.clone()),
            config: Arc::new(config.clone()),
        };
        Router::new().nest(
            "/api",
            auth_router_generic(store.clone(), config).merge(content_router_generic(store, gate)),
        )
    }

    fn request(method: &str, uri: &str, token: Option<&str>, body: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Sign up and log in, returning the bearer token
    async fn login(app: &Router, nickname: &str) -> String {
        let signup = format!(
            r#"{{"nickname":"{nickname}","password":"password1","confirm":"password1"}}"#
        );
        let (status, _) = send(app, request("POST", "/api/signup", None, Some(&signup))).await;
        assert_eq!(status, StatusCode::CREATED);

        let login = format!(r#"{{"nickname":"{nickname}","password":"password1"}}"#);
        let (status, body) = send(app, request("POST", "/api/login", None, Some(&login))).await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_protected_route_without_credential_is_401_before_validation() {
        let app = app();
        // Body is invalid too; the gate must reject first
        let (status, body) = send(&app, request("POST", "/api/posts", None, Some("{}"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["errorMessage"], "login required");
    }

    #[tokio::test]
    async fn test_garbled_token_is_401_authentication_failed() {
        let app = app();
        let (status, body) = send(
            &app,
            request("POST", "/api/posts", Some("not.a.token"), Some("{}")),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["errorMessage"], "authentication failed");
    }

    #[tokio::test]
    async fn test_wrong_scheme_counts_as_no_credential() {
        let app = app();
        let req = Request::builder()
            .method("POST")
            .uri("/api/posts")
            .header(header::AUTHORIZATION, "Basic abc")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["errorMessage"], "login required");
    }

    #[tokio::test]
    async fn test_signup_validation_is_412() {
        let app = app();
        let (status, body) = send(
            &app,
            request(
                "POST",
                "/api/signup",
                None,
                Some(r#"{"nickname":"a!","password":"password1","confirm":"password1"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::PRECONDITION_FAILED);
        assert!(body["errorMessage"].is_string());
    }

    #[tokio::test]
    async fn test_login_mismatch_is_412_with_single_message() {
        let app = app();
        login(&app, "Developer").await;

        let (status, body) = send(
            &app,
            request(
                "POST",
                "/api/login",
                None,
                Some(r#"{"nickname":"Developer","password":"wrongpass"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::PRECONDITION_FAILED);
        assert_eq!(body["errorMessage"], "check your nickname or password");
    }

    #[tokio::test]
    async fn test_create_list_get_flow() {
        let app = app();
        let token = login(&app, "Developer").await;

        let (status, _) = send(
            &app,
            request(
                "POST",
                "/api/posts",
                Some(&token),
                Some(r#"{"title":"hello","content":"first post"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        // Listing is public and joined with the nickname
        let (status, body) = send(&app, request("GET", "/api/posts", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["title"], "hello");
        assert_eq!(data[0]["nickname"], "Developer");
        assert_eq!(data[0]["likes"], 0);
        assert!(data[0].get("content").is_none());

        // Detail includes the content
        let post_id = data[0]["postId"].as_i64().unwrap();
        let (status, body) = send(
            &app,
            request("GET", &format!("/api/posts/{post_id}"), None, None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["content"], "first post");
        assert_eq!(body["data"]["nickname"], "Developer");
    }

    #[tokio::test]
    async fn test_get_missing_post_is_404() {
        let app = app();
        let (status, body) = send(&app, request("GET", "/api/posts/999", None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorMessage"], "post does not exist");
    }

    #[tokio::test]
    async fn test_post_create_missing_fields_is_412() {
        let app = app();
        let token = login(&app, "Developer").await;
        let (status, _) = send(
            &app,
            request("POST", "/api/posts", Some(&token), Some(r#"{"title":"x"}"#)),
        )
        .await;
        assert_eq!(status, StatusCode::PRECONDITION_FAILED);
    }

    #[tokio::test]
    async fn test_token_for_one_user_never_mutates_anothers_post() {
        let app = app();
        let owner_token = login(&app, "OwnerUser").await;
        let other_token = login(&app, "OtherUser").await;

        let (status, _) = send(
            &app,
            request(
                "POST",
                "/api/posts",
                Some(&owner_token),
                Some(r#"{"title":"mine","content":"hands off"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            &app,
            request(
                "PUT",
                "/api/posts/1",
                Some(&other_token),
                Some(r#"{"title":"mine","content":"hijacked"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["errorMessage"], "only the author may modify this resource");

        let (status, _) = send(
            &app,
            request("DELETE", "/api/posts/1", Some(&other_token), None),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        // Owner still can
        let (status, _) = send(
            &app,
            request(
                "PUT",
                "/api/posts/1",
                Some(&owner_token),
                Some(r#"{"title":"mine","content":"updated"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_post_twice() {
        let app = app();
        let token = login(&app, "Developer").await;

        send(
            &app,
            request(
                "POST",
                "/api/posts",
                Some(&token),
                Some(r#"{"title":"bye","content":"soon gone"}"#),
            ),
        )
        .await;

        let (status, _) = send(&app, request("DELETE", "/api/posts/1", Some(&token), None)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) =
            send(&app, request("DELETE", "/api/posts/1", Some(&token), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorMessage"], "post does not exist");
    }

    #[tokio::test]
    async fn test_comment_flow() {
        let app = app();
        let token = login(&app, "Developer").await;

        // Empty text: 412
        let (status, body) = send(
            &app,
            request("POST", "/api/comments/1", Some(&token), Some("{}")),
        )
        .await;
        assert_eq!(status, StatusCode::PRECONDITION_FAILED);
        assert_eq!(body["errorMessage"], "comment text is required");

        let (status, _) = send(
            &app,
            request(
                "POST",
                "/api/comments/1",
                Some(&token),
                Some(r#"{"comment":"nice post"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        // Public listing, filtered by post
        let (status, body) = send(&app, request("GET", "/api/comments/1", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["comment"], "nice post");
        assert_eq!(data[0]["nickname"], "Developer");

        // Listing for an unknown post is empty, not an error
        let (status, body) = send(&app, request("GET", "/api/comments/42", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }
}
