//! Content Router
//!
//! Read routes are public; every mutating route passes the auth gate
//! before its handler runs. The `{id}` segment under `/comments` is a
//! post id for POST and GET but a comment id for PUT and DELETE.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::presentation::middleware::{AuthGateState, require_identity};

use crate::domain::repository::{CommentRepository, PostRepository};
use crate::infra::postgres::PgContentRepository;
use crate::presentation::handlers::{self, ContentAppState};

/// Create the content router with PostgreSQL repository
pub fn content_router<U>(repo: PgContentRepository, gate: AuthGateState<U>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    content_router_generic(repo, gate)
}

/// Create a generic content router for any repository implementation
pub fn content_router_generic<R, U>(repo: R, gate: AuthGateState<U>) -> Router
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new()
        .route("/posts", get(handlers::list_posts::<R>))
        .route("/posts/{id}", get(handlers::get_post::<R>))
        .route("/comments/{id}", get(handlers::list_comments::<R>))
        .with_state(state.clone());

    let protected = Router::new()
        .route("/posts", post(handlers::create_post::<R>))
        .route(
            "/posts/{id}",
            put(handlers::update_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route(
            "/comments/{id}",
            post(handlers::create_comment::<R>)
                .put(handlers::update_comment::<R>)
                .delete(handlers::delete_comment::<R>),
        )
        .route_layer(middleware::from_fn(
            move |req: Request<Body>, next: Next| {
                let gate = gate.clone();
                async move { require_identity(gate, req, next).await }
            },
        ))
        .with_state(state);

    public.merge(protected)
}
