//! Application Layer
//!
//! Use cases for posts and comments.

pub mod comments;
pub mod posts;

// Re-exports
pub use comments::{
    CreateCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase, UpdateCommentUseCase,
};
pub use posts::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase,
    UpdatePostInput, UpdatePostUseCase,
};
