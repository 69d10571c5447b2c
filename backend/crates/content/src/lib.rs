//! Content Backend Module (posts and comments)
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, read models, ownership rules, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access Model
//! - Listing and detail reads are public
//! - Every mutation requires a resolved identity (auth gate) and passes
//!   an ownership check: only the author may update or delete
//! - Records have exactly one owner, set at creation, never reassigned
//! - Last writer wins; the single-record write is the unit of atomicity

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ContentError, ContentResult};
pub use infra::postgres::PgContentRepository;
pub use presentation::router::content_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
