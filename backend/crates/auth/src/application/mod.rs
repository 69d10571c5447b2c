//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod log_in;
pub mod sign_up;
pub mod token;

// Re-exports
pub use authenticate::AuthenticateUseCase;
pub use config::AuthConfig;
pub use log_in::{LogInInput, LogInOutput, LogInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use token::TokenCodec;
