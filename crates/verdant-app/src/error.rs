//! Application error types.

use thiserror::Error;

use crate::gateway::GatewayError;
use verdant_auth::AuthError;
use verdant_commerce::CommerceError;
use verdant_store::StoreError;

/// Errors surfaced by storefront operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Domain-rule violation.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Login flow failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Device storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Payment gateway failure.
    #[error(transparent)]
    Payment(#[from] GatewayError),

    /// Operation requires a signed-in customer.
    #[error("Sign in to continue")]
    NotLoggedIn,

    /// Operation requires a checkout in progress.
    #[error("No checkout in progress")]
    NoActiveCheckout,
}

impl AppError {
    /// Check if retrying the same operation can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Payment(e) if e.is_retryable())
    }
}
