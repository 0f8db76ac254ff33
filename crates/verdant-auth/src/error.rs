//! Auth error types.

use thiserror::Error;
use verdant_store::StoreError;

/// Errors that can occur in the login flow.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Mobile number is not exactly ten digits.
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidMobile,

    /// Entered code is not exactly six digits.
    #[error("Please enter the 6-digit code")]
    InvalidOtp,

    /// No customer is signed in.
    #[error("Not logged in")]
    NotLoggedIn,

    /// Device storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
