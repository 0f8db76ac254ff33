//! The mock OTP login flow.

use verdant_store::{keys, Store};

use crate::customer::Customer;
use crate::error::AuthError;
use crate::otp::OtpChallenge;

/// OTP-based login over the device store.
///
/// DEVELOPMENT MODE: a challenge is generated and persisted with its expiry
/// and attempt counter, but verification accepts any six-digit code — the
/// stored code, expiry and attempt limit are deliberately bypassed. Keep it
/// that way; this flow is a simulation, not an auth layer.
#[derive(Debug, Clone)]
pub struct OtpLogin {
    store: Store,
}

impl OtpLogin {
    /// Create a login flow over the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Issue an OTP for a mobile number and persist the challenge.
    ///
    /// The code is logged at info level in place of an SMS delivery.
    ///
    /// # Errors
    ///
    /// - `InvalidMobile` unless the number is exactly ten digits.
    /// - `Store` when the challenge cannot be persisted.
    pub fn request_otp(&self, mobile: &str) -> Result<OtpChallenge, AuthError> {
        if !is_ten_digits(mobile) {
            return Err(AuthError::InvalidMobile);
        }

        let challenge = OtpChallenge::generate(mobile);
        self.store.set(keys::OTP_CODE, &challenge.code)?;
        self.store.set(keys::OTP_EXPIRY, &challenge.expires_at)?;
        self.store.set(keys::OTP_ATTEMPTS, &0u32)?;

        tracing::info!(mobile, code = %challenge.code, "issued login OTP");
        Ok(challenge)
    }

    /// Verify an entered code and sign the customer in.
    ///
    /// Any six-digit code passes. The persisted attempt counter is bumped
    /// for UI parity but never compared against the limit.
    ///
    /// # Errors
    ///
    /// - `InvalidOtp` unless the code is exactly six digits.
    /// - `Store` when the login state cannot be persisted.
    pub fn verify_otp(&self, mobile: &str, code: &str) -> Result<Customer, AuthError> {
        if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
            let attempts: u32 = self.store.get(keys::OTP_ATTEMPTS)?.unwrap_or(0);
            self.store
                .set(keys::OTP_ATTEMPTS, &attempts.saturating_add(1))?;
            return Err(AuthError::InvalidOtp);
        }

        // Challenge satisfied; clear it and record the login.
        self.store.remove(keys::OTP_CODE)?;
        self.store.remove(keys::OTP_EXPIRY)?;
        self.store.remove(keys::OTP_ATTEMPTS)?;

        self.store.set(keys::LOGGED_IN, &"true".to_string())?;
        self.store.set(keys::USER_MOBILE, &mobile.to_string())?;

        tracing::info!(mobile, "customer signed in");
        Ok(Customer::for_mobile(mobile))
    }

    /// The signed-in customer restored from the store, if any.
    ///
    /// # Errors
    ///
    /// Returns `Store` when the login keys cannot be read.
    pub fn current(&self) -> Result<Option<Customer>, AuthError> {
        let logged_in: Option<String> = self.store.get(keys::LOGGED_IN)?;
        if logged_in.as_deref() != Some("true") {
            return Ok(None);
        }
        let mobile: Option<String> = self.store.get(keys::USER_MOBILE)?;
        Ok(mobile.map(Customer::for_mobile))
    }

    /// Sign out, removing the login keys.
    ///
    /// # Errors
    ///
    /// Returns `Store` when a key cannot be removed.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(keys::LOGGED_IN)?;
        self.store.remove(keys::USER_MOBILE)?;
        Ok(())
    }
}

fn is_ten_digits(mobile: &str) -> bool {
    mobile.len() == 10 && mobile.chars().all(|c| c.is_ascii_digit())
}
