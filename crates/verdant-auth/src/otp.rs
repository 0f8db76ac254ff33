//! OTP challenge generation.

use serde::{Deserialize, Serialize};

/// How long a generated code stays valid: two minutes.
pub const OTP_TTL_MILLIS: i64 = 120_000;

/// Cooldown before a new code may be requested for the same login attempt.
pub const OTP_RESEND_COOLDOWN_SECS: u64 = 30;

/// Attempt ceiling recorded alongside the challenge. The counter is
/// persisted but, like the rest of this flow, never enforced.
pub const MAX_OTP_ATTEMPTS: u32 = 3;

/// A generated OTP challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpChallenge {
    /// The six-digit code.
    pub code: String,
    /// Mobile number the code was issued to.
    pub mobile: String,
    /// Unix-millisecond expiry.
    pub expires_at: i64,
}

impl OtpChallenge {
    /// Generate a fresh six-digit challenge for a mobile number.
    pub fn generate(mobile: impl Into<String>) -> Self {
        use rand::Rng;
        let code: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        Self {
            code: code.to_string(),
            mobile: mobile.into(),
            expires_at: now_millis() + OTP_TTL_MILLIS,
        }
    }

    /// Check if the challenge has expired.
    pub fn is_expired(&self) -> bool {
        now_millis() > self.expires_at
    }
}

/// Current Unix time in milliseconds.
pub(crate) fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_is_six_digits() {
        for _ in 0..50 {
            let challenge = OtpChallenge::generate("9876543210");
            assert_eq!(challenge.code.len(), 6);
            assert!(challenge.code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_fresh_challenge_not_expired() {
        let challenge = OtpChallenge::generate("9876543210");
        assert!(!challenge.is_expired());
    }

    #[test]
    fn test_expiry_window() {
        let challenge = OtpChallenge::generate("9876543210");
        assert!(challenge.expires_at - now_millis() <= OTP_TTL_MILLIS);

        let stale = OtpChallenge {
            expires_at: now_millis() - 1,
            ..challenge
        };
        assert!(stale.is_expired());
    }
}
