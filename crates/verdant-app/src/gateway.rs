//! Simulated payment gateway.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use verdant_commerce::ids::PaymentId;
use verdant_commerce::money::Money;
use verdant_commerce::orders::PaymentMethod;

/// Default simulated processing latency in milliseconds.
pub const SIMULATED_LATENCY_MS: u64 = 2_000;

/// Default fraction of charges that fail (1 in 10).
pub const SIMULATED_FAILURE_RATE: f64 = 0.1;

/// Errors a payment gateway can raise.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GatewayError {
    /// Transient gateway outage; the charge may be retried.
    #[error("Payment gateway is temporarily unavailable. Please try again.")]
    TemporarilyUnavailable,
}

impl GatewayError {
    /// Check if retrying the charge can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::TemporarilyUnavailable)
    }
}

/// A payment acquirer.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge the given amount, returning a payment reference on success.
    async fn charge(&self, amount: Money, method: PaymentMethod)
        -> Result<PaymentId, GatewayError>;
}

/// The stand-in acquirer used by the storefront.
///
/// A simulation, not a payment integration: it sleeps for `latency`, then
/// fails with probability `failure_rate` and succeeds otherwise. Failures
/// are always the retryable [`GatewayError::TemporarilyUnavailable`].
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    latency: Duration,
    failure_rate: f64,
}

impl SimulatedGateway {
    /// Gateway with the default latency and failure rate.
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(SIMULATED_LATENCY_MS),
            failure_rate: SIMULATED_FAILURE_RATE,
        }
    }

    /// Override the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Override the failure probability (clamped to 0.0..=1.0).
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate.clamp(0.0, 1.0);
        self
    }

    /// A gateway that approves every charge immediately. For tests.
    pub fn instant_success() -> Self {
        Self::new()
            .with_latency(Duration::ZERO)
            .with_failure_rate(0.0)
    }

    /// A gateway that declines every charge immediately. For tests.
    pub fn instant_failure() -> Self {
        Self::new()
            .with_latency(Duration::ZERO)
            .with_failure_rate(1.0)
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(
        &self,
        amount: Money,
        method: PaymentMethod,
    ) -> Result<PaymentId, GatewayError> {
        tracing::debug!(amount = %amount, method = method.as_str(), "submitting charge");
        tokio::time::sleep(self.latency).await;

        let roll: f64 = rand::Rng::gen(&mut rand::thread_rng());
        if roll < self.failure_rate {
            tracing::warn!(amount = %amount, "simulated gateway outage");
            return Err(GatewayError::TemporarilyUnavailable);
        }

        let payment = PaymentId::generate();
        tracing::info!(amount = %amount, payment = %payment, "charge approved");
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_instant_success_approves() {
        let gateway = SimulatedGateway::instant_success();
        let result = gateway
            .charge(Money::inr(40_400), PaymentMethod::Upi)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_instant_failure_declines_retryably() {
        let gateway = SimulatedGateway::instant_failure();
        let err = gateway
            .charge(Money::inr(40_400), PaymentMethod::Card)
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::TemporarilyUnavailable);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_failure_rate_is_clamped() {
        let gateway = SimulatedGateway::new().with_failure_rate(7.5);
        assert!((gateway.failure_rate - 1.0).abs() < f64::EPSILON);
    }
}
