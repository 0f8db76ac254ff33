//! Checkout flow state machine.

use serde::{Deserialize, Serialize};

use crate::checkout::ShippingAddress;
use crate::error::CommerceError;
use crate::orders::PaymentMethod;

/// Stages of the checkout flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStage {
    /// Shipping details form.
    Address,
    /// Order summary review.
    Summary,
    /// Payment method selection and submission.
    Payment,
    /// Terminal: payment succeeded and an order was recorded.
    Complete,
}

impl CheckoutStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStage::Address => "address",
            CheckoutStage::Summary => "summary",
            CheckoutStage::Payment => "payment",
            CheckoutStage::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStage::Address => "Shipping Details",
            CheckoutStage::Summary => "Order Summary",
            CheckoutStage::Payment => "Payment Selection",
            CheckoutStage::Complete => "Complete",
        }
    }

    /// Get the step number shown in the progress indicator (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStage::Address => 1,
            CheckoutStage::Summary => 2,
            CheckoutStage::Payment => 3,
            CheckoutStage::Complete => 3,
        }
    }
}

/// Checkout flow state.
///
/// A linear Address → Summary → Payment sequence. Forward progress out of
/// `Address` is gated on a complete address; `Summary → Payment` is
/// unconditional; backward navigation discards nothing. Once the flow is
/// marked complete it rejects any further transition — the idempotency
/// guard against a double payment submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutFlow {
    stage: CheckoutStage,
    address: Option<ShippingAddress>,
    method: PaymentMethod,
}

impl CheckoutFlow {
    /// Start a new checkout at the address stage.
    pub fn new() -> Self {
        Self {
            stage: CheckoutStage::Address,
            address: None,
            method: PaymentMethod::default(),
        }
    }

    /// Current stage.
    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// The submitted address, if any.
    pub fn address(&self) -> Option<&ShippingAddress> {
        self.address.as_ref()
    }

    /// The selected payment method.
    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Submit the shipping address form.
    ///
    /// Moves `Address → Summary` when every required field is filled in.
    ///
    /// # Errors
    ///
    /// - `AddressIncomplete` naming the blank fields; the stage does not
    ///   change.
    /// - `InvalidCheckoutTransition` when not at the address stage.
    pub fn submit_address(&mut self, address: ShippingAddress) -> Result<(), CommerceError> {
        self.expect_stage(CheckoutStage::Address, "summary")?;
        if !address.is_complete() {
            return Err(CommerceError::AddressIncomplete(
                address.missing_fields().join(", "),
            ));
        }
        self.address = Some(address);
        self.stage = CheckoutStage::Summary;
        Ok(())
    }

    /// Confirm the order summary, moving `Summary → Payment` unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCheckoutTransition` when not at the summary stage.
    pub fn confirm_summary(&mut self) -> Result<(), CommerceError> {
        self.expect_stage(CheckoutStage::Summary, "payment")?;
        self.stage = CheckoutStage::Payment;
        Ok(())
    }

    /// Navigate one stage backward, keeping all entered state.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCheckoutTransition` at the address stage (nothing to
    /// go back to) and on a completed flow.
    pub fn go_back(&mut self) -> Result<CheckoutStage, CommerceError> {
        let prev = match self.stage {
            CheckoutStage::Address | CheckoutStage::Complete => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: self.stage.as_str(),
                    to: "back",
                })
            }
            CheckoutStage::Summary => CheckoutStage::Address,
            CheckoutStage::Payment => CheckoutStage::Summary,
        };
        self.stage = prev;
        Ok(prev)
    }

    /// Select the payment method. Allowed at any stage before completion.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutAlreadyComplete` on a completed flow.
    pub fn select_method(&mut self, method: PaymentMethod) -> Result<(), CommerceError> {
        if self.stage == CheckoutStage::Complete {
            return Err(CommerceError::CheckoutAlreadyComplete);
        }
        self.method = method;
        Ok(())
    }

    /// Check that the flow is ready for payment submission.
    ///
    /// # Errors
    ///
    /// `CheckoutAlreadyComplete` after a successful payment, otherwise
    /// `InvalidCheckoutTransition` when not at the payment stage.
    pub fn ready_for_payment(&self) -> Result<(), CommerceError> {
        match self.stage {
            CheckoutStage::Payment => Ok(()),
            CheckoutStage::Complete => Err(CommerceError::CheckoutAlreadyComplete),
            _ => Err(CommerceError::InvalidCheckoutTransition {
                from: self.stage.as_str(),
                to: "complete",
            }),
        }
    }

    /// Mark the flow complete after a successful payment.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::ready_for_payment`].
    pub fn complete(&mut self) -> Result<(), CommerceError> {
        self.ready_for_payment()?;
        self.stage = CheckoutStage::Complete;
        Ok(())
    }

    /// Check if the flow has produced an order.
    pub fn is_complete(&self) -> bool {
        self.stage == CheckoutStage::Complete
    }

    fn expect_stage(
        &self,
        expected: CheckoutStage,
        to: &'static str,
    ) -> Result<(), CommerceError> {
        if self.stage == CheckoutStage::Complete {
            return Err(CommerceError::CheckoutAlreadyComplete);
        }
        if self.stage != expected {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.stage.as_str(),
                to,
            });
        }
        Ok(())
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}
