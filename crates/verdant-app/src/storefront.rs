//! The storefront application controller.

use verdant_auth::{Customer, OtpChallenge, OtpLogin};
use verdant_commerce::cart::{Cart, Quote};
use verdant_commerce::catalog::{Catalog, PackSize};
use verdant_commerce::checkout::{CheckoutFlow, ShippingAddress};
use verdant_commerce::ids::{OrderId, TeaId};
use verdant_commerce::loyalty::points_earned;
use verdant_commerce::orders::{Order, OrderHistory, PaymentMethod};
use verdant_commerce::CommerceError;
use verdant_store::{keys, Store};

use crate::error::AppError;
use crate::gateway::PaymentGateway;

/// The application-state controller.
///
/// Owns every piece of mutable storefront state and is the only place that
/// mutates it. The cart is persisted under [`keys::CART`] after every
/// mutation; the login state lives under the auth keys; orders and the
/// in-flight checkout are session-scoped.
pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
    customer: Option<Customer>,
    orders: OrderHistory,
    checkout: Option<CheckoutFlow>,
    store: Store,
    login: OtpLogin,
    gateway: Box<dyn PaymentGateway>,
}

impl Storefront {
    /// Open a storefront over the given store, restoring any persisted
    /// cart and login.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the persisted state cannot be read.
    pub fn open(store: Store, gateway: Box<dyn PaymentGateway>) -> Result<Self, AppError> {
        let login = OtpLogin::new(store.clone());
        let cart = store.get(keys::CART)?.unwrap_or_default();
        let customer = login.current()?;

        Ok(Self {
            catalog: Catalog::default(),
            cart,
            customer,
            orders: OrderHistory::new(),
            checkout: None,
            store,
            login,
            gateway,
        })
    }

    // ---- browsing -------------------------------------------------------

    /// The product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ---- cart -----------------------------------------------------------

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one pack of a tea to the cart, locking the current price for
    /// the chosen size.
    ///
    /// # Errors
    ///
    /// - `TeaNotFound` for an unknown tea id.
    /// - Storage errors when the cart cannot be persisted.
    pub fn add_to_cart(&mut self, tea: &TeaId, size: PackSize) -> Result<(), AppError> {
        let tea = self
            .catalog
            .get(tea)
            .ok_or_else(|| CommerceError::TeaNotFound(tea.to_string()))?
            .clone();
        let unit_price = size.price_for(tea.price)?;
        self.cart.add(&tea, size, unit_price);
        self.persist_cart()
    }

    /// Remove a cart line entirely.
    ///
    /// # Errors
    ///
    /// Storage errors when the cart cannot be persisted.
    pub fn remove_from_cart(&mut self, tea: &TeaId, size: PackSize) -> Result<(), AppError> {
        self.cart.remove(tea, size);
        self.persist_cart()
    }

    /// Adjust a line's quantity by a delta, removing it at zero.
    ///
    /// # Errors
    ///
    /// Storage errors when the cart cannot be persisted.
    pub fn change_quantity(
        &mut self,
        tea: &TeaId,
        size: PackSize,
        delta: i64,
    ) -> Result<(), AppError> {
        self.cart.adjust_quantity(tea, size, delta);
        self.persist_cart()
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Storage errors when the cart cannot be persisted.
    pub fn clear_cart(&mut self) -> Result<(), AppError> {
        self.cart.clear();
        self.persist_cart()
    }

    /// Price the current cart.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when an amount does not fit.
    pub fn quote(&self) -> Result<Quote, AppError> {
        Ok(Quote::for_cart(&self.cart)?)
    }

    // ---- login ----------------------------------------------------------

    /// The signed-in customer, if any.
    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// Issue a login OTP for a mobile number.
    ///
    /// # Errors
    ///
    /// See [`OtpLogin::request_otp`].
    pub fn request_otp(&self, mobile: &str) -> Result<OtpChallenge, AppError> {
        Ok(self.login.request_otp(mobile)?)
    }

    /// Verify an OTP and sign the customer in.
    ///
    /// # Errors
    ///
    /// See [`OtpLogin::verify_otp`].
    pub fn verify_otp(&mut self, mobile: &str, code: &str) -> Result<&Customer, AppError> {
        let customer = self.login.verify_otp(mobile, code)?;
        Ok(self.customer.insert(customer))
    }

    /// Sign out, clearing the login keys, the persisted cart and any
    /// checkout in progress.
    ///
    /// # Errors
    ///
    /// Storage errors when a key cannot be removed.
    pub fn logout(&mut self) -> Result<(), AppError> {
        self.login.logout()?;
        self.store.remove(keys::CART)?;
        self.cart.clear();
        self.customer = None;
        self.checkout = None;
        Ok(())
    }

    // ---- checkout -------------------------------------------------------

    /// The checkout in progress, if any.
    pub fn checkout(&self) -> Option<&CheckoutFlow> {
        self.checkout.as_ref()
    }

    /// Start a fresh checkout at the address stage.
    ///
    /// # Errors
    ///
    /// - `NotLoggedIn` without a signed-in customer.
    /// - `EmptyCart` when there is nothing to buy.
    pub fn begin_checkout(&mut self) -> Result<&CheckoutFlow, AppError> {
        if self.customer.is_none() {
            return Err(AppError::NotLoggedIn);
        }
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart.into());
        }
        Ok(self.checkout.insert(CheckoutFlow::new()))
    }

    /// Submit the shipping address form.
    ///
    /// # Errors
    ///
    /// `NoActiveCheckout` without a checkout; otherwise see
    /// [`CheckoutFlow::submit_address`].
    pub fn submit_address(&mut self, address: ShippingAddress) -> Result<(), AppError> {
        Ok(self.flow_mut()?.submit_address(address)?)
    }

    /// Confirm the order summary.
    ///
    /// # Errors
    ///
    /// `NoActiveCheckout` without a checkout; otherwise see
    /// [`CheckoutFlow::confirm_summary`].
    pub fn confirm_summary(&mut self) -> Result<(), AppError> {
        Ok(self.flow_mut()?.confirm_summary()?)
    }

    /// Navigate the checkout one stage backward.
    ///
    /// # Errors
    ///
    /// `NoActiveCheckout` without a checkout; otherwise see
    /// [`CheckoutFlow::go_back`].
    pub fn checkout_back(&mut self) -> Result<(), AppError> {
        self.flow_mut()?.go_back()?;
        Ok(())
    }

    /// Select the payment method.
    ///
    /// # Errors
    ///
    /// `NoActiveCheckout` without a checkout; otherwise see
    /// [`CheckoutFlow::select_method`].
    pub fn select_payment(&mut self, method: PaymentMethod) -> Result<(), AppError> {
        Ok(self.flow_mut()?.select_method(method)?)
    }

    /// Submit the payment and, on success, record the order.
    ///
    /// Charges the gateway for the quoted total. On success: builds the
    /// order snapshot, awards loyalty points, prepends it to the history,
    /// empties and persists the cart, and marks the checkout complete so a
    /// double submission is rejected. On a gateway failure nothing
    /// changes and the returned error is retryable.
    ///
    /// # Errors
    ///
    /// - `NoActiveCheckout` / stage errors when not at the payment stage.
    /// - `CheckoutAlreadyComplete` on resubmission after success.
    /// - `NotLoggedIn` without a signed-in customer.
    /// - `Payment` for the simulated gateway outage (retryable).
    pub async fn place_order(&mut self) -> Result<OrderId, AppError> {
        let (address, method) = {
            let flow = self.checkout.as_ref().ok_or(AppError::NoActiveCheckout)?;
            flow.ready_for_payment()?;
            let address = flow
                .address()
                .cloned()
                .ok_or_else(|| CommerceError::AddressIncomplete("address".to_string()))?;
            (address, flow.method())
        };
        if self.customer.is_none() {
            return Err(AppError::NotLoggedIn);
        }

        let quote = Quote::for_cart(&self.cart)?;
        let payment = self.gateway.charge(quote.total, method).await?;

        let order = Order::place(self.cart.lines().to_vec(), quote, address, method);
        let order_id = order.id.clone();
        tracing::info!(
            order = %order_id,
            payment = %payment,
            total = %quote.total,
            "order placed"
        );

        if let Some(customer) = self.customer.as_mut() {
            customer.award_points(points_earned(quote.subtotal));
        }
        self.orders.record(order);
        self.cart.clear();
        self.persist_cart()?;
        if let Some(flow) = self.checkout.as_mut() {
            flow.complete()?;
        }

        Ok(order_id)
    }

    // ---- orders ---------------------------------------------------------

    /// The order history, most recent first.
    pub fn orders(&self) -> &OrderHistory {
        &self.orders
    }

    // ---- internals ------------------------------------------------------

    fn flow_mut(&mut self) -> Result<&mut CheckoutFlow, AppError> {
        self.checkout.as_mut().ok_or(AppError::NoActiveCheckout)
    }

    fn persist_cart(&self) -> Result<(), AppError> {
        self.store.set(keys::CART, &self.cart)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::SimulatedGateway;
    use verdant_commerce::checkout::{AddressKind, CheckoutStage};
    use verdant_commerce::money::Money;

    fn address() -> ShippingAddress {
        ShippingAddress {
            full_name: "Julian Sterling".to_string(),
            mobile: "9876543210".to_string(),
            email: "julian@luxury.com".to_string(),
            address: "123, Tea Gardens Road".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "400001".to_string(),
            kind: AddressKind::Home,
        }
    }

    fn storefront(dir: &tempfile::TempDir, gateway: SimulatedGateway) -> Storefront {
        let store = Store::open(dir.path()).unwrap();
        Storefront::open(store, Box::new(gateway)).unwrap()
    }

    fn signed_in_with_cart(dir: &tempfile::TempDir, gateway: SimulatedGateway) -> Storefront {
        let mut shop = storefront(dir, gateway);
        shop.request_otp("9876543210").unwrap();
        shop.verify_otp("9876543210", "123456").unwrap();
        shop.add_to_cart(&TeaId::new("1"), PackSize::G250).unwrap();
        shop.add_to_cart(&TeaId::new("2"), PackSize::G250).unwrap();
        shop.add_to_cart(&TeaId::new("2"), PackSize::G250).unwrap();
        shop
    }

    #[test]
    fn test_add_unknown_tea_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = storefront(&dir, SimulatedGateway::instant_success());
        let err = shop
            .add_to_cart(&TeaId::new("99"), PackSize::G250)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Commerce(CommerceError::TeaNotFound(_))
        ));
    }

    #[test]
    fn test_cart_persists_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut shop = storefront(&dir, SimulatedGateway::instant_success());
            shop.add_to_cart(&TeaId::new("1"), PackSize::G500).unwrap();
        }
        let shop = storefront(&dir, SimulatedGateway::instant_success());
        assert_eq!(shop.cart().item_count(), 1);
        let line = shop.cart().lines().first().unwrap();
        // The 500 g price was locked at add time: ₹1,499.00 × 2 less 10%.
        assert_eq!(line.unit_price, Money::inr(269_820));
    }

    #[test]
    fn test_checkout_requires_login_and_items() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = storefront(&dir, SimulatedGateway::instant_success());

        assert!(matches!(
            shop.begin_checkout().unwrap_err(),
            AppError::NotLoggedIn
        ));

        shop.request_otp("9876543210").unwrap();
        shop.verify_otp("9876543210", "123456").unwrap();
        assert!(matches!(
            shop.begin_checkout().unwrap_err(),
            AppError::Commerce(CommerceError::EmptyCart)
        ));
    }

    #[tokio::test]
    async fn test_successful_payment_places_exactly_one_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = signed_in_with_cart(&dir, SimulatedGateway::instant_success());
        let points_before = shop.customer().unwrap().points;

        shop.begin_checkout().unwrap();
        shop.submit_address(address()).unwrap();
        shop.confirm_summary().unwrap();
        shop.select_payment(PaymentMethod::Card).unwrap();

        let order_id = shop.place_order().await.unwrap();

        // (a) exactly one order appended
        assert_eq!(shop.orders().len(), 1);
        let order = shop.orders().get(&order_id).unwrap();
        assert_eq!(order.totals.subtotal, Money::inr(529_700));
        assert_eq!(order.totals.total, Money::inr(625_046));
        assert_eq!(order.payment_method, PaymentMethod::Card);

        // (b) the cart is empty, in memory and on disk
        assert!(shop.cart().is_empty());
        let store = Store::open(dir.path()).unwrap();
        let persisted: Option<Cart> = store.get(keys::CART).unwrap();
        assert!(persisted.unwrap().is_empty());

        // (c) no stale pending-payment state
        assert!(shop.checkout().unwrap().is_complete());

        // loyalty: ₹5,297.00 subtotal awards 529 points
        assert_eq!(shop.customer().unwrap().points, points_before + 529);
    }

    #[tokio::test]
    async fn test_double_submission_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = signed_in_with_cart(&dir, SimulatedGateway::instant_success());
        shop.begin_checkout().unwrap();
        shop.submit_address(address()).unwrap();
        shop.confirm_summary().unwrap();
        shop.place_order().await.unwrap();

        let err = shop.place_order().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Commerce(CommerceError::CheckoutAlreadyComplete)
        ));
        assert_eq!(shop.orders().len(), 1);
    }

    #[tokio::test]
    async fn test_gateway_failure_preserves_state_for_retry() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = signed_in_with_cart(&dir, SimulatedGateway::instant_failure());
        shop.begin_checkout().unwrap();
        shop.submit_address(address()).unwrap();
        shop.confirm_summary().unwrap();

        let err = shop.place_order().await.unwrap_err();
        assert!(err.is_retryable());

        // Cart, address and stage all survive for the retry.
        assert_eq!(shop.cart().item_count(), 3);
        let flow = shop.checkout().unwrap();
        assert_eq!(flow.stage(), CheckoutStage::Payment);
        assert!(flow.address().is_some());
        assert!(shop.orders().is_empty());
    }

    #[tokio::test]
    async fn test_payment_before_payment_stage_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = signed_in_with_cart(&dir, SimulatedGateway::instant_success());
        shop.begin_checkout().unwrap();

        assert!(shop.place_order().await.is_err());

        shop.submit_address(address()).unwrap();
        assert!(shop.place_order().await.is_err());
        assert!(shop.orders().is_empty());
    }

    #[test]
    fn test_logout_clears_cart_and_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = signed_in_with_cart(&dir, SimulatedGateway::instant_success());

        shop.logout().unwrap();
        assert!(shop.customer().is_none());
        assert!(shop.cart().is_empty());

        let store = Store::open(dir.path()).unwrap();
        assert!(!store.contains(keys::CART));
        assert!(!store.contains(keys::LOGGED_IN));
    }

    #[test]
    fn test_login_restored_from_store() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut shop = storefront(&dir, SimulatedGateway::instant_success());
            shop.request_otp("9876543210").unwrap();
            shop.verify_otp("9876543210", "654321").unwrap();
        }
        let shop = storefront(&dir, SimulatedGateway::instant_success());
        assert_eq!(shop.customer().unwrap().mobile, "9876543210");
    }
}
