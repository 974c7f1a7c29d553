//! Checkout submission.

use tillpoint_client::dto::{CheckoutRequest, PaymentMethod, Receipt};
use tillpoint_client::ApiClient;
use tillpoint_core::{DomainError, StoreId};

use crate::cart::Cart;
use crate::error::SalesError;

/// Submit the cart for checkout.
///
/// The sale is atomic server-side. The cart is cleared only on success;
/// any failure leaves it untouched so the operator can retry.
pub async fn submit_checkout(
    client: &ApiClient,
    store_id: StoreId,
    cart: &mut Cart,
    payment: PaymentMethod,
) -> Result<Receipt, SalesError> {
    if cart.is_empty() {
        return Err(DomainError::validation("cart is empty").into());
    }

    let request = CheckoutRequest {
        store_id,
        lines: cart.checkout_lines(),
        payment,
    };

    let receipt = client.checkout(&request).await?;
    tracing::info!(receipt_id = %receipt.receipt_id, total = receipt.total, "checkout complete");
    cart.clear();
    Ok(receipt)
}
