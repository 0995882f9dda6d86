//! Inbound checkout structures.
//!
//! These mirror the checkout service's wire messages: an [`OrderResult`] is
//! the computed outcome of a checkout (priced, tracked, itemized) and a
//! [`PlaceOrderRequest`] carries the originating user and shipping fields.
//! Both are produced upstream of the persistence layer and are read-only here.

use serde::{Deserialize, Serialize};

use super::Money;

/// A shipping or billing address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    /// Kept as a string so leading zeros survive persistence.
    pub zip_code: String,
}

/// A product reference with a quantity, as it appeared in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub quantity: i32,
}

/// One priced line item of a completed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// The cart item this line was priced from.
    pub item: CartItem,
    /// Cost of the line at checkout time.
    pub cost: Money,
}

/// The computed outcome of a checkout, ready to record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub order_id: String,
    pub shipping_tracking_id: String,
    pub shipping_cost: Money,
    pub items: Vec<OrderItem>,
}

/// The request that initiated the checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub user_id: String,
    pub user_currency: String,
    pub address: Address,
    pub email: String,
}
