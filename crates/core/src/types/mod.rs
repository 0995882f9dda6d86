//! Core types for the checkout persistence layer.

pub mod money;
pub mod order;

pub use money::Money;
pub use order::{Address, CartItem, OrderItem, OrderResult, PlaceOrderRequest};
