//! Checkout Core - Shared types library.
//!
//! This crate provides the common types consumed by the checkout persistence
//! layer:
//! - [`types::Money`] - fixed-point money amount (currency + units + nanos)
//! - [`types::OrderResult`] - computed outcome of a checkout
//! - [`types::PlaceOrderRequest`] - originating user/address/currency fields
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access. Inbound
//! structures are produced upstream (by the checkout service's pricing path)
//! and treated as already validated.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
