//! Checkout Persistence - order storage for the checkout service.
//!
//! Records completed checkouts (one order row plus its line items) in
//! `PostgreSQL`. Persistence is best-effort by design: the checkout flow must
//! never fail because storage is unavailable, so a store constructed without a
//! connection turns every save into a logged no-op.
//!
//! # Usage
//!
//! ```rust,ignore
//! let config = DatabaseConfig::from_env();
//! let store = match db::connect(&config).await {
//!     Ok(pool) => OrderStore::new(pool),
//!     Err(err) => {
//!         tracing::warn!(error = %err, "continuing without order persistence");
//!         OrderStore::disconnected()
//!     }
//! };
//!
//! // Per checkout completion:
//! store.save_order(&order_result, &request).await?;
//! ```
//!
//! Connect once at process start, before the first save, and share the store
//! by reference afterwards. There is no re-initialization path: building a
//! second store means building a second pool.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;

pub use config::DatabaseConfig;
pub use db::{ConnectionError, OrderStore, SaveError};
