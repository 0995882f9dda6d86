//! Database access for the checkout service's order store.
//!
//! # Database: `ordersdb`
//!
//! ## Tables
//!
//! - `orders` - one row per completed checkout
//! - `order_items` - line items, keyed by `order_id`
//!
//! Schema management is owned by the deployment, not this crate.

pub mod orders;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use thiserror::Error;

pub use orders::OrderStore;

use crate::config::DatabaseConfig;

/// Errors establishing the database connection at startup.
///
/// Fatal to persistence capability, but non-fatal to the host process by
/// convention: callers typically log and continue with
/// [`OrderStore::disconnected`].
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// A connection parameter could not be used to build the descriptor.
    #[error("invalid database config: {0}")]
    Config(String),

    /// The server did not answer the reachability check.
    #[error("database unreachable: {0}")]
    Ping(#[source] sqlx::Error),
}

/// Errors saving one order. Each variant tags the failed step of the
/// transaction and carries the underlying cause.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Opening the transaction failed.
    #[error("failed to begin transaction: {0}")]
    Begin(#[source] sqlx::Error),

    /// The order row insert failed (includes duplicate order ids).
    #[error("failed to insert order: {0}")]
    InsertOrder(#[source] sqlx::Error),

    /// A line-item insert failed; earlier inserts are rolled back.
    #[error("failed to insert order item {product_id}: {source}")]
    InsertItem {
        product_id: String,
        #[source]
        source: sqlx::Error,
    },

    /// The commit failed; the order is not persisted.
    #[error("failed to commit transaction: {0}")]
    Commit(#[source] sqlx::Error),
}

/// Open a `PostgreSQL` connection pool and verify the server is reachable.
///
/// Pool creation is lazy (descriptor validation only); the single `SELECT 1`
/// round trip is what proves reachability. TLS is disabled: the store is only
/// reachable on the private cluster network.
///
/// Call once at process start, before the first save.
///
/// # Errors
///
/// Returns [`ConnectionError::Config`] if `port` is not a valid port number,
/// or [`ConnectionError::Ping`] if the server does not respond.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, ConnectionError> {
    let port: u16 = config.port.parse().map_err(|_| {
        ConnectionError::Config(format!("DB_PORT is not a valid port number: {:?}", config.port))
    })?;

    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(port)
        .username(&config.user)
        .password(config.password.expose_secret())
        .database(&config.database)
        .ssl_mode(PgSslMode::Disable);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy_with(options);

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(ConnectionError::Ping)?;

    tracing::info!(
        host = %config.host,
        database = %config.database,
        "connected to PostgreSQL"
    );

    Ok(pool)
}
