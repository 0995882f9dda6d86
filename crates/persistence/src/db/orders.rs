//! Order store: transactional writes of completed checkouts.
//!
//! One [`OrderStore::save_order`] call writes one `orders` row plus one
//! `order_items` row per line item, all inside a single transaction. The
//! transaction guard rolls back on every exit path unless the commit is
//! reached, so a failed insert never leaves a partial order behind.

use checkout_core::{OrderResult, PlaceOrderRequest};
use sqlx::PgPool;

use super::SaveError;

const INSERT_ORDER: &str = r"
    INSERT INTO orders (
        order_id, user_id, user_email, user_currency,
        shipping_address_street, shipping_address_city, shipping_address_state,
        shipping_address_country, shipping_address_zip_code,
        shipping_tracking_id, shipping_cost_currency, shipping_cost_units, shipping_cost_nanos,
        total_items
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
";

const INSERT_ORDER_ITEM: &str = r"
    INSERT INTO order_items (
        order_id, product_id, quantity, cost_currency, cost_units, cost_nanos
    ) VALUES ($1, $2, $3, $4, $5, $6)
";

/// Store for completed checkout orders.
///
/// Holds the shared connection pool for the life of the process. A store
/// built with [`OrderStore::disconnected`] accepts every save and writes
/// nothing: persistence is secondary to checkout completion, so a missing
/// database must never fail the flow.
pub struct OrderStore {
    pool: Option<PgPool>,
}

impl OrderStore {
    /// Create a store backed by a connected pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a store that skips every save.
    ///
    /// Used when [`super::connect`] failed and the host chose to continue
    /// without persistence.
    #[must_use]
    pub const fn disconnected() -> Self {
        Self { pool: None }
    }

    /// Whether the store is backed by a database connection.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.pool.is_some()
    }

    /// Save one completed checkout: the order row and all of its item rows,
    /// atomically.
    ///
    /// A disconnected store logs a warning and returns `Ok(())` without
    /// writing anything. `total_items` is computed from the item count at
    /// write time; the zip code is stored in its string form. Saving the same
    /// order id twice is a constraint violation, not an upsert.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] tagging the failed step (begin, order insert,
    /// item insert, or commit) with the underlying cause. On any error the
    /// transaction is rolled back and no rows from this call persist.
    pub async fn save_order(
        &self,
        order: &OrderResult,
        request: &PlaceOrderRequest,
    ) -> Result<(), SaveError> {
        let Some(pool) = &self.pool else {
            tracing::warn!(
                order_id = %order.order_id,
                "database not connected, skipping order save"
            );
            return Ok(());
        };

        let mut tx = pool.begin().await.map_err(SaveError::Begin)?;

        let total_items = i32::try_from(order.items.len()).unwrap_or(i32::MAX);

        sqlx::query(INSERT_ORDER)
            .bind(&order.order_id)
            .bind(&request.user_id)
            .bind(&request.email)
            .bind(&request.user_currency)
            .bind(&request.address.street_address)
            .bind(&request.address.city)
            .bind(&request.address.state)
            .bind(&request.address.country)
            .bind(&request.address.zip_code)
            .bind(&order.shipping_tracking_id)
            .bind(&order.shipping_cost.currency_code)
            .bind(order.shipping_cost.units)
            .bind(order.shipping_cost.nanos)
            .bind(total_items)
            .execute(&mut *tx)
            .await
            .map_err(SaveError::InsertOrder)?;

        for item in &order.items {
            sqlx::query(INSERT_ORDER_ITEM)
                .bind(&order.order_id)
                .bind(&item.item.product_id)
                .bind(item.item.quantity)
                .bind(&item.cost.currency_code)
                .bind(item.cost.units)
                .bind(item.cost.nanos)
                .execute(&mut *tx)
                .await
                .map_err(|e| SaveError::InsertItem {
                    product_id: item.item.product_id.clone(),
                    source: e,
                })?;
        }

        tx.commit().await.map_err(SaveError::Commit)?;

        tracing::info!(
            order_id = %order.order_id,
            total_items,
            "order saved"
        );

        Ok(())
    }
}
