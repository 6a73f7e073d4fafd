use marquee_domain::id::{CartItemId, OrderId, UserId};

use crate::domain::repository::{CartRepository, OrderRepository};
use crate::domain::types::{Order, distinct_movie_ids};
use crate::error::StoreServiceError;

// ── PlaceOrder ───────────────────────────────────────────────────────────────

pub struct PlaceOrderUseCase<C: CartRepository, O: OrderRepository> {
    pub cart: C,
    pub orders: O,
}

impl<C: CartRepository, O: OrderRepository> PlaceOrderUseCase<C, O> {
    /// Turn the user's cart into an order. Returns `None` for an empty cart.
    ///
    /// Quantities are not carried over: the order links each distinct movie once.
    pub async fn execute(&self, user_id: UserId) -> Result<Option<OrderId>, StoreServiceError> {
        let lines = self.cart.list(user_id).await?;
        if lines.is_empty() {
            return Ok(None);
        }
        let items: Vec<_> = lines.into_iter().map(|line| line.item).collect();
        let movie_ids = distinct_movie_ids(&items);
        let item_ids: Vec<CartItemId> = items.iter().map(|item| item.id).collect();
        let order_id = self
            .orders
            .create_from_cart(user_id, &movie_ids, &item_ids)
            .await?;
        tracing::info!(
            order_id = %order_id,
            user_id = %user_id,
            movies = movie_ids.len(),
            "order placed"
        );
        Ok(Some(order_id))
    }
}

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<O: OrderRepository> {
    pub orders: O,
}

impl<O: OrderRepository> ListOrdersUseCase<O> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<Order>, StoreServiceError> {
        self.orders.list_by_user(user_id).await
    }
}
