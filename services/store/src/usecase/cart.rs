use marquee_domain::id::{CartItemId, MovieId, UserId};

use crate::domain::repository::{CartRepository, MovieRepository};
use crate::domain::types::{CartItem, CartLine};
use crate::error::StoreServiceError;

// ── AddToCart ────────────────────────────────────────────────────────────────

pub struct AddToCartUseCase<M: MovieRepository, C: CartRepository> {
    pub movies: M,
    pub cart: C,
}

impl<M: MovieRepository, C: CartRepository> AddToCartUseCase<M, C> {
    /// Get-or-create the (user, movie) item; an existing item gains one unit,
    /// saturating at `i32::MAX`.
    pub async fn execute(
        &self,
        user_id: UserId,
        movie_id: MovieId,
    ) -> Result<CartItem, StoreServiceError> {
        self.movies
            .find_by_id(movie_id)
            .await?
            .ok_or(StoreServiceError::MovieNotFound)?;
        match self.cart.find(user_id, movie_id).await? {
            Some(mut item) => {
                item.quantity = item.quantity.saturating_add(1);
                self.cart.set_quantity(item.id, item.quantity).await?;
                Ok(item)
            }
            None => self.cart.create(user_id, movie_id).await,
        }
    }
}

// ── ViewCart ─────────────────────────────────────────────────────────────────

pub struct ViewCartUseCase<C: CartRepository> {
    pub cart: C,
}

impl<C: CartRepository> ViewCartUseCase<C> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<CartLine>, StoreServiceError> {
        self.cart.list(user_id).await
    }
}

// ── RemoveFromCart ───────────────────────────────────────────────────────────

pub struct RemoveFromCartUseCase<C: CartRepository> {
    pub cart: C,
}

impl<C: CartRepository> RemoveFromCartUseCase<C> {
    pub async fn execute(
        &self,
        user_id: UserId,
        item_id: CartItemId,
    ) -> Result<(), StoreServiceError> {
        let deleted = self.cart.delete_owned(item_id, user_id).await?;
        if !deleted {
            return Err(StoreServiceError::CartItemNotFound);
        }
        Ok(())
    }
}
