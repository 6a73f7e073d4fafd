#![allow(async_fn_in_trait)]

use marquee_domain::id::{CartItemId, MovieId, OrderId, ReviewId, UserId};

use crate::domain::types::{
    CartItem, CartLine, Movie, NewMovie, NewUser, Order, Review, User,
};
use crate::error::StoreServiceError;

/// Repository for registered accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreServiceError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreServiceError>;

    /// Whether any account uses `username`, compared case-insensitively.
    async fn username_taken(&self, username: &str) -> Result<bool, StoreServiceError>;

    async fn create(&self, user: &NewUser) -> Result<User, StoreServiceError>;

    async fn set_password_hash(
        &self,
        id: UserId,
        password_hash: &str,
    ) -> Result<(), StoreServiceError>;
}

/// Repository for the movie catalog.
pub trait MovieRepository: Send + Sync {
    /// All movies in id order, or those whose title contains `query` ignoring case.
    async fn search(&self, query: Option<&str>) -> Result<Vec<Movie>, StoreServiceError>;

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, StoreServiceError>;

    async fn count(&self) -> Result<u64, StoreServiceError>;

    /// Insert all of `batch` or none of it. Returns how many were added.
    async fn create_many(&self, batch: &[NewMovie]) -> Result<usize, StoreServiceError>;
}

/// Repository for movie reviews.
pub trait ReviewRepository: Send + Sync {
    /// Reviews of a movie, newest first.
    async fn list_by_movie(&self, movie_id: MovieId) -> Result<Vec<Review>, StoreServiceError>;

    async fn find_by_movie_and_user(
        &self,
        movie_id: MovieId,
        user_id: UserId,
    ) -> Result<Option<Review>, StoreServiceError>;

    /// Ownership-filtered lookup: `None` when the review is missing or belongs to someone else.
    async fn find_owned(
        &self,
        id: ReviewId,
        user_id: UserId,
    ) -> Result<Option<Review>, StoreServiceError>;

    async fn create(
        &self,
        movie_id: MovieId,
        user_id: UserId,
        content: &str,
    ) -> Result<Review, StoreServiceError>;

    async fn update_content(&self, id: ReviewId, content: &str) -> Result<(), StoreServiceError>;

    async fn delete(&self, id: ReviewId) -> Result<(), StoreServiceError>;
}

/// Repository for shopping cart items.
pub trait CartRepository: Send + Sync {
    /// The user's cart items with their movies, in insertion order.
    async fn list(&self, user_id: UserId) -> Result<Vec<CartLine>, StoreServiceError>;

    async fn find(
        &self,
        user_id: UserId,
        movie_id: MovieId,
    ) -> Result<Option<CartItem>, StoreServiceError>;

    /// Insert an item with quantity 1.
    async fn create(
        &self,
        user_id: UserId,
        movie_id: MovieId,
    ) -> Result<CartItem, StoreServiceError>;

    async fn set_quantity(&self, id: CartItemId, quantity: i32) -> Result<(), StoreServiceError>;

    /// Delete an item owned by `user_id`. Returns `true` if a row was deleted.
    async fn delete_owned(
        &self,
        id: CartItemId,
        user_id: UserId,
    ) -> Result<bool, StoreServiceError>;
}

/// Repository for placed orders.
pub trait OrderRepository: Send + Sync {
    /// The user's orders, newest first, each with its movies.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreServiceError>;

    /// Create an order linked to `movie_ids` and delete `cart_item_ids`, atomically.
    async fn create_from_cart(
        &self,
        user_id: UserId,
        movie_ids: &[MovieId],
        cart_item_ids: &[CartItemId],
    ) -> Result<OrderId, StoreServiceError>;
}

/// Password hashing scheme.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, StoreServiceError>;

    /// `false` on mismatch; an unparsable stored hash is an error.
    fn verify(&self, password_hash: &str, password: &str) -> Result<bool, StoreServiceError>;
}
