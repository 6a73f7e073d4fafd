use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use marquee_domain::id::{CartItemId, MovieId, OrderId, ReviewId, UserId};

/// Registered account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub date_joined: DateTime<Utc>,
}

/// Account about to be inserted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub price: Decimal,
    pub description: String,
    /// Path relative to the media root.
    pub image: Option<String>,
    pub release_date: NaiveDate,
}

/// Catalog entry about to be inserted. Also the shape of a seed-file record.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Defaults to today when absent.
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

/// A review together with its author's username.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub movie_id: MovieId,
    pub user_id: UserId,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// One movie in a user's cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub quantity: i32,
}

/// A cart item joined with the movie it refers to.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub item: CartItem,
    pub movie: Movie,
}

impl CartLine {
    pub fn subtotal(&self) -> Decimal {
        self.movie.price * Decimal::from(self.item.quantity)
    }
}

/// Sum of all line subtotals.
pub fn cart_total(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::subtotal).sum()
}

/// A placed order and the movies linked to it.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub movies: Vec<Movie>,
}

/// Distinct movie ids of a cart, in first-seen order.
pub fn distinct_movie_ids(items: &[CartItem]) -> Vec<MovieId> {
    let mut ids: Vec<MovieId> = Vec::with_capacity(items.len());
    for item in items {
        if !ids.contains(&item.movie_id) {
            ids.push(item.movie_id);
        }
    }
    ids
}

/// Content of a submitted review, if it has anything besides whitespace.
pub fn meaningful_content(content: Option<&str>) -> Option<&str> {
    content.filter(|c| !c.trim().is_empty())
}
