//! SeaORM entities for the store database.

pub mod cart_items;
pub mod movies;
pub mod order_items;
pub mod order_movies;
pub mod orders;
pub mod reviews;
pub mod users;
