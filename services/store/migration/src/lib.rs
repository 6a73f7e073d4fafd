use sea_orm_migration::prelude::*;

mod m20250901_000001_create_users;
mod m20250901_000002_create_movies;
mod m20250901_000003_create_reviews;
mod m20250901_000004_create_cart_items;
mod m20250901_000005_create_orders;
mod m20250901_000006_create_order_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_users::Migration),
            Box::new(m20250901_000002_create_movies::Migration),
            Box::new(m20250901_000003_create_reviews::Migration),
            Box::new(m20250901_000004_create_cart_items::Migration),
            Box::new(m20250901_000005_create_orders::Migration),
            Box::new(m20250901_000006_create_order_items::Migration),
        ]
    }
}
