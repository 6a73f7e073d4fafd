use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(marquee_store_migration::Migrator).await;
}
