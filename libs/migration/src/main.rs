//! Migration CLI for the items/users schema.
//!
//! Reads `DATABASE_URL`. `cargo run -p migration -- status`, `up`, `down`, `fresh`.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
