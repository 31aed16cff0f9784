use axum_helpers::server::{create_production_app, health_router};
use axum_helpers::{JwtAuth, create_cors_layer, create_router};
use clap::{Parser, Subcommand};
use core_config::FromEnv;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{self, DatabaseConnection, PostgresConfig};
use domain_users::{CreateUser, PgUserRepository, UserService};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, Environment};
use state::AppState;

#[derive(Parser)]
#[command(name = "todo_api")]
#[command(about = "To-do items REST API with JWT authentication")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Create an active user account
    CreateUser {
        #[arg(short, long)]
        username: String,

        /// 8 to 128 characters
        #[arg(short, long)]
        password: String,
    },

    /// Stop an account from obtaining or refreshing tokens
    DeactivateUser {
        #[arg(short, long)]
        username: String,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = Config::from_env()?;
            init_tracing(&config.environment);
            serve(config).await
        }
        Command::CreateUser { username, password } => {
            init_tracing(&Environment::from_env());
            let service = user_service().await?;
            let user = service.create_user(CreateUser { username, password }).await?;
            info!(user_id = user.id, username = %user.username, "User created");
            Ok(())
        }
        Command::DeactivateUser { username } => {
            init_tracing(&Environment::from_env());
            let service = user_service().await?;
            if !service.set_active(&username, false).await? {
                return Err(eyre::eyre!("No user named '{}'", username));
            }
            info!(username = %username, "User deactivated");
            Ok(())
        }
    }
}

async fn connect(config: PostgresConfig) -> eyre::Result<DatabaseConnection> {
    let db = postgres::connect_from_config_with_retry(config, None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    postgres::run_migrations::<Migrator>(&db, env!("CARGO_PKG_NAME")).await?;
    Ok(db)
}

async fn user_service() -> eyre::Result<UserService<PgUserRepository>> {
    let db = connect(PostgresConfig::from_env()?).await?;
    Ok(UserService::new(PgUserRepository::new(db)))
}

async fn serve(config: Config) -> eyre::Result<()> {
    let db = connect(config.database.clone()).await?;
    let jwt_auth = JwtAuth::new(&config.jwt);
    let cors = create_cors_layer(&config.cors)?;

    let state = AppState {
        config,
        db,
        jwt_auth,
    };

    let api_routes = api::routes(&state);

    // create_router adds docs/middleware and nests the API under /api
    let router = create_router::<openapi::ApiDoc>(api_routes, cors);

    // - /health: liveness with app name/version
    // - /ready: database ping
    // - /api/: API root listing
    // - /list/: greeting page
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()))
        .merge(api::root::router())
        .merge(api::index::router());

    info!("Starting todo API (30s cleanup timeout)");

    let AppState { config, db, .. } = state;
    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Todo API shutdown complete");
    Ok(())
}
