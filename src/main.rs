//! Habitude server binary.
//!
//! Loads configuration, connects to PostgreSQL, wires the adapters into
//! the application handlers and serves the HTTP API. When Telegram is
//! configured, a background reminder sweep runs alongside the server.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::{middleware, Router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use habitude::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
use habitude::adapters::http::habit::{habit_routes, HabitHandlers};
use habitude::adapters::http::middleware::{auth_middleware, AuthState};
use habitude::adapters::http::user::{user_routes, UserHandlers};
use habitude::adapters::postgres::{PostgresHabitRepository, PostgresUserRepository};
use habitude::adapters::telegram::TelegramMessageSender;
use habitude::application::handlers::habit::{
    CreateHabitHandler, DeleteHabitHandler, GetHabitHandler, ListOwnHabitsHandler,
    ListPublishedHabitsHandler, UpdateHabitHandler,
};
use habitude::application::handlers::user::{LoginUserHandler, RegisterUserHandler};
use habitude::application::reminder::{run_scheduler, ReminderJob};
use habitude::config::AppConfig;
use habitude::ports::{
    HabitRepository, MessageSender, PasswordHasher, TokenService, UserRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Ports
    let habit_repo: Arc<dyn HabitRepository> = Arc::new(PostgresHabitRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl_secs,
    ));

    // Application handlers
    let habit_handlers = HabitHandlers::new(
        Arc::new(CreateHabitHandler::new(habit_repo.clone())),
        Arc::new(UpdateHabitHandler::new(habit_repo.clone())),
        Arc::new(GetHabitHandler::new(habit_repo.clone())),
        Arc::new(DeleteHabitHandler::new(habit_repo.clone())),
        Arc::new(ListPublishedHabitsHandler::new(habit_repo.clone())),
        Arc::new(ListOwnHabitsHandler::new(habit_repo.clone())),
    );
    let user_handlers = UserHandlers::new(
        Arc::new(RegisterUserHandler::new(user_repo.clone(), hasher.clone())),
        Arc::new(LoginUserHandler::new(
            user_repo.clone(),
            hasher,
            tokens.clone(),
        )),
    );

    // Background reminder sweep, only when a bot token is configured
    if config.reminder.enabled {
        if let Some(bot_token) = config.telegram.bot_token.clone() {
            let sender: Arc<dyn MessageSender> = Arc::new(TelegramMessageSender::new(
                reqwest::Client::new(),
                config.telegram.api_base.clone(),
                bot_token,
            ));
            let job = Arc::new(ReminderJob::new(habit_repo, user_repo, sender));
            tokio::spawn(run_scheduler(job, config.reminder.interval()));
            info!(
                interval_secs = config.reminder.interval_secs,
                "reminder scheduler started"
            );
        } else {
            warn!("reminders enabled but no Telegram bot token configured, sweep disabled");
        }
    }

    let auth_state: AuthState = tokens;
    let app = Router::new()
        .merge(habit_routes(habit_handlers))
        .merge(user_routes(user_handlers))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server.cors_origins_list()));

    let addr = config.server.socket_addr();
    info!(%addr, "listening");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}
