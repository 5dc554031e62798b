//! Server entry point. Configuration comes from the environment (see `Settings`).
//!
//! Run from repo root: `cargo run -p ucsb-course-api-server`

use tokio::net::TcpListener;
use ucsb_course_api::{app, ensure_database_exists, ensure_tables, AppState, Settings, StorageKind};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ucsb_course_api=info,ucsb_course_api_server=info")),
        )
        .init();

    let state = match settings.storage {
        StorageKind::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(&settings.database_url)
                .await?;
            ensure_tables(&pool).await?;
            AppState::postgres(pool)
        }
        StorageKind::Memory => {
            tracing::warn!("using in-memory storage; data is lost on shutdown");
            AppState::in_memory()
        }
    };

    let router = app(state.with_system_info(settings.system_info.clone()), settings.body_limit_bytes);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
