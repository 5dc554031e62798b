//! Database bootstrap: create the database when missing and the entity tables when absent.

use crate::error::{BootstrapError, ConfigError};
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Idempotent DDL for every entity table. Column names match each entity's `TABLE` descriptor.
const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS "menuitemreview" (
        "id" BIGSERIAL PRIMARY KEY,
        "item_id" BIGINT NOT NULL,
        "reviewer_email" TEXT NOT NULL,
        "stars" INTEGER NOT NULL,
        "date_reviewed" TIMESTAMP NOT NULL,
        "comments" TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "ucsbdiningcommonsmenuitems" (
        "id" BIGSERIAL PRIMARY KEY,
        "dining_commons_code" TEXT NOT NULL,
        "name" TEXT NOT NULL,
        "station" TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "ucsborganizations" (
        "org_code" TEXT PRIMARY KEY,
        "org_translation_short" TEXT NOT NULL,
        "org_translation" TEXT NOT NULL,
        "inactive" BOOLEAN NOT NULL DEFAULT FALSE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "recommendationrequest" (
        "id" BIGSERIAL PRIMARY KEY,
        "requester_email" TEXT NOT NULL,
        "professor_email" TEXT NOT NULL,
        "explanation" TEXT NOT NULL,
        "date_requested" TIMESTAMP NOT NULL,
        "date_needed" TIMESTAMP NOT NULL,
        "done" BOOLEAN NOT NULL DEFAULT FALSE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "articles" (
        "id" BIGSERIAL PRIMARY KEY,
        "title" TEXT NOT NULL,
        "url" TEXT NOT NULL,
        "explanation" TEXT NOT NULL,
        "email" TEXT NOT NULL,
        "date_added" TIMESTAMP NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "helprequest" (
        "id" BIGSERIAL PRIMARY KEY,
        "requester_email" TEXT NOT NULL,
        "team_id" TEXT NOT NULL,
        "table_or_breakout_room" TEXT NOT NULL,
        "request_time" TIMESTAMP NOT NULL,
        "explanation" TEXT NOT NULL,
        "solved" BOOLEAN NOT NULL DEFAULT FALSE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "ucsbdates" (
        "id" BIGSERIAL PRIMARY KEY,
        "quarter_yyyyq" TEXT NOT NULL,
        "name" TEXT NOT NULL,
        "local_date_time" TIMESTAMP NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "ucsbdiningcommons" (
        "code" TEXT PRIMARY KEY,
        "name" TEXT NOT NULL,
        "has_sack_meal" BOOLEAN NOT NULL DEFAULT FALSE,
        "has_take_out_meal" BOOLEAN NOT NULL DEFAULT FALSE,
        "has_dining_cam" BOOLEAN NOT NULL DEFAULT FALSE,
        "latitude" DOUBLE PRECISION NOT NULL,
        "longitude" DOUBLE PRECISION NOT NULL
    )
    "#,
];

pub async fn ensure_tables(pool: &PgPool) -> Result<(), BootstrapError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!(tables = TABLE_DDL.len(), "entity tables ready");
    Ok(())
}

/// Connect to the server's `postgres` database and create the target database if it does not exist.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), BootstrapError> {
    let Some((admin, db_name)) = maintenance_target(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options pointing at the `postgres` maintenance database, plus the database `url` names.
/// None when the URL names no database or names `postgres` itself.
fn maintenance_target(url: &str) -> Result<Option<(PgConnectOptions, String)>, ConfigError> {
    let opts = PgConnectOptions::from_str(url).map_err(|e| ConfigError::InvalidDatabaseUrl(e.to_string()))?;
    let target = opts.get_database().map(str::trim).unwrap_or("").to_string();
    if target.is_empty() || target == "postgres" {
        return Ok(None);
    }
    Ok(Some((opts.database("postgres"), target)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
