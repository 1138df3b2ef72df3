use crate::config::DatabaseConfig;
use crate::db::schema;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, SqlitePool};
use std::str::FromStr;
use std::time::Duration;

/// 创建数据库连接池 (文件库), 并确保表结构存在
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    // WAL + synchronous=FULL: 每条写语句返回前已落盘
    let connect_options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Full)
        .log_slow_statements(
            tracing::log::LevelFilter::Warn,
            Duration::from_secs(config.slow_statement_secs),
        );

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(connect_options)
        .await?;

    schema::init_schema(&pool).await?;
    Ok(pool)
}

/// 内存库, 仅单连接 (每个连接各自持有一份内存数据)
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let connect_options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connect_options)
        .await?;

    schema::init_schema(&pool).await?;
    Ok(pool)
}
