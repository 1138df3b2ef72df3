use sqlx::SqlitePool;

/// 建表语句; 列名沿用已有 farm.db 的命名
const CREATE_TABLES: [&str; 3] = [
    r#"
CREATE TABLE IF NOT EXISTS poultry (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    type TEXT NOT NULL,
    count INTEGER NOT NULL,
    eggs INTEGER DEFAULT 0,
    feed REAL DEFAULT 0,
    mortality INTEGER DEFAULT 0,
    batchName TEXT,
    notes TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS crops (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    crop TEXT NOT NULL,
    area REAL NOT NULL,
    stage TEXT,
    yield REAL DEFAULT 0,
    activities TEXT,
    cost REAL DEFAULT 0,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS inputs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    category TEXT NOT NULL,
    name TEXT NOT NULL,
    quantity REAL NOT NULL,
    unit TEXT,
    supplier TEXT,
    cost REAL DEFAULT 0,
    usedFor TEXT,
    currentStock REAL DEFAULT 0,
    minStock REAL DEFAULT 0,
    usageRate REAL DEFAULT 0,
    notes TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#,
];

/// 初始化表结构 (幂等, 不会删除已有数据)
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("Schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let pool = create_memory_pool().await.unwrap();
        sqlx::query("INSERT INTO crops (date, crop, area) VALUES ('2024-01-01', 'maize', 1.0)")
            .execute(&pool)
            .await
            .unwrap();

        super::init_schema(&pool).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM crops")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
