use crate::db::filter::select_query;
use crate::error::FarmResult;
use crate::models::{
    CropFilter, CropRecord, InputFilter, InputRecord, NewCrop, NewInput, NewPoultry,
    PoultryFilter, PoultryRecord,
};
use sqlx::SqlitePool;

// ============ 家禽 ============

/// 按条件查询家禽记录
pub async fn list_poultry(
    pool: &SqlitePool,
    filter: &PoultryFilter,
) -> FarmResult<Vec<PoultryRecord>> {
    let mut builder = select_query(filter)?;
    let rows = builder
        .build_query_as::<PoultryRecord>()
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// 新增家禽记录, 返回新 ID
pub async fn insert_poultry(pool: &SqlitePool, record: &NewPoultry) -> FarmResult<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO poultry (date, type, count, eggs, feed, mortality, batchName, notes)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(record.date)
    .bind(&record.bird_type)
    .bind(record.count)
    .bind(record.eggs)
    .bind(record.feed)
    .bind(record.mortality)
    .bind(&record.batch_name)
    .bind(&record.notes)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// 删除家禽记录, 返回影响行数
pub async fn delete_poultry(pool: &SqlitePool, id: i64) -> FarmResult<u64> {
    delete_by_id(pool, "DELETE FROM poultry WHERE id = ?", id).await
}

// ============ 作物 ============

pub async fn list_crops(pool: &SqlitePool, filter: &CropFilter) -> FarmResult<Vec<CropRecord>> {
    let mut builder = select_query(filter)?;
    let rows = builder
        .build_query_as::<CropRecord>()
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn insert_crop(pool: &SqlitePool, record: &NewCrop) -> FarmResult<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO crops (date, crop, area, stage, yield, activities, cost)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(record.date)
    .bind(&record.crop)
    .bind(record.area)
    .bind(&record.stage)
    .bind(record.crop_yield)
    .bind(&record.activities)
    .bind(record.cost)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn delete_crop(pool: &SqlitePool, id: i64) -> FarmResult<u64> {
    delete_by_id(pool, "DELETE FROM crops WHERE id = ?", id).await
}

// ============ 农资 ============

pub async fn list_inputs(pool: &SqlitePool, filter: &InputFilter) -> FarmResult<Vec<InputRecord>> {
    let mut builder = select_query(filter)?;
    let rows = builder
        .build_query_as::<InputRecord>()
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn insert_input(pool: &SqlitePool, record: &NewInput) -> FarmResult<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO inputs (
            date, category, name, quantity, unit, supplier, cost,
            usedFor, currentStock, minStock, usageRate, notes
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(record.date)
    .bind(&record.category)
    .bind(&record.name)
    .bind(record.quantity)
    .bind(&record.unit)
    .bind(&record.supplier)
    .bind(record.cost)
    .bind(&record.used_for)
    .bind(record.current_stock)
    .bind(record.min_stock)
    .bind(record.usage_rate)
    .bind(&record.notes)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// 覆盖当前库存, 不校验 minStock; 返回影响行数
pub async fn update_input_stock(pool: &SqlitePool, id: i64, current_stock: f64) -> FarmResult<u64> {
    let result = sqlx::query("UPDATE inputs SET currentStock = ? WHERE id = ?")
        .bind(current_stock)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_input(pool: &SqlitePool, id: i64) -> FarmResult<u64> {
    delete_by_id(pool, "DELETE FROM inputs WHERE id = ?", id).await
}

async fn delete_by_id(pool: &SqlitePool, sql: &'static str, id: i64) -> FarmResult<u64> {
    let result = sqlx::query(sql).bind(id).execute(pool).await?;
    Ok(result.rows_affected())
}
