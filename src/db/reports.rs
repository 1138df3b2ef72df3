use crate::db::filter::{push_predicates, RecordFilter, LOW_STOCK_CONDITION};
use crate::error::FarmResult;
use crate::models::{CategoryCost, CropCost, PerformanceFilter, PoultryPerformance, Summary};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// 总览统计; 空表时各项为 0
pub async fn summary(pool: &SqlitePool) -> FarmResult<Summary> {
    let sql = format!(
        r#"
        SELECT
            (SELECT COALESCE(SUM(count), 0) FROM poultry) AS total_poultry,
            (SELECT COALESCE(SUM(eggs), 0) FROM poultry) AS total_eggs,
            (SELECT TOTAL(area) FROM crops) AS total_crop_area,
            (SELECT TOTAL(cost) FROM inputs) AS total_inputs_cost,
            (SELECT COUNT(*) FROM inputs WHERE {LOW_STOCK_CONDITION}) AS low_stock_alerts
        "#
    );
    let summary = sqlx::query_as::<_, Summary>(&sql).fetch_one(pool).await?;
    Ok(summary)
}

/// 家禽生产表现, 按 (date, type) 分组
///
/// eggPerBird 为组内逐行 eggs / count 的平均值, 仅 count = 0 的行不参与平均
/// (AVG 忽略 NULL)。组内没有有效行时结果为 NULL。
pub async fn poultry_performance(
    pool: &SqlitePool,
    filter: &PerformanceFilter,
) -> FarmResult<Vec<PoultryPerformance>> {
    let predicates = filter.predicates()?;
    let mut builder: QueryBuilder<'static, Sqlite> = QueryBuilder::new(
        r#"
        SELECT
            date,
            type,
            COALESCE(SUM(eggs), 0) AS total_eggs,
            TOTAL(feed) AS total_feed,
            COALESCE(SUM(mortality), 0) AS total_mortality,
            AVG(CASE WHEN count <> 0 THEN CAST(eggs AS REAL) / count END) AS egg_per_bird
        FROM poultry
        WHERE 1=1"#,
    );
    push_predicates(&mut builder, &predicates);
    builder.push(" GROUP BY date, type ORDER BY date DESC, type");

    let rows = builder
        .build_query_as::<PoultryPerformance>()
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// 农资按分类汇总成本, 成本降序
pub async fn inputs_by_category(pool: &SqlitePool) -> FarmResult<Vec<CategoryCost>> {
    let rows = sqlx::query_as::<_, CategoryCost>(
        r#"
        SELECT category, TOTAL(cost) AS total_cost, COUNT(*) AS count
        FROM inputs
        GROUP BY category
        ORDER BY total_cost DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// 作物成本与面积汇总, 成本降序
pub async fn crop_costs(pool: &SqlitePool) -> FarmResult<Vec<CropCost>> {
    let rows = sqlx::query_as::<_, CropCost>(
        r#"
        SELECT crop, TOTAL(cost) AS total_cost, TOTAL(area) AS total_area
        FROM crops
        GROUP BY crop
        ORDER BY total_cost DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
