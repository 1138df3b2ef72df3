use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 总览统计
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_poultry: i64,
    pub total_eggs: i64,
    pub total_crop_area: f64,
    pub total_inputs_cost: f64,
    pub low_stock_alerts: i64,
}

/// 家禽生产表现 (按 date + type 分组)
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoultryPerformance {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub bird_type: String,
    pub total_eggs: i64,
    pub total_feed: f64,
    pub total_mortality: i64,
    /// 每行 eggs / count 的平均值; count = 0 的行不参与, 全组无有效行时为 null
    pub egg_per_bird: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// 农资分类成本
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCost {
    pub category: String,
    pub total_cost: f64,
    pub count: i64,
}

/// 作物成本
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropCost {
    pub crop: String,
    pub total_cost: f64,
    pub total_area: f64,
}
