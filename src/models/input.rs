use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{optional_text, parse_date, required_text, MissingFields};
use crate::error::{FarmError, FarmResult};

/// 农资记录 (inputs 表: 饲料/肥料/药品等)
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub category: String,
    pub name: String,
    pub quantity: f64,
    pub unit: Option<String>,
    pub supplier: Option<String>,
    pub cost: f64,
    #[sqlx(rename = "usedFor")]
    pub used_for: Option<String>,
    #[sqlx(rename = "currentStock")]
    pub current_stock: f64,
    #[sqlx(rename = "minStock")]
    pub min_stock: f64,
    #[sqlx(rename = "usageRate")]
    pub usage_rate: f64,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl InputRecord {
    /// 库存不足: minStock > 0 且 currentStock < minStock
    pub fn is_low_stock(&self) -> bool {
        self.min_stock > 0.0 && self.current_stock < self.min_stock
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputPayload {
    pub date: Option<String>,
    pub category: Option<String>,
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub supplier: Option<String>,
    pub cost: Option<f64>,
    pub used_for: Option<String>,
    pub current_stock: Option<f64>,
    pub min_stock: Option<f64>,
    pub usage_rate: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInput {
    pub date: NaiveDate,
    pub category: String,
    pub name: String,
    pub quantity: f64,
    pub unit: Option<String>,
    pub supplier: Option<String>,
    pub cost: f64,
    pub used_for: Option<String>,
    pub current_stock: f64,
    pub min_stock: f64,
    pub usage_rate: f64,
    pub notes: Option<String>,
}

impl InputPayload {
    pub fn validate(self) -> FarmResult<NewInput> {
        let mut missing = MissingFields::default();
        let date = required_text(&mut missing, "date", self.date);
        let category = required_text(&mut missing, "category", self.category);
        let name = required_text(&mut missing, "name", self.name);
        let quantity = missing.require("quantity", self.quantity);
        missing.into_result()?;

        Ok(NewInput {
            date: parse_date("date", &date.unwrap_or_default())?,
            category: category.unwrap_or_default(),
            name: name.unwrap_or_default(),
            quantity: quantity.unwrap_or_default(),
            unit: optional_text(self.unit),
            supplier: optional_text(self.supplier),
            cost: self.cost.unwrap_or(0.0),
            used_for: optional_text(self.used_for),
            current_stock: self.current_stock.unwrap_or(0.0),
            min_stock: self.min_stock.unwrap_or(0.0),
            usage_rate: self.usage_rate.unwrap_or(0.0),
            notes: optional_text(self.notes),
        })
    }
}

/// 库存更新请求体
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    pub current_stock: Option<f64>,
}

impl StockUpdate {
    pub fn value(&self) -> FarmResult<f64> {
        self.current_stock
            .ok_or_else(|| FarmError::validation("missing required field(s): currentStock"))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category: Option<String>,
    pub low_stock: Option<String>,
}

impl InputFilter {
    /// lowStock 接受 true / 1 / yes (不区分大小写)
    pub fn low_stock_only(&self) -> bool {
        matches!(
            self.low_stock.as_deref().map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("true" | "1" | "yes")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(current_stock: f64, min_stock: f64) -> InputRecord {
        InputRecord {
            id: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            category: "feed".into(),
            name: "corn".into(),
            quantity: 50.0,
            unit: None,
            supplier: None,
            cost: 0.0,
            used_for: None,
            current_stock,
            min_stock,
            usage_rate: 0.0,
            notes: None,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn low_stock_needs_a_positive_minimum() {
        assert!(record(5.0, 10.0).is_low_stock());
        assert!(!record(10.0, 10.0).is_low_stock());
        assert!(!record(0.0, 0.0).is_low_stock());
        assert!(!record(-1.0, 0.0).is_low_stock());
    }

    #[test]
    fn low_stock_flag_parsing() {
        let flag = |v: &str| InputFilter {
            low_stock: Some(v.to_string()),
            ..Default::default()
        };
        assert!(flag("true").low_stock_only());
        assert!(flag("TRUE").low_stock_only());
        assert!(flag("1").low_stock_only());
        assert!(!flag("false").low_stock_only());
        assert!(!flag("").low_stock_only());
        assert!(!InputFilter::default().low_stock_only());
    }

    #[test]
    fn stock_update_requires_value() {
        assert!(StockUpdate::default().value().is_err());
        let update: StockUpdate = serde_json::from_str(r#"{"currentStock":12.5}"#).unwrap();
        assert_eq!(update.value().unwrap(), 12.5);
    }
}
