use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{optional_text, parse_date, required_text, MissingFields};
use crate::error::FarmResult;

/// 家禽记录 (poultry 表)
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoultryRecord {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub bird_type: String,
    pub count: i64,
    pub eggs: i64,
    pub feed: f64,
    pub mortality: i64,
    #[sqlx(rename = "batchName")]
    pub batch_name: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// 新增请求体, 字段全部可选, 由 validate 负责必填校验
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoultryPayload {
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub bird_type: Option<String>,
    pub count: Option<i64>,
    pub eggs: Option<i64>,
    pub feed: Option<f64>,
    pub mortality: Option<i64>,
    pub batch_name: Option<String>,
    pub notes: Option<String>,
}

/// 校验后的待写入记录
#[derive(Debug, Clone, PartialEq)]
pub struct NewPoultry {
    pub date: NaiveDate,
    pub bird_type: String,
    pub count: i64,
    pub eggs: i64,
    pub feed: f64,
    pub mortality: i64,
    pub batch_name: Option<String>,
    pub notes: Option<String>,
}

impl PoultryPayload {
    pub fn validate(self) -> FarmResult<NewPoultry> {
        let mut missing = MissingFields::default();
        let date = required_text(&mut missing, "date", self.date);
        let bird_type = required_text(&mut missing, "type", self.bird_type);
        let count = missing.require("count", self.count);
        missing.into_result()?;

        Ok(NewPoultry {
            date: parse_date("date", &date.unwrap_or_default())?,
            bird_type: bird_type.unwrap_or_default(),
            count: count.unwrap_or_default(),
            eggs: self.eggs.unwrap_or(0),
            feed: self.feed.unwrap_or(0.0),
            mortality: self.mortality.unwrap_or(0),
            batch_name: optional_text(self.batch_name),
            notes: optional_text(self.notes),
        })
    }
}

/// 列表查询条件
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoultryFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(rename = "type")]
    pub bird_type: Option<String>,
    pub batch_name: Option<String>,
}
