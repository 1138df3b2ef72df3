use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{optional_text, parse_date, required_text, MissingFields};
use crate::error::FarmResult;

/// 作物记录 (crops 表)
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub crop: String,
    pub area: f64,
    pub stage: Option<String>,
    #[serde(rename = "yield")]
    #[sqlx(rename = "yield")]
    pub crop_yield: f64,
    pub activities: Option<String>,
    pub cost: f64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropPayload {
    pub date: Option<String>,
    pub crop: Option<String>,
    pub area: Option<f64>,
    pub stage: Option<String>,
    #[serde(rename = "yield")]
    pub crop_yield: Option<f64>,
    pub activities: Option<String>,
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCrop {
    pub date: NaiveDate,
    pub crop: String,
    pub area: f64,
    pub stage: Option<String>,
    pub crop_yield: f64,
    pub activities: Option<String>,
    pub cost: f64,
}

impl CropPayload {
    pub fn validate(self) -> FarmResult<NewCrop> {
        let mut missing = MissingFields::default();
        let date = required_text(&mut missing, "date", self.date);
        let crop = required_text(&mut missing, "crop", self.crop);
        let area = missing.require("area", self.area);
        missing.into_result()?;

        Ok(NewCrop {
            date: parse_date("date", &date.unwrap_or_default())?,
            crop: crop.unwrap_or_default(),
            area: area.unwrap_or_default(),
            stage: optional_text(self.stage),
            crop_yield: self.crop_yield.unwrap_or(0.0),
            activities: optional_text(self.activities),
            cost: self.cost.unwrap_or(0.0),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub crop: Option<String>,
    pub stage: Option<String>,
}
