pub mod crop;
pub mod input;
pub mod poultry;
pub mod report;

pub use crop::{CropFilter, CropPayload, CropRecord, NewCrop};
pub use input::{InputFilter, InputPayload, InputRecord, NewInput, StockUpdate};
pub use poultry::{NewPoultry, PoultryFilter, PoultryPayload, PoultryRecord};
pub use report::{CategoryCost, CropCost, PerformanceFilter, PoultryPerformance, Summary};

use crate::error::{FarmError, FarmResult};
use chrono::NaiveDate;

/// 写入响应: 新记录 ID + 提示信息
#[derive(Debug, Clone, serde::Serialize)]
pub struct Created {
    pub id: i64,
    pub message: String,
}

/// 必填字段收集器, 一次性报告所有缺失字段
#[derive(Debug, Default)]
pub(crate) struct MissingFields(Vec<&'static str>);

impl MissingFields {
    pub(crate) fn require<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.0.push(field);
        }
        value
    }

    pub(crate) fn into_result(self) -> FarmResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(FarmError::validation(format!(
                "missing required field(s): {}",
                self.0.join(", ")
            )))
        }
    }
}

/// 必填文本: 空白视为缺失
pub(crate) fn required_text(
    missing: &mut MissingFields,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    missing.require(field, optional_text(value))
}

/// 可选文本: 全空白视为未填写, 其余原样保留
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn parse_date(field: &str, value: &str) -> FarmResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        FarmError::validation(format!("{field} must be a YYYY-MM-DD date, got {value:?}"))
    })
}

/// 可选日期条件: 空白视为无条件
pub(crate) fn parse_optional_date(field: &str, value: Option<&str>) -> FarmResult<Option<NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => parse_date(field, v).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_absent() {
        assert_eq!(optional_text(Some("   ".into())), None);
        assert_eq!(optional_text(Some(" hen house\n".into())).as_deref(), Some(" hen house\n"));
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn optional_date_ignores_blank() {
        assert_eq!(parse_optional_date("startDate", Some("")).unwrap(), None);
        assert_eq!(
            parse_optional_date("startDate", Some("2024-02-29")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert!(parse_optional_date("startDate", Some("29/02/2024")).is_err());
    }
}
