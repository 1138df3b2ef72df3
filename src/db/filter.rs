//! 列表查询构建
//!
//! 每类记录的查询条件先被翻译成 [`Predicate`] 列表, 再拼接为
//! `SELECT * FROM <table> WHERE 1=1 AND ... ORDER BY date DESC`。
//! 列名只来自本模块的常量白名单, 用户输入一律走绑定参数。

use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite};

use crate::error::FarmResult;
use crate::models::report::PerformanceFilter;
use crate::models::{optional_text, parse_optional_date, CropFilter, InputFilter, PoultryFilter};

/// 库存不足条件, 列表过滤与总览统计共用
pub const LOW_STOCK_CONDITION: &str = "minStock > 0 AND currentStock < minStock";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Poultry,
    Crops,
    Inputs,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Poultry => "poultry",
            Table::Crops => "crops",
            Table::Inputs => "inputs",
        }
    }
}

/// 单个查询条件, 之间以 AND 连接
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// date >= ?
    DateFrom(NaiveDate),
    /// date <= ?
    DateTo(NaiveDate),
    /// <column> = ?
    Equals(&'static str, String),
    LowStock,
}

/// 可翻译为查询条件的过滤对象
pub trait RecordFilter {
    const TABLE: Table;

    fn predicates(&self) -> FarmResult<Vec<Predicate>>;
}

fn date_range(start: Option<&str>, end: Option<&str>) -> FarmResult<Vec<Predicate>> {
    let mut predicates = Vec::new();
    if let Some(from) = parse_optional_date("startDate", start)? {
        predicates.push(Predicate::DateFrom(from));
    }
    if let Some(to) = parse_optional_date("endDate", end)? {
        predicates.push(Predicate::DateTo(to));
    }
    Ok(predicates)
}

fn push_equals(predicates: &mut Vec<Predicate>, column: &'static str, value: &Option<String>) {
    if let Some(value) = optional_text(value.clone()) {
        predicates.push(Predicate::Equals(column, value));
    }
}

impl RecordFilter for PoultryFilter {
    const TABLE: Table = Table::Poultry;

    fn predicates(&self) -> FarmResult<Vec<Predicate>> {
        let mut predicates = date_range(self.start_date.as_deref(), self.end_date.as_deref())?;
        push_equals(&mut predicates, "type", &self.bird_type);
        push_equals(&mut predicates, "batchName", &self.batch_name);
        Ok(predicates)
    }
}

impl RecordFilter for CropFilter {
    const TABLE: Table = Table::Crops;

    fn predicates(&self) -> FarmResult<Vec<Predicate>> {
        let mut predicates = date_range(self.start_date.as_deref(), self.end_date.as_deref())?;
        push_equals(&mut predicates, "crop", &self.crop);
        push_equals(&mut predicates, "stage", &self.stage);
        Ok(predicates)
    }
}

impl RecordFilter for InputFilter {
    const TABLE: Table = Table::Inputs;

    fn predicates(&self) -> FarmResult<Vec<Predicate>> {
        let mut predicates = date_range(self.start_date.as_deref(), self.end_date.as_deref())?;
        push_equals(&mut predicates, "category", &self.category);
        if self.low_stock_only() {
            predicates.push(Predicate::LowStock);
        }
        Ok(predicates)
    }
}

impl RecordFilter for PerformanceFilter {
    const TABLE: Table = Table::Poultry;

    fn predicates(&self) -> FarmResult<Vec<Predicate>> {
        date_range(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

/// 追加 AND 条件; 调用方的 SQL 需以 `WHERE 1=1` 结尾
pub fn push_predicates(builder: &mut QueryBuilder<'static, Sqlite>, predicates: &[Predicate]) {
    for predicate in predicates {
        match predicate {
            Predicate::DateFrom(from) => {
                builder.push(" AND date >= ").push_bind(*from);
            }
            Predicate::DateTo(to) => {
                builder.push(" AND date <= ").push_bind(*to);
            }
            Predicate::Equals(column, value) => {
                builder
                    .push(" AND ")
                    .push(*column)
                    .push(" = ")
                    .push_bind(value.clone());
            }
            Predicate::LowStock => {
                builder.push(" AND ").push(LOW_STOCK_CONDITION);
            }
        }
    }
}

/// 构建列表查询: 按日期倒序, 同日期保持存储顺序
pub fn select_query<F: RecordFilter>(filter: &F) -> FarmResult<QueryBuilder<'static, Sqlite>> {
    let predicates = filter.predicates()?;
    let mut builder = QueryBuilder::new(format!("SELECT * FROM {} WHERE 1=1", F::TABLE.name()));
    push_predicates(&mut builder, &predicates);
    builder.push(" ORDER BY date DESC");
    Ok(builder)
}
