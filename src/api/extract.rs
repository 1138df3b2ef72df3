//! 提取器包装: 解析失败时返回 FarmError 的 JSON 错误体

use crate::error::FarmError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON 请求体
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(FarmError))]
pub struct JsonBody<T>(pub T);

/// 路径参数
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(FarmError))]
pub struct Path<T>(pub T);

/// 查询参数
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(FarmError))]
pub struct Query<T>(pub T);
