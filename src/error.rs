use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 统一错误类型
#[derive(Error, Debug)]
pub enum FarmError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FarmResult<T> = Result<T, FarmError>;

impl FarmError {
    pub fn validation(msg: impl Into<String>) -> Self {
        FarmError::Validation(msg.into())
    }
}

// 请求解析失败 (JSON 格式 / 路径参数 / 查询参数) 统一按校验错误返回
impl From<JsonRejection> for FarmError {
    fn from(rejection: JsonRejection) -> Self {
        FarmError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for FarmError {
    fn from(rejection: PathRejection) -> Self {
        FarmError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for FarmError {
    fn from(rejection: QueryRejection) -> Self {
        FarmError::Validation(rejection.body_text())
    }
}

impl IntoResponse for FarmError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            FarmError::Validation(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            FarmError::Database(ref e) => {
                tracing::error!("Database Error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            other => {
                tracing::error!("Unhandled Error: {:?}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let resp = FarmError::validation("missing required field: date").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_maps_to_server_error() {
        let resp = FarmError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
