pub mod extract;
pub mod handlers;

pub use handlers::*;

use crate::service::FarmService;
use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir};

/// API 路由 (/api/*)
pub fn router(service: Arc<FarmService>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        // 家禽
        .route("/api/poultry", get(list_poultry).post(add_poultry))
        .route("/api/poultry/:id", delete(remove_poultry))
        // 作物
        .route("/api/crops", get(list_crops).post(add_crop))
        .route("/api/crops/:id", delete(remove_crop))
        // 农资
        .route("/api/inputs", get(list_inputs).post(add_input))
        .route("/api/inputs/:id", delete(remove_input).put(update_input_stock))
        // 报表
        .route("/api/reports/summary", get(summary))
        .route("/api/reports/poultry-performance", get(poultry_performance))
        .route("/api/reports/inputs-by-category", get(inputs_by_category))
        .route("/api/reports/crop-costs", get(crop_costs))
        .with_state(service)
}

/// 完整应用: API + 静态文件 + CORS
pub fn app(service: Arc<FarmService>, static_dir: &str) -> Router {
    router(service)
        .fallback_service(ServeDir::new(static_dir))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
}
