use crate::error::FarmResult;
use crate::models::{
    CategoryCost, Created, CropCost, CropFilter, CropPayload, CropRecord, InputFilter,
    InputPayload, InputRecord, PerformanceFilter, PoultryFilter, PoultryPayload,
    PoultryPerformance, PoultryRecord, StockUpdate, Summary,
};
use crate::service::FarmService;
use crate::api::extract::{JsonBody, Path, Query};
use axum::extract::{Json, State};
use serde::Serialize;
use std::sync::Arc;

type AppState = State<Arc<FarmService>>;

/// 通用提示响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// 健康检查
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Farm Dashboard API is running",
    })
}

// ============ 家禽 ============

pub async fn list_poultry(
    State(service): AppState,
    Query(filter): Query<PoultryFilter>,
) -> FarmResult<Json<Vec<PoultryRecord>>> {
    Ok(Json(service.list_poultry(&filter).await?))
}

pub async fn add_poultry(
    State(service): AppState,
    JsonBody(payload): JsonBody<PoultryPayload>,
) -> FarmResult<Json<Created>> {
    Ok(Json(service.add_poultry(payload).await?))
}

pub async fn remove_poultry(
    State(service): AppState,
    Path(id): Path<i64>,
) -> FarmResult<Json<MessageResponse>> {
    service.remove_poultry(id).await?;
    Ok(MessageResponse::new("Poultry record deleted successfully"))
}

// ============ 作物 ============

pub async fn list_crops(
    State(service): AppState,
    Query(filter): Query<CropFilter>,
) -> FarmResult<Json<Vec<CropRecord>>> {
    Ok(Json(service.list_crops(&filter).await?))
}

pub async fn add_crop(
    State(service): AppState,
    JsonBody(payload): JsonBody<CropPayload>,
) -> FarmResult<Json<Created>> {
    Ok(Json(service.add_crop(payload).await?))
}

pub async fn remove_crop(
    State(service): AppState,
    Path(id): Path<i64>,
) -> FarmResult<Json<MessageResponse>> {
    service.remove_crop(id).await?;
    Ok(MessageResponse::new("Crop record deleted successfully"))
}

// ============ 农资 ============

pub async fn list_inputs(
    State(service): AppState,
    Query(filter): Query<InputFilter>,
) -> FarmResult<Json<Vec<InputRecord>>> {
    Ok(Json(service.list_inputs(&filter).await?))
}

pub async fn add_input(
    State(service): AppState,
    JsonBody(payload): JsonBody<InputPayload>,
) -> FarmResult<Json<Created>> {
    Ok(Json(service.add_input(payload).await?))
}

pub async fn update_input_stock(
    State(service): AppState,
    Path(id): Path<i64>,
    JsonBody(update): JsonBody<StockUpdate>,
) -> FarmResult<Json<MessageResponse>> {
    service.update_input_stock(id, &update).await?;
    Ok(MessageResponse::new("Stock updated successfully"))
}

pub async fn remove_input(
    State(service): AppState,
    Path(id): Path<i64>,
) -> FarmResult<Json<MessageResponse>> {
    service.remove_input(id).await?;
    Ok(MessageResponse::new("Input record deleted successfully"))
}

// ============ 报表 ============

pub async fn summary(State(service): AppState) -> FarmResult<Json<Summary>> {
    Ok(Json(service.summary().await?))
}

pub async fn poultry_performance(
    State(service): AppState,
    Query(filter): Query<PerformanceFilter>,
) -> FarmResult<Json<Vec<PoultryPerformance>>> {
    Ok(Json(service.poultry_performance(&filter).await?))
}

pub async fn inputs_by_category(State(service): AppState) -> FarmResult<Json<Vec<CategoryCost>>> {
    Ok(Json(service.inputs_by_category().await?))
}

pub async fn crop_costs(State(service): AppState) -> FarmResult<Json<Vec<CropCost>>> {
    Ok(Json(service.crop_costs().await?))
}
