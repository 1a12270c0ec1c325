pub mod cars;

use axum::{
    extract::{FromRequest, FromRequestParts, Path},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::error::AppError;

/// JSON body extractor whose rejections render as [`AppError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path extractor whose rejections render as [`AppError`].
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

pub async fn root() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "message": "Car inventory service running" })),
    )
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "car-inventory-service" })),
    )
}
