use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, warn};

use super::{AppJson, AppPath};
use crate::{
    error::AppResult,
    models::{CarPayload, ItemEnvelope, ItemsEnvelope, MessageResponse},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_cars(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<ItemsEnvelope>)> {
    let start = Instant::now();
    let items = state.store.list().await?;

    info!(
        count = items.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed cars"
    );

    Ok((StatusCode::OK, Json(ItemsEnvelope { items })))
}

pub async fn get_car(
    State(state): State<AppState>,
    AppPath(serial_no): AppPath<i32>,
) -> AppResult<(StatusCode, Json<ItemEnvelope>)> {
    let item = state.store.get(serial_no).await?;
    Ok((StatusCode::OK, Json(ItemEnvelope { item })))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn add_car(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CarPayload>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let car = payload.into_car();
    state.store.insert(&car).await?;

    info!(serial_no = car.serial_no, name = %car.name, "Added car");

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new(format!(
            "Car '{}' added successfully",
            car.name
        ))),
    ))
}

// ── Update ────────────────────────────────────────────────────────────────────

/// The path serial number is authoritative; the body's own serial is ignored.
pub async fn update_car(
    State(state): State<AppState>,
    AppPath(serial_no): AppPath<i32>,
    AppJson(payload): AppJson<CarPayload>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    if payload.serial_no != serial_no {
        warn!(
            path_serial_no = serial_no,
            body_serial_no = payload.serial_no,
            "Ignoring serial number in update body"
        );
    }

    state
        .store
        .update(serial_no, &payload.name, payload.price)
        .await?;

    info!(serial_no, name = %payload.name, price = payload.price, "Updated car");

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new(format!(
            "Car with serial number {} updated successfully",
            serial_no
        ))),
    ))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_car_by_name(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let deleted = state.store.delete_by_name(&name).await?;

    if deleted > 1 {
        warn!(name = %name, deleted, "Name matched several cars; all were deleted");
    }
    info!(name = %name, deleted, "Deleted cars by name");

    Ok((
        StatusCode::OK,
        Json(
            MessageResponse::new(format!("Car '{}' deleted successfully", name))
                .with_deleted(deleted),
        ),
    ))
}

pub async fn delete_car_by_serial(
    State(state): State<AppState>,
    AppPath(serial_no): AppPath<i32>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.store.delete_by_serial(serial_no).await?;

    info!(serial_no, "Deleted car by serial number");

    Ok((
        StatusCode::OK,
        Json(
            MessageResponse::new(format!(
                "Car with serial number {} deleted successfully",
                serial_no
            ))
            .with_deleted(1),
        ),
    ))
}
