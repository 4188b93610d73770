use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::bookings::{
        BookingList, BookingWithFacility, CreateBookingRequest, UpdateBookingRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::Booking,
    response::ApiResponse,
    routes::params::Pagination,
    services::booking_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_bookings))
        .route("/{id}", get(get_booking))
        .route("/{id}", put(update_booking))
        .route("/{id}", delete(delete_booking))
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Create booking; status starts as pending", body = ApiResponse<Booking>),
        (status = 400, description = "Invalid facility ID or missing fields"),
    ),
    security(("bearer_auth" = [])),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Booking>>)> {
    let resp = booking_service::create_booking(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Caller's bookings, trashed excluded", body = ApiResponse<BookingList>),
    ),
    security(("bearer_auth" = [])),
    tag = "Bookings"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<BookingList>>> {
    let resp = booking_service::list_bookings(&state, &user, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Get own booking with its facility", body = ApiResponse<BookingWithFacility>),
        (status = 404, description = "Booking not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Bookings"
)]
pub async fn get_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<BookingWithFacility>>> {
    let resp = booking_service::get_booking(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingRequest,
    responses(
        (status = 200, description = "Update own booking's submission fields", body = ApiResponse<Booking>),
        (status = 404, description = "Booking not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Bookings"
)]
pub async fn update_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookingRequest>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let resp = booking_service::update_booking(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Delete own booking"),
        (status = 404, description = "Booking not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Bookings"
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = booking_service::delete_booking(&state, &user, id).await?;
    Ok(Json(resp))
}
