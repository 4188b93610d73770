use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch},
};
use uuid::Uuid;

use crate::{
    dto::bookings::{
        BookingList, BookingWithFacility, UpdateApprovalStatusRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::Booking,
    response::ApiResponse,
    routes::params::BookingListQuery,
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_all_bookings))
        .route("/bookings/{id}", get(get_booking_admin))
        .route("/bookings/{id}/status", patch(update_approval_status))
        .route("/bookings/{id}/restore", patch(restore_booking))
}

#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("status" = Option<String>, Query, description = "Filter by approval status; omitted hides trashed"),
        ("brand" = Option<String>, Query, description = "Filter by brand"),
        ("q" = Option<String>, Query, description = "Search name/email/brand/item/phone"),
        ("sort_by" = Option<String>, Query, description = "created_at, pickup_date, recycle_item_price"),
        ("sort_order" = Option<String>, Query, description = "asc, desc")
    ),
    responses(
        (status = 200, description = "List bookings (admin only)", body = ApiResponse<BookingList>),
        (status = 400, description = "Invalid status filter"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_all_bookings(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<BookingListQuery>,
) -> AppResult<Json<ApiResponse<BookingList>>> {
    let resp = admin_service::list_all_bookings(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/bookings/{id}",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Get any booking with its facility (admin only)", body = ApiResponse<BookingWithFacility>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_booking_admin(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<BookingWithFacility>>> {
    let resp = admin_service::get_booking_admin(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/bookings/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    request_body = UpdateApprovalStatusRequest,
    responses(
        (status = 200, description = "Set approval status to approved, rejected, or trashed", body = ApiResponse<Booking>),
        (status = 400, description = "Invalid status or transition"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_approval_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateApprovalStatusRequest>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let resp = admin_service::update_approval_status(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/bookings/{id}/restore",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Restore a trashed booking to pending", body = ApiResponse<Booking>),
        (status = 400, description = "Booking is not in trash"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn restore_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let resp = admin_service::restore_booking(&state, &user, id).await?;
    Ok(Json(resp))
}
