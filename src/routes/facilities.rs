use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::facilities::{CreateFacilityRequest, FacilityList, UpdateFacilityRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Facility,
    response::ApiResponse,
    routes::params::FacilityQuery,
    services::facility_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_facilities))
        .route("/", post(create_facility))
        .route("/{id}", get(get_facility))
        .route("/{id}", put(update_facility))
        .route("/{id}", delete(delete_facility))
}

#[utoipa::path(
    get,
    path = "/api/facilities",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("q" = Option<String>, Query, description = "Substring filter on name/address"),
        ("verified" = Option<bool>, Query, description = "Filter by verified flag"),
        ("near_lat" = Option<f64>, Query, description = "Latitude of the caller; with near_lon, sorts by distance"),
        ("near_lon" = Option<f64>, Query, description = "Longitude of the caller; with near_lat, sorts by distance")
    ),
    responses(
        (status = 200, description = "List facilities", body = ApiResponse<FacilityList>)
    ),
    tag = "Facilities"
)]
pub async fn list_facilities(
    State(state): State<AppState>,
    Query(query): Query<FacilityQuery>,
) -> AppResult<Json<ApiResponse<FacilityList>>> {
    let resp = facility_service::list_facilities(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/facilities/{id}",
    params(
        ("id" = Uuid, Path, description = "Facility ID")
    ),
    responses(
        (status = 200, description = "Get facility", body = ApiResponse<Facility>),
        (status = 404, description = "Facility not found"),
    ),
    tag = "Facilities"
)]
pub async fn get_facility(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Facility>>> {
    let resp = facility_service::get_facility(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/facilities",
    request_body = CreateFacilityRequest,
    responses(
        (status = 201, description = "Create facility", body = ApiResponse<Facility>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Facilities"
)]
pub async fn create_facility(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateFacilityRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Facility>>)> {
    let resp = facility_service::create_facility(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/facilities/{id}",
    params(
        ("id" = Uuid, Path, description = "Facility ID")
    ),
    request_body = UpdateFacilityRequest,
    responses(
        (status = 200, description = "Updated facility", body = ApiResponse<Facility>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Facility not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Facilities"
)]
pub async fn update_facility(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFacilityRequest>,
) -> AppResult<Json<ApiResponse<Facility>>> {
    let resp = facility_service::update_facility(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/facilities/{id}",
    params(
        ("id" = Uuid, Path, description = "Facility ID")
    ),
    responses(
        (status = 200, description = "Deleted facility"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Facility not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Facilities"
)]
pub async fn delete_facility(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = facility_service::delete_facility(&state, &user, id).await?;
    Ok(Json(resp))
}
