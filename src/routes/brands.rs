use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::brands::{AddBrandRequest, BrandList, ModelList},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{BrandCatalog, DeviceCategory},
    response::ApiResponse,
    services::brand_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{category}", get(list_brands))
        .route("/{category}", post(add_brand))
        .route("/{category}/{brand}", get(get_brand_models))
}

// Unknown category segments are a missing resource family, not bad input.
fn parse_category(raw: &str) -> Result<DeviceCategory, AppError> {
    DeviceCategory::parse(raw).ok_or(AppError::NotFound)
}

#[utoipa::path(
    get,
    path = "/api/brands/{category}",
    params(
        ("category" = String, Path, description = "Device category: smartphone, laptop, accessories, television, refrigerator")
    ),
    responses(
        (status = 200, description = "List brands for a category", body = ApiResponse<BrandList>),
        (status = 404, description = "Unknown category"),
    ),
    tag = "Brands"
)]
pub async fn list_brands(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<ApiResponse<BrandList>>> {
    let category = parse_category(&category)?;
    let resp = brand_service::list_brands(&state, category).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/brands/{category}/{brand}",
    params(
        ("category" = String, Path, description = "Device category"),
        ("brand" = String, Path, description = "Brand name")
    ),
    responses(
        (status = 200, description = "Model names for a brand", body = ApiResponse<ModelList>),
        (status = 404, description = "Brand not found"),
    ),
    tag = "Brands"
)]
pub async fn get_brand_models(
    State(state): State<AppState>,
    Path((category, brand)): Path<(String, String)>,
) -> AppResult<Json<ApiResponse<ModelList>>> {
    let category = parse_category(&category)?;
    let resp = brand_service::get_brand_models(&state, category, &brand).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/brands/{category}",
    params(
        ("category" = String, Path, description = "Device category")
    ),
    request_body = AddBrandRequest,
    responses(
        (status = 201, description = "Add a brand with its models", body = ApiResponse<BrandCatalog>),
        (status = 400, description = "Brand already exists"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Brands"
)]
pub async fn add_brand(
    State(state): State<AppState>,
    user: AuthUser,
    Path(category): Path<String>,
    Json(payload): Json<AddBrandRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<BrandCatalog>>)> {
    let category = parse_category(&category)?;
    let resp = brand_service::add_brand(&state, &user, category, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
