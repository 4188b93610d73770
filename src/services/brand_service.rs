use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::brands::{AddBrandRequest, BrandList, ModelList},
    entity::brands::{ActiveModel, Column, Entity as Brands, Model as BrandModel},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{BrandCatalog, DeviceCategory},
    response::{ApiResponse, Meta},
    state::AppState,
};
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

pub async fn list_brands(
    state: &AppState,
    category: DeviceCategory,
) -> AppResult<ApiResponse<BrandList>> {
    let items = Brands::find()
        .filter(Column::Category.eq(category.as_str()))
        .order_by_asc(Column::Brand)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|model| brand_from_entity(category, model))
        .collect();

    Ok(ApiResponse::success(
        "Brands",
        BrandList { items },
        Some(Meta::empty()),
    ))
}

pub async fn get_brand_models(
    state: &AppState,
    category: DeviceCategory,
    brand: &str,
) -> AppResult<ApiResponse<ModelList>> {
    let row = Brands::find()
        .filter(
            Condition::all()
                .add(Column::Category.eq(category.as_str()))
                .add(Column::Brand.eq(brand)),
        )
        .one(&state.orm)
        .await?;
    let row = match row {
        Some(b) => b,
        None => return Err(AppError::NotFound),
    };

    let models = models_from_value(row.models);
    Ok(ApiResponse::success("Models", ModelList { models }, None))
}

pub async fn add_brand(
    state: &AppState,
    user: &AuthUser,
    category: DeviceCategory,
    payload: AddBrandRequest,
) -> AppResult<ApiResponse<BrandCatalog>> {
    ensure_admin(user)?;
    if payload.brand.trim().is_empty() {
        return Err(AppError::BadRequest("Brand is required".into()));
    }

    let existing = Brands::find()
        .filter(
            Condition::all()
                .add(Column::Category.eq(category.as_str()))
                .add(Column::Brand.eq(payload.brand.as_str())),
        )
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::BadRequest("Brand already exists".into()));
    }

    let id = Uuid::new_v4();
    let active = ActiveModel {
        id: Set(id),
        category: Set(category.as_str().to_string()),
        brand: Set(payload.brand),
        models: Set(serde_json::json!(payload.models)),
        created_at: NotSet,
    };
    let row = active.insert(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "brand_create",
        Some("brands"),
        Some(serde_json::json!({ "brand_id": row.id, "category": category.as_str() })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Brand created",
        brand_from_entity(category, row),
        Some(Meta::empty()),
    ))
}

fn models_from_value(value: serde_json::Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

fn brand_from_entity(category: DeviceCategory, model: BrandModel) -> BrandCatalog {
    BrandCatalog {
        id: model.id,
        category,
        brand: model.brand,
        models: models_from_value(model.models),
        created_at: model.created_at.with_timezone(&Utc),
    }
}
