use uuid::Uuid;

use crate::{
    audit::log_audit,
    entity::facilities::{ActiveModel, Column, Entity as Facilities, Model as FacilityModel},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Facility,
    response::{ApiResponse, Meta},
    routes::params::FacilityQuery,
    state::AppState,
};
use crate::dto::facilities::{
    CreateFacilityRequest, FacilityEntry, FacilityList, UpdateFacilityRequest,
};
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

/// Great-circle distance in kilometers between two lat/lon points.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub async fn list_facilities(
    state: &AppState,
    query: FacilityQuery,
) -> AppResult<ApiResponse<FacilityList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all();

    if let Some(search) = query.q.as_ref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        condition = condition.add(
            Condition::any()
                .add(Expr::col(Column::Name).ilike(pattern.clone()))
                .add(Expr::col(Column::Address).ilike(pattern)),
        );
    }

    if let Some(verified) = query.verified {
        condition = condition.add(Column::Verified.eq(verified));
    }

    let finder = Facilities::find()
        .filter(condition)
        .order_by_asc(Column::Name);

    let total = finder.clone().count(&state.orm).await? as i64;

    let facilities: Vec<Facility> = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(facility_from_entity)
        .collect();

    // Locator mode: with a probe point the page is re-sorted by distance and
    // each entry carries how far away it is.
    let items = match (query.near_lat, query.near_lon) {
        (Some(lat), Some(lon)) => {
            let mut entries: Vec<FacilityEntry> = facilities
                .into_iter()
                .map(|facility| {
                    let distance_km =
                        haversine_km(lat, lon, facility.latitude, facility.longitude);
                    FacilityEntry {
                        facility,
                        distance_km: Some(distance_km),
                    }
                })
                .collect();
            entries.sort_by(|a, b| {
                a.distance_km
                    .partial_cmp(&b.distance_km)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            entries
        }
        _ => facilities
            .into_iter()
            .map(|facility| FacilityEntry {
                facility,
                distance_km: None,
            })
            .collect(),
    };

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Facilities",
        FacilityList { items },
        Some(meta),
    ))
}

pub async fn get_facility(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Facility>> {
    let result = Facilities::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(facility_from_entity);
    let result = match result {
        Some(f) => f,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Facility", result, None))
}

pub async fn create_facility(
    state: &AppState,
    user: &AuthUser,
    payload: CreateFacilityRequest,
) -> AppResult<ApiResponse<Facility>> {
    ensure_admin(user)?;
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("Facility name is required".into()));
    }
    if payload.address.trim().is_empty() {
        return Err(AppError::BadRequest("Facility address is required".into()));
    }

    let id = Uuid::new_v4();
    let active = ActiveModel {
        id: Set(id),
        name: Set(payload.name),
        address: Set(payload.address),
        capacity: Set(payload.capacity),
        longitude: Set(payload.longitude),
        latitude: Set(payload.latitude),
        contact: Set(payload.contact),
        hours: Set(payload.hours),
        verified: Set(payload.verified.unwrap_or(false)),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let facility = active.insert(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "facility_create",
        Some("facilities"),
        Some(serde_json::json!({ "facility_id": facility.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Facility created",
        facility_from_entity(facility),
        Some(Meta::empty()),
    ))
}

pub async fn update_facility(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateFacilityRequest,
) -> AppResult<ApiResponse<Facility>> {
    ensure_admin(user)?;
    let existing = Facilities::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(f) => f,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(address) = payload.address {
        active.address = Set(address);
    }
    if let Some(capacity) = payload.capacity {
        active.capacity = Set(capacity);
    }
    if let Some(longitude) = payload.longitude {
        active.longitude = Set(longitude);
    }
    if let Some(latitude) = payload.latitude {
        active.latitude = Set(latitude);
    }
    if let Some(contact) = payload.contact {
        active.contact = Set(contact);
    }
    if let Some(hours) = payload.hours {
        active.hours = Set(hours);
    }
    if let Some(verified) = payload.verified {
        active.verified = Set(verified);
    }
    active.updated_at = Set(Utc::now().into());

    let facility = active.update(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "facility_update",
        Some("facilities"),
        Some(serde_json::json!({ "facility_id": facility.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Updated",
        facility_from_entity(facility),
        Some(Meta::empty()),
    ))
}

pub async fn delete_facility(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = Facilities::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "facility_delete",
        Some("facilities"),
        Some(serde_json::json!({ "facility_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub fn facility_from_entity(model: FacilityModel) -> Facility {
    Facility {
        id: model.id,
        name: model.name,
        address: model.address,
        capacity: model.capacity,
        longitude: model.longitude,
        latitude: model.latitude,
        contact: model.contact,
        hours: model.hours,
        verified: model.verified,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
