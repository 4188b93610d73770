use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::bookings::{BookingList, BookingWithFacility, CreateBookingRequest, UpdateBookingRequest},
    entity::{
        bookings::{
            ActiveModel as BookingActive, Column as BookingCol, Entity as Bookings,
            Model as BookingModel,
        },
        facilities::Entity as Facilities,
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{ApprovalStatus, Booking},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::facility_service::facility_from_entity,
    state::AppState,
};
use chrono::Utc;

pub async fn create_booking(
    state: &AppState,
    user: &AuthUser,
    payload: CreateBookingRequest,
) -> AppResult<ApiResponse<Booking>> {
    let facility_id = parse_facility_id(&payload.facility)?;
    if payload.brand.trim().is_empty() {
        return Err(AppError::BadRequest("Brand is required".into()));
    }
    if payload.recycle_item.trim().is_empty() {
        return Err(AppError::BadRequest("Recycle item is required".into()));
    }
    if payload.full_name.trim().is_empty() {
        return Err(AppError::BadRequest("Full name is required".into()));
    }

    let submitter = Users::find_by_id(user.user_id).one(&state.orm).await?;
    let submitter = match submitter {
        Some(u) => u,
        None => return Err(AppError::BadRequest("Unknown user".into())),
    };

    let booking = BookingActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.user_id),
        user_email: Set(submitter.email),
        brand: Set(payload.brand),
        recycle_item: Set(payload.recycle_item),
        recycle_item_price: Set(payload.recycle_item_price),
        pickup_date: Set(payload.pickup_date),
        pickup_time: Set(payload.pickup_time),
        facility_id: Set(facility_id),
        full_name: Set(payload.full_name),
        address: Set(payload.address),
        phone: Set(payload.phone),
        approval_status: Set(ApprovalStatus::Pending.as_str().into()),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "booking_create",
        Some("bookings"),
        Some(serde_json::json!({ "booking_id": booking.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Booking created successfully",
        booking_from_entity(booking),
        Some(Meta::empty()),
    ))
}

pub async fn list_bookings(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<BookingList>> {
    let (page, limit, offset) = pagination.normalize();

    // Trashed bookings stay out of the owner's view; only the admin trash
    // bin shows them.
    let finder = Bookings::find()
        .filter(
            Condition::all()
                .add(BookingCol::UserId.eq(user.user_id))
                .add(BookingCol::ApprovalStatus.ne(ApprovalStatus::Trashed.as_str())),
        )
        .order_by_desc(BookingCol::CreatedAt);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(booking_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Bookings",
        BookingList { items },
        Some(meta),
    ))
}

pub async fn get_booking(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<BookingWithFacility>> {
    let booking = Bookings::find()
        .filter(
            Condition::all()
                .add(BookingCol::UserId.eq(user.user_id))
                .add(BookingCol::Id.eq(id)),
        )
        .one(&state.orm)
        .await?;
    let booking = match booking {
        Some(b) => b,
        None => return Err(AppError::NotFound),
    };

    let data = with_facility(state, booking).await?;
    Ok(ApiResponse::success("Booking found", data, Some(Meta::empty())))
}

pub async fn update_booking(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateBookingRequest,
) -> AppResult<ApiResponse<Booking>> {
    let existing = Bookings::find()
        .filter(
            Condition::all()
                .add(BookingCol::UserId.eq(user.user_id))
                .add(BookingCol::Id.eq(id)),
        )
        .one(&state.orm)
        .await?;
    let existing = match existing {
        Some(b) => b,
        None => return Err(AppError::NotFound),
    };

    let mut active: BookingActive = existing.into();
    if let Some(brand) = payload.brand {
        if brand.trim().is_empty() {
            return Err(AppError::BadRequest("Brand is required".into()));
        }
        active.brand = Set(brand);
    }
    if let Some(recycle_item) = payload.recycle_item {
        active.recycle_item = Set(recycle_item);
    }
    if let Some(price) = payload.recycle_item_price {
        active.recycle_item_price = Set(price);
    }
    if let Some(pickup_date) = payload.pickup_date {
        active.pickup_date = Set(pickup_date);
    }
    if let Some(pickup_time) = payload.pickup_time {
        active.pickup_time = Set(pickup_time);
    }
    if let Some(facility) = payload.facility {
        active.facility_id = Set(parse_facility_id(&facility)?);
    }
    if let Some(full_name) = payload.full_name {
        active.full_name = Set(full_name);
    }
    if let Some(address) = payload.address {
        active.address = Set(address);
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(phone);
    }
    active.updated_at = Set(Utc::now().into());

    let booking = active.update(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "booking_update",
        Some("bookings"),
        Some(serde_json::json!({ "booking_id": booking.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Booking updated successfully",
        booking_from_entity(booking),
        Some(Meta::empty()),
    ))
}

pub async fn delete_booking(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Bookings::delete_many()
        .filter(
            Condition::all()
                .add(BookingCol::UserId.eq(user.user_id))
                .add(BookingCol::Id.eq(id)),
        )
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "booking_delete",
        Some("bookings"),
        Some(serde_json::json!({ "booking_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Booking deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn parse_facility_id(value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|_| AppError::BadRequest("Invalid facility ID".into()))
}

/// Attach the referenced facility when it exists; the reference is loose, so
/// a missing facility is not an error.
pub async fn with_facility(
    state: &AppState,
    model: BookingModel,
) -> AppResult<BookingWithFacility> {
    let facility = Facilities::find_by_id(model.facility_id)
        .one(&state.orm)
        .await?
        .map(facility_from_entity);

    Ok(BookingWithFacility {
        booking: booking_from_entity(model),
        facility,
    })
}

pub fn booking_from_entity(model: BookingModel) -> Booking {
    Booking {
        id: model.id,
        user_id: model.user_id,
        user_email: model.user_email,
        brand: model.brand,
        recycle_item: model.recycle_item,
        recycle_item_price: model.recycle_item_price,
        pickup_date: model.pickup_date,
        pickup_time: model.pickup_time,
        facility_id: model.facility_id,
        full_name: model.full_name,
        address: model.address,
        phone: model.phone,
        approval_status: ApprovalStatus::parse(&model.approval_status)
            .unwrap_or(ApprovalStatus::Pending),
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
