use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::bookings::{BookingList, BookingWithFacility, UpdateApprovalStatusRequest},
    entity::bookings::{
        ActiveModel as BookingActive, Column as BookingCol, Entity as Bookings,
        Model as BookingModel,
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{ApprovalStatus, Booking},
    response::{ApiResponse, Meta},
    routes::params::{BookingListQuery, BookingSortBy, SortOrder},
    services::booking_service::{booking_from_entity, with_facility},
    state::AppState,
};

pub async fn list_all_bookings(
    state: &AppState,
    user: &AuthUser,
    query: BookingListQuery,
) -> AppResult<ApiResponse<BookingList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination.normalize();

    let mut condition = Condition::all();
    match query.status.as_ref().filter(|s| !s.is_empty()) {
        Some(status) => {
            let status = ApprovalStatus::parse(status)
                .ok_or_else(|| AppError::BadRequest("Invalid approval status".into()))?;
            condition = condition.add(BookingCol::ApprovalStatus.eq(status.as_str()));
        }
        // The default "all" view hides the trash bin.
        None => {
            condition =
                condition.add(BookingCol::ApprovalStatus.ne(ApprovalStatus::Trashed.as_str()));
        }
    }

    if let Some(brand) = query.brand.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(BookingCol::Brand.eq(brand.clone()));
    }

    if let Some(search) = query.q.as_ref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        condition = condition.add(
            Condition::any()
                .add(Expr::col(BookingCol::FullName).ilike(pattern.clone()))
                .add(Expr::col(BookingCol::UserEmail).ilike(pattern.clone()))
                .add(Expr::col(BookingCol::Brand).ilike(pattern.clone()))
                .add(Expr::col(BookingCol::RecycleItem).ilike(pattern.clone()))
                .add(Expr::col(BookingCol::Phone).ilike(pattern)),
        );
    }

    let sort_by = query.sort_by.unwrap_or(BookingSortBy::CreatedAt);
    let sort_order = query.sort_order.unwrap_or(SortOrder::Desc);
    let sort_col = match sort_by {
        BookingSortBy::CreatedAt => BookingCol::CreatedAt,
        BookingSortBy::PickupDate => BookingCol::PickupDate,
        BookingSortBy::RecycleItemPrice => BookingCol::RecycleItemPrice,
    };

    let mut finder = Bookings::find().filter(condition);
    finder = match sort_order {
        SortOrder::Asc => finder.order_by_asc(sort_col),
        SortOrder::Desc => finder.order_by_desc(sort_col),
    };

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

pub async fn get_booking_admin(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<BookingWithFacility>> {
    ensure_admin(user)?;
    let booking = Bookings::find_by_id(id).one(&state.orm).await?;
    let booking = match booking {
        Some(b) => b,
        None => return Err(AppError::NotFound),
    };

    let data = with_facility(state, booking).await?;
    Ok(ApiResponse::success("Booking found", data, Some(Meta::empty())))
}

pub async fn update_approval_status(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateApprovalStatusRequest,
) -> AppResult<ApiResponse<Booking>> {
    ensure_admin(user)?;
    let next = parse_assignable_status(&payload.status)?;

    let existing = Bookings::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(b) => b,
        None => return Err(AppError::NotFound),
    };

    let current = ApprovalStatus::parse(&existing.approval_status)
        .unwrap_or(ApprovalStatus::Pending);
    if !current.can_transition_to(next) {
        return Err(AppError::BadRequest(format!(
            "Cannot move a {} booking to {}",
            current.as_str(),
            next.as_str()
        )));
    }

    let mut active: BookingActive = existing.into();
    active.approval_status = Set(next.as_str().into());
    active.updated_at = Set(Utc::now().into());
    let booking = active.update(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "booking_status_update",
        Some("bookings"),
        Some(serde_json::json!({ "booking_id": booking.id, "status": booking.approval_status })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    let message = match next {
        ApprovalStatus::Trashed => "Booking moved to trash".to_string(),
        other => format!("Booking {}", other.as_str()),
    };

    Ok(ApiResponse::success(
        message,
        booking_from_entity(booking),
        Some(Meta::empty()),
    ))
}

pub async fn restore_booking(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Booking>> {
    ensure_admin(user)?;
    let existing = Bookings::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(b) => b,
        None => return Err(AppError::NotFound),
    };

    if existing.approval_status != ApprovalStatus::Trashed.as_str() {
        return Err(AppError::BadRequest("Booking is not in trash".into()));
    }

    let mut active: BookingActive = existing.into();
    active.approval_status = Set(ApprovalStatus::Pending.as_str().into());
    active.updated_at = Set(Utc::now().into());
    let booking = active.update(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "booking_restore",
        Some("bookings"),
        Some(serde_json::json!({ "booking_id": booking.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Booking restored successfully",
        booking_from_entity(booking),
        Some(Meta::empty()),
    ))
}

/// The status endpoint only assigns approved/rejected/trashed; pending is
/// reachable solely through restore.
fn parse_assignable_status(status: &str) -> Result<ApprovalStatus, AppError> {
    match ApprovalStatus::parse(status) {
        Some(ApprovalStatus::Pending) | None => {
            Err(AppError::BadRequest("Invalid approval status".into()))
        }
        Some(status) => Ok(status),
    }
}
