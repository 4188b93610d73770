use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Booking workflow stage. A booking starts `pending`; admins move it to
/// `approved`, `rejected`, or `trashed`. A trashed booking can only leave the
/// trash by being restored to `pending` — its prior status is not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
    Trashed,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
            ApprovalStatus::Trashed => "trashed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ApprovalStatus::Pending),
            "approved" => Some(ApprovalStatus::Approved),
            "rejected" => Some(ApprovalStatus::Rejected),
            "trashed" => Some(ApprovalStatus::Trashed),
            _ => None,
        }
    }

    /// Transition table: anything may be trashed, trashed may only be
    /// restored to pending, approved and rejected may be reassigned to each
    /// other. Reassigning the current status is a no-op and allowed.
    pub fn can_transition_to(self, next: ApprovalStatus) -> bool {
        use ApprovalStatus::*;
        match (self, next) {
            (_, Trashed) => true,
            (Trashed, Pending) => true,
            (Trashed, _) => false,
            (Pending, Approved | Rejected) => true,
            (Approved, Rejected) | (Rejected, Approved) => true,
            (current, next) => current == next,
        }
    }
}

/// Device categories the recycling form accepts; each has its own brand
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    Smartphone,
    Laptop,
    Accessories,
    Television,
    Refrigerator,
}

impl DeviceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceCategory::Smartphone => "smartphone",
            DeviceCategory::Laptop => "laptop",
            DeviceCategory::Accessories => "accessories",
            DeviceCategory::Television => "television",
            DeviceCategory::Refrigerator => "refrigerator",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "smartphone" => Some(DeviceCategory::Smartphone),
            "laptop" => Some(DeviceCategory::Laptop),
            "accessories" => Some(DeviceCategory::Accessories),
            "television" => Some(DeviceCategory::Television),
            "refrigerator" => Some(DeviceCategory::Refrigerator),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Facility {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub capacity: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub contact: String,
    pub hours: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BrandCatalog {
    pub id: Uuid,
    pub category: DeviceCategory,
    pub brand: String,
    pub models: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_email: String,
    pub brand: String,
    pub recycle_item: String,
    pub recycle_item_price: i64,
    pub pickup_date: String,
    pub pickup_time: String,
    pub facility_id: Uuid,
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub approval_status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
