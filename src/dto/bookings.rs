use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Booking, Facility};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    pub brand: String,
    pub recycle_item: String,
    pub recycle_item_price: i64,
    pub pickup_date: String,
    pub pickup_time: String,
    /// Facility id as submitted by the form; must parse as a UUID but is not
    /// checked for existence.
    pub facility: String,
    pub full_name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingRequest {
    pub brand: Option<String>,
    pub recycle_item: Option<String>,
    pub recycle_item_price: Option<i64>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub facility: Option<String>,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateApprovalStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingList {
    pub items: Vec<Booking>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingWithFacility {
    pub booking: Booking,
    pub facility: Option<Facility>,
}
