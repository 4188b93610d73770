use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Facility;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFacilityRequest {
    pub name: String,
    pub address: String,
    pub capacity: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub contact: String,
    pub hours: String,
    pub verified: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFacilityRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<i32>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub contact: Option<String>,
    pub hours: Option<String>,
    pub verified: Option<bool>,
}

/// A facility plus its distance from the caller's probe point, when the list
/// was queried with `near_lat`/`near_lon`.
#[derive(Debug, Serialize, ToSchema)]
pub struct FacilityEntry {
    #[serde(flatten)]
    pub facility: Facility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FacilityList {
    pub items: Vec<FacilityEntry>,
}
