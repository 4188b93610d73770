use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;
        (page, per_page, offset)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingSortBy {
    CreatedAt,
    PickupDate,
    RecycleItemPrice,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FacilityQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub q: Option<String>,
    pub verified: Option<bool>,
    pub near_lat: Option<f64>,
    pub near_lon: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookingListQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub status: Option<String>,
    pub brand: Option<String>,
    pub q: Option<String>,
    pub sort_by: Option<BookingSortBy>,
    pub sort_order: Option<SortOrder>,
}
