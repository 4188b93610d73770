use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::BrandCatalog;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddBrandRequest {
    pub brand: String,
    pub models: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BrandList {
    pub items: Vec<BrandCatalog>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModelList {
    pub models: Vec<String>,
}
