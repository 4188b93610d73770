pub mod admin_service;
pub mod auth_service;
pub mod booking_service;
pub mod brand_service;
pub mod facility_service;
