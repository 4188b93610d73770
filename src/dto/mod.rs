pub mod auth;
pub mod bookings;
pub mod brands;
pub mod facilities;
