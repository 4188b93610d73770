use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod brands;
pub mod doc;
pub mod facilities;
pub mod health;
pub mod params;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/facilities", facilities::router())
        .nest("/brands", brands::router())
        .nest("/bookings", bookings::router())
        .nest("/admin", admin::router())
}
