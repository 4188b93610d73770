use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        bookings::{BookingList, BookingWithFacility, UpdateApprovalStatusRequest},
        brands::{AddBrandRequest, BrandList, ModelList},
        facilities::{FacilityEntry, FacilityList},
    },
    models::{ApprovalStatus, Booking, BrandCatalog, DeviceCategory, Facility, User},
    response::{ApiResponse, Meta},
    routes::{admin, auth, bookings, brands, facilities, health, params},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::register,
        facilities::list_facilities,
        facilities::get_facility,
        facilities::create_facility,
        facilities::update_facility,
        facilities::delete_facility,
        brands::list_brands,
        brands::get_brand_models,
        brands::add_brand,
        bookings::create_booking,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::update_booking,
        bookings::delete_booking,
        admin::list_all_bookings,
        admin::get_booking_admin,
        admin::update_approval_status,
        admin::restore_booking
    ),
    components(
        schemas(
            User,
            Facility,
            BrandCatalog,
            Booking,
            ApprovalStatus,
            DeviceCategory,
            AddBrandRequest,
            UpdateApprovalStatusRequest,
            BrandList,
            ModelList,
            FacilityEntry,
            FacilityList,
            BookingList,
            BookingWithFacility,
            params::Pagination,
            params::FacilityQuery,
            params::BookingListQuery,
            Meta,
            ApiResponse<Facility>,
            ApiResponse<FacilityList>,
            ApiResponse<Booking>,
            ApiResponse<BookingList>,
            ApiResponse<BookingWithFacility>,
            ApiResponse<BrandList>,
            ApiResponse<ModelList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Facilities", description = "Collection facility endpoints"),
        (name = "Brands", description = "Per-category brand catalog endpoints"),
        (name = "Bookings", description = "Pickup booking endpoints"),
        (name = "Admin", description = "Admin dashboard endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
