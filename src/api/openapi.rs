//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{admin, auth, events, favorites, health, likes, reviews, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Funtime API",
        version = "1.0.0",
        description = "Event discovery and booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    modifiers(&SecurityAddon),
    paths(
        // Health
        health::health_check,
        // Auth
        auth::sign_up_customer,
        auth::sign_up_organiser,
        auth::sign_in,
        // Admins
        admin::create_admin,
        admin::view_all_admins,
        admin::view_me,
        admin::save_fcm_token,
        admin::update_profile,
        admin::update_password,
        admin::delete_admin,
        // Users
        users::view_me,
        users::update_profile,
        users::update_password,
        // Events
        events::list_events,
        events::list_my_events,
        events::get_event,
        events::create_event,
        events::update_event,
        events::delete_event,
        // Favorites
        favorites::create_favorite,
        favorites::list_favorites,
        favorites::get_favorite,
        favorites::update_favorite,
        favorites::delete_favorite,
        // Likes
        likes::like_event,
        likes::like_crowd_sourced_event,
        likes::list_likes_by_event,
        likes::list_likes_by_crowd_source,
        likes::delete_like,
        // Reviews
        reviews::create_review,
        reviews::list_event_reviews,
        reviews::get_review,
        reviews::update_review,
        reviews::delete_review,
    ),
    components(
        schemas(
            // Accounts
            crate::models::account::Account,
            crate::models::account::Role,
            crate::models::account::CustomerSignUp,
            crate::models::account::OrganiserSignUp,
            crate::models::account::CreateAdmin,
            crate::models::account::SignIn,
            crate::models::account::AccessToken,
            crate::models::account::UpdateProfile,
            crate::models::account::UpdatePassword,
            crate::models::account::SaveFcmToken,
            // Events
            crate::models::event::Event,
            crate::models::event::CreateEvent,
            crate::models::event::UpdateEvent,
            crate::models::event::EventQuery,
            // Favorites
            crate::models::favorite::Favorite,
            crate::models::favorite::CreateFavorite,
            crate::models::favorite::UpdateFavorite,
            // Likes
            crate::models::like::Like,
            crate::models::like::CreateLike,
            crate::models::like::LikesResponse,
            // Reviews
            crate::models::review::Review,
            crate::models::review::CreateReview,
            crate::models::review::UpdateReview,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Sign-up and sign-in"),
        (name = "admin", description = "Admin management"),
        (name = "users", description = "Customer and organiser self-service"),
        (name = "events", description = "Event management"),
        (name = "favorites", description = "Wishlists"),
        (name = "likes", description = "Event likes"),
        (name = "reviews", description = "Event reviews")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected paths
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
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
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
