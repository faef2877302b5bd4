//! API handlers for Funtime REST endpoints

pub mod admin;
pub mod auth;
pub mod events;
pub mod favorites;
pub mod health;
pub mod likes;
pub mod openapi;
pub mod reviews;
pub mod users;

use std::marker::PhantomData;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    routing::{delete, get, patch, post},
    Json, Router,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{
    error::AppError,
    models::account::{AccountClaims, Role},
    AppState,
};

/// Authentication gate: resolves the bearer JWT into account claims
pub struct AuthenticatedUser(pub AccountClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Authentication("Missing or malformed bearer token".to_string()))?;

        let claims = AccountClaims::from_token(bearer.token(), &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}

/// Allowed-roles set of a route group
pub trait RoleSet: Send + Sync + 'static {
    const ROLES: &'static [Role];
}

pub struct AdminOnly;

impl RoleSet for AdminOnly {
    const ROLES: &'static [Role] = &[Role::Admin];
}

pub struct OrganiserOnly;

impl RoleSet for OrganiserOnly {
    const ROLES: &'static [Role] = &[Role::Organiser];
}

/// Customers and organisers
pub struct Members;

impl RoleSet for Members {
    const ROLES: &'static [Role] = &[Role::Customer, Role::Organiser];
}

/// Authorization gate: claims of an authenticated account whose role is in `R`
///
/// Runs with the other request-parts extractors, so it rejects before the body is read.
pub struct Authorized<R: RoleSet>(pub AccountClaims, PhantomData<R>);

#[async_trait]
impl<R: RoleSet> FromRequestParts<AppState> for Authorized<R> {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let AuthenticatedUser(claims) = AuthenticatedUser::from_request_parts(parts, state).await?;
        claims.authorize(R::ROLES)?;
        Ok(Authorized(claims, PhantomData))
    }
}

/// Path parameters whose rejection uses the JSON error body
pub struct Path<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(parts, state).await?;
        Ok(Path(value))
    }
}

/// Query string whose rejection uses the JSON error body
pub struct Query<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) = axum::extract::Query::<T>::from_request_parts(parts, state).await?;
        Ok(Query(value))
    }
}

/// JSON body that is deserialized and validated before reaching a handler
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Build the `/api/v1` routes
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Authentication
        .route("/auth/signup/customer", post(auth::sign_up_customer))
        .route("/auth/signup/organiser", post(auth::sign_up_organiser))
        .route("/auth/signin/:role", post(auth::sign_in))
        // Admins
        .route("/host/create", post(admin::create_admin))
        .route("/host/all", get(admin::view_all_admins))
        .route(
            "/host/me",
            get(admin::view_me)
                .post(admin::save_fcm_token)
                .patch(admin::update_profile),
        )
        .route("/host/me/password", patch(admin::update_password))
        .route("/host/:id", delete(admin::delete_admin))
        // Customers and organisers
        .route("/users/me", get(users::view_me).patch(users::update_profile))
        .route("/users/me/password", patch(users::update_password))
        // Events
        .route("/events", post(events::create_event).get(events::list_events))
        .route("/events/mine", get(events::list_my_events))
        .route(
            "/events/:id",
            get(events::get_event)
                .patch(events::update_event)
                .delete(events::delete_event),
        )
        // Favorites
        .route(
            "/favorites",
            post(favorites::create_favorite).get(favorites::list_favorites),
        )
        .route(
            "/favorites/:id",
            get(favorites::get_favorite)
                .patch(favorites::update_favorite)
                .delete(favorites::delete_favorite),
        )
        // Likes
        .route("/likes/event", post(likes::like_event))
        .route("/likes/crowdsource", post(likes::like_crowd_sourced_event))
        .route("/likes/event/:id", get(likes::list_likes_by_event))
        .route("/likes/crowdsource/:id", get(likes::list_likes_by_crowd_source))
        .route("/likes/:id", delete(likes::delete_like))
        // Reviews
        .route("/reviews", post(reviews::create_review))
        .route("/reviews/event/:id", get(reviews::list_event_reviews))
        .route(
            "/reviews/:id",
            get(reviews::get_review)
                .patch(reviews::update_review)
                .delete(reviews::delete_review),
        )
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use chrono::Utc;
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::{
        config::AppConfig,
        models::account::{AccountClaims, Role},
        repository::mock::MockStores,
        services::Services,
        AppState,
    };

    pub(crate) const SECRET: &str = "test-secret";

    pub(crate) fn app(stores: MockStores) -> Router {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = SECRET.to_string();
        let services = Services::new(stores.into_repository(), config.auth.clone());
        let state = AppState {
            config: Arc::new(config),
            services: Arc::new(services),
        };
        Router::new().nest("/api/v1", super::router(state))
    }

    pub(crate) fn token(account_id: Uuid, role: Role) -> String {
        let now = Utc::now().timestamp();
        AccountClaims {
            sub: account_id,
            email: format!("{}@example.com", role),
            role,
            exp: now + 3600,
            iat: now,
        }
        .create_token(SECRET)
        .unwrap()
    }

    /// Send one request through the router and return status plus JSON body (Null if empty)
    pub(crate) async fn send(
        app: Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use uuid::Uuid;

    use super::test_support::{app, send, token};
    use crate::{models::account::Role, repository::mock::MockStores};

    #[tokio::test]
    async fn missing_token_is_unauthenticated() {
        let (status, body) = send(app(MockStores::default()), Method::GET, "/api/v1/favorites", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], 401);
    }

    #[tokio::test]
    async fn garbage_token_is_unauthenticated() {
        let (status, _) = send(
            app(MockStores::default()),
            Method::GET,
            "/api/v1/events",
            Some("not-a-jwt"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_path_id_uses_json_error_body() {
        let customer = token(Uuid::new_v4(), Role::Customer);
        let (status, body) = send(
            app(MockStores::default()),
            Method::GET,
            "/api/v1/events/not-a-uuid",
            Some(&customer),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
        assert_eq!(body["error"], "Bad Request");
    }

    #[tokio::test]
    async fn malformed_query_uses_json_error_body() {
        let customer = token(Uuid::new_v4(), Role::Customer);
        let (status, body) = send(
            app(MockStores::default()),
            Method::GET,
            "/api/v1/events?category=a&category=b",
            Some(&customer),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn malformed_body_is_a_validation_error() {
        let customer = token(Uuid::new_v4(), Role::Customer);
        let (status, body) = send(
            app(MockStores::default()),
            Method::POST,
            "/api/v1/reviews",
            Some(&customer),
            Some(json!({ "event_id": Uuid::new_v4(), "rating": 9, "comment": "too good" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
    }
}
