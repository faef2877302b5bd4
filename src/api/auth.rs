//! Sign-up and sign-in endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::account::{AccessToken, Account, CustomerSignUp, OrganiserSignUp, Role, SignIn, SignUp},
};

use super::{Path, ValidatedJson};

/// Register a customer account
#[utoipa::path(
    post,
    path = "/auth/signup/customer",
    tag = "auth",
    request_body = CustomerSignUp,
    responses(
        (status = 201, description = "Customer registered", body = Account),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn sign_up_customer(
    State(state): State<crate::AppState>,
    ValidatedJson(dto): ValidatedJson<CustomerSignUp>,
) -> AppResult<(StatusCode, Json<Account>)> {
    let account = state.services.accounts.sign_up(SignUp::Customer(dto)).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// Register an organiser account
#[utoipa::path(
    post,
    path = "/auth/signup/organiser",
    tag = "auth",
    request_body = OrganiserSignUp,
    responses(
        (status = 201, description = "Organiser registered", body = Account),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn sign_up_organiser(
    State(state): State<crate::AppState>,
    ValidatedJson(dto): ValidatedJson<OrganiserSignUp>,
) -> AppResult<(StatusCode, Json<Account>)> {
    let account = state.services.accounts.sign_up(SignUp::Organiser(dto)).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// Sign in as the given role and receive a bearer token
#[utoipa::path(
    post,
    path = "/auth/signin/{role}",
    tag = "auth",
    params(("role" = String, Path, description = "admin, organiser or customer")),
    request_body = SignIn,
    responses(
        (status = 200, description = "Signed in", body = AccessToken),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn sign_in(
    State(state): State<crate::AppState>,
    Path(role): Path<Role>,
    ValidatedJson(dto): ValidatedJson<SignIn>,
) -> AppResult<Json<AccessToken>> {
    let access_token = state.services.accounts.sign_in(role, &dto).await?;
    Ok(Json(AccessToken { access_token }))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::{
        api::test_support::{app, send},
        repository::mock::MockStores,
    };

    #[tokio::test]
    async fn sign_up_rejects_short_password_before_store() {
        let mut stores = MockStores::default();
        stores.accounts.expect_create().times(0);

        let (status, body) = send(
            app(stores),
            Method::POST,
            "/api/v1/auth/signup/customer",
            None,
            Some(json!({ "name": "E2E Test", "email": "test@example.com", "password": "short" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn sign_in_with_unknown_role_uses_json_error_body() {
        let mut stores = MockStores::default();
        stores.accounts.expect_find_by_email().times(0);

        let (status, body) = send(
            app(stores),
            Method::POST,
            "/api/v1/auth/signin/parent",
            None,
            Some(json!({ "email": "someone@example.com", "password": "12345678" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
        assert_eq!(body["error"], "Bad Request");
    }

    #[tokio::test]
    async fn sign_in_with_unknown_email_is_unauthenticated() {
        let mut stores = MockStores::default();
        stores.accounts.expect_find_by_email().returning(|_| Ok(None));

        let (status, body) = send(
            app(stores),
            Method::POST,
            "/api/v1/auth/signin/organiser",
            None,
            Some(json!({ "email": "ghost@example.com", "password": "12345678" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Unauthorized");
    }
}
