//! Events API endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::event::{CreateEvent, Event, EventQuery, UpdateEvent},
};

use super::{AuthenticatedUser, Authorized, OrganiserOnly, Path, Query, ValidatedJson};

/// List events, optionally filtered by category
#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    security(("bearer_auth" = [])),
    params(EventQuery),
    responses(
        (status = 200, description = "Events list", body = Vec<Event>)
    )
)]
pub async fn list_events(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<EventQuery>,
) -> AppResult<Json<Vec<Event>>> {
    let events = state.services.events.view_all(&query).await?;
    Ok(Json(events))
}

/// List the calling organiser's own events
#[utoipa::path(
    get,
    path = "/events/mine",
    tag = "events",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own events", body = Vec<Event>),
        (status = 403, description = "Organiser role required")
    )
)]
pub async fn list_my_events(
    State(state): State<crate::AppState>,
    Authorized(claims, _): Authorized<OrganiserOnly>,
) -> AppResult<Json<Vec<Event>>> {
    let events = state.services.events.view_mine(claims.account_id()).await?;
    Ok(Json(events))
}

/// Get event by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "events",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event details", body = Event),
        (status = 404, description = "Event not found")
    )
)]
pub async fn get_event(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Event>> {
    let event = state.services.events.view_one(id).await?;
    Ok(Json(event))
}

/// Create an event
#[utoipa::path(
    post,
    path = "/events",
    tag = "events",
    security(("bearer_auth" = [])),
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 403, description = "Organiser role required")
    )
)]
pub async fn create_event(
    State(state): State<crate::AppState>,
    Authorized(claims, _): Authorized<OrganiserOnly>,
    ValidatedJson(data): ValidatedJson<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = state.services.events.create(claims.account_id(), &data).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Update one of the caller's events
#[utoipa::path(
    patch,
    path = "/events/{id}",
    tag = "events",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Event ID")),
    request_body = UpdateEvent,
    responses(
        (status = 202, description = "Event updated", body = Event),
        (status = 403, description = "Organiser role required"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn update_event(
    State(state): State<crate::AppState>,
    Authorized(claims, _): Authorized<OrganiserOnly>,
    Path(id): Path<Uuid>,
    ValidatedJson(data): ValidatedJson<UpdateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = state
        .services
        .events
        .update(id, claims.account_id(), &data)
        .await?;
    Ok((StatusCode::ACCEPTED, Json(event)))
}

/// Delete one of the caller's events
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "events",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 403, description = "Organiser role required"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn delete_event(
    State(state): State<crate::AppState>,
    Authorized(claims, _): Authorized<OrganiserOnly>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.events.delete(id, claims.account_id()).await?;
    Ok(StatusCode::NO_CONTENT)
}
