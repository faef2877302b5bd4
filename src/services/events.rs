//! Events service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::event::{CreateEvent, Event, EventQuery, UpdateEvent},
    repository::Repository,
};

#[derive(Clone)]
pub struct EventsService {
    repository: Repository,
}

impl EventsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, organiser_id: Uuid, data: &CreateEvent) -> AppResult<Event> {
        let event = self.repository.events.create(organiser_id, data).await?;
        tracing::info!(event_id = %event.id, organiser_id = %organiser_id, "Event created");
        Ok(event)
    }

    pub async fn view_all(&self, query: &EventQuery) -> AppResult<Vec<Event>> {
        self.repository.events.list(query).await
    }

    /// Events published by one organiser
    pub async fn view_mine(&self, organiser_id: Uuid) -> AppResult<Vec<Event>> {
        self.repository.events.list_by_organiser(organiser_id).await
    }

    pub async fn view_one(&self, id: Uuid) -> AppResult<Event> {
        self.repository
            .events
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    pub async fn update(&self, id: Uuid, organiser_id: Uuid, data: &UpdateEvent) -> AppResult<Event> {
        self.repository
            .events
            .update(id, organiser_id, data)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid, organiser_id: Uuid) -> AppResult<()> {
        if !self.repository.events.delete(id, organiser_id).await? {
            return Err(AppError::NotFound("Event not found".to_string()));
        }
        tracing::info!(event_id = %id, "Event deleted");
        Ok(())
    }
}
