//! Events repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::event::{CreateEvent, Event, EventQuery, UpdateEvent},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventsStore: Send + Sync {
    async fn create(&self, organiser_id: Uuid, data: &CreateEvent) -> AppResult<Event>;
    async fn list(&self, query: &EventQuery) -> AppResult<Vec<Event>>;
    async fn list_by_organiser(&self, organiser_id: Uuid) -> AppResult<Vec<Event>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>>;
    /// Partial update scoped to the owning organiser
    async fn update(&self, id: Uuid, organiser_id: Uuid, data: &UpdateEvent) -> AppResult<Option<Event>>;
    async fn delete(&self, id: Uuid, organiser_id: Uuid) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct EventsRepository {
    pool: Pool<Postgres>,
}

impl EventsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventsStore for EventsRepository {
    async fn create(&self, organiser_id: Uuid, data: &CreateEvent) -> AppResult<Event> {
        let row = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                organiser_id, name, description, price, address, total_ticket,
                date, time, age_range, instruction, category
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(organiser_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(&data.address)
        .bind(data.total_ticket)
        .bind(data.date)
        .bind(data.time)
        .bind(&data.age_range)
        .bind(&data.instruction)
        .bind(&data.category)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list(&self, query: &EventQuery) -> AppResult<Vec<Event>> {
        let rows = match query.category {
            Some(ref category) => {
                sqlx::query_as::<_, Event>(
                    "SELECT * FROM events WHERE LOWER(category) = LOWER($1) ORDER BY date, time",
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date, time")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }

    async fn list_by_organiser(&self, organiser_id: Uuid) -> AppResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE organiser_id = $1 ORDER BY date, time",
        )
        .bind(organiser_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        let row = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, organiser_id: Uuid, data: &UpdateEvent) -> AppResult<Option<Event>> {
        let mut sets = vec!["updated_at = NOW()".to_string()];
        // $1 = id, $2 = organiser_id
        let mut idx = 3;

        macro_rules! add_f {
            ($field:expr, $name:expr) => {
                if $field.is_some() { sets.push(format!("{} = ${}", $name, idx)); idx += 1; }
            };
        }

        add_f!(data.name, "name");
        add_f!(data.description, "description");
        add_f!(data.price, "price");
        add_f!(data.address, "address");
        add_f!(data.total_ticket, "total_ticket");
        add_f!(data.date, "date");
        add_f!(data.time, "time");
        add_f!(data.age_range, "age_range");
        add_f!(data.instruction, "instruction");
        add_f!(data.category, "category");

        let query = format!(
            "UPDATE events SET {} WHERE id = $1 AND organiser_id = $2 RETURNING *",
            sets.join(", ")
        );

        let mut builder = sqlx::query_as::<_, Event>(&query).bind(id).bind(organiser_id);

        macro_rules! bind_f {
            ($field:expr) => {
                if let Some(ref val) = $field { builder = builder.bind(val); }
            };
        }

        bind_f!(data.name);
        bind_f!(data.description);
        bind_f!(data.price);
        bind_f!(data.address);
        bind_f!(data.total_ticket);
        bind_f!(data.date);
        bind_f!(data.time);
        bind_f!(data.age_range);
        bind_f!(data.instruction);
        bind_f!(data.category);

        let row = builder.fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid, organiser_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1 AND organiser_id = $2")
            .bind(id)
            .bind(organiser_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
