//! Event model (activities published by organisers)

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Event record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub id: Uuid,
    /// Owning organiser account
    pub organiser_id: Uuid,
    pub name: String,
    pub description: String,
    /// Ticket price
    pub price: Decimal,
    pub address: String,
    /// Number of tickets on sale
    pub total_ticket: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Target age range, e.g. "6-10"
    pub age_range: String,
    pub instruction: Option<String>,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn non_negative_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("price_negative"));
    }
    Ok(())
}

/// Create event request
///
/// Numeric fields accept either JSON numbers or numeric strings.
#[serde_as]
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEvent {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[schema(value_type = String, example = "200.0")]
    #[validate(custom(function = "non_negative_price"))]
    pub price: Decimal,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0, message = "Ticket count cannot be negative"))]
    pub total_ticket: i32,
    /// Event date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Start time (HH:MM:SS)
    #[schema(value_type = String, example = "11:30:00")]
    pub time: NaiveTime,
    #[validate(length(min = 1, message = "Age range is required"))]
    pub age_range: String,
    pub instruction: Option<String>,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
}

/// Update event request (partial)
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateEvent {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, example = "50.0")]
    #[validate(custom(function = "non_negative_price"))]
    pub price: Option<Decimal>,
    pub address: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    #[validate(range(min = 0, message = "Ticket count cannot be negative"))]
    pub total_ticket: Option<i32>,
    pub date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub time: Option<NaiveTime>,
    pub age_range: Option<String>,
    pub instruction: Option<String>,
    pub category: Option<String>,
}

/// Query parameters for event listings
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct EventQuery {
    /// Filter by category
    pub category: Option<String>,
}
