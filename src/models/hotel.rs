use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub longitude: f64,
    pub latitude: f64,
}

/// Request body shared by create and update; both carry the same fields
/// under the same constraints.
#[derive(Debug, Deserialize, Validate)]
pub struct HotelInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
}

/// Projection returned by the ranking query. Computed fresh per request,
/// never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HotelWithDistance {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub distance_in_meters: f64,
}
