use std::sync::Arc;

use validator::Validate;

use crate::db::hotels::HotelRepository;
use crate::errors::ApiError;
use crate::geo::Point;
use crate::models::hotel::{Hotel, HotelInput, HotelWithDistance};
use crate::ranking;

/// Domain operations over the hotel store: CRUD plus the price/distance
/// ranking query.
pub struct HotelService {
    repo: Arc<dyn HotelRepository>,
}

impl HotelService {
    pub fn new(repo: Arc<dyn HotelRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Hotel>, ApiError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Hotel>, ApiError> {
        Ok(self.repo.fetch_all().await?)
    }

    /// Validates the request and persists a new hotel.
    pub async fn create(&self, input: HotelInput) -> Result<Hotel, ApiError> {
        validate(&input)?;

        let hotel = self.repo.insert(&input).await?;
        log::info!("new hotel created: id={}", hotel.id);

        Ok(hotel)
    }

    /// Validates the request and overwrites the hotel with the given id.
    /// The store is not touched until validation passes.
    pub async fn update(&self, id: i64, input: HotelInput) -> Result<Hotel, ApiError> {
        validate(&input)?;

        let mut hotel = self.repo.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
        hotel.name = input.name;
        hotel.price = input.price;
        hotel.longitude = input.longitude;
        hotel.latitude = input.latitude;

        self.repo.update(&hotel).await?;
        log::info!("hotel updated: id={}", id);

        Ok(hotel)
    }

    /// Removes the hotel with the given id; existence is checked first so a
    /// missing id surfaces as `NotFound` without issuing a delete.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.repo.find_by_id(id).await?.ok_or(ApiError::NotFound)?;

        self.repo.delete(id).await?;
        log::info!("hotel deleted: id={}", id);

        Ok(())
    }

    /// The ranking query: every hotel annotated with its distance to `point`,
    /// ordered by price then distance, paginated by skip/take.
    pub async fn rank(
        &self,
        point: Point,
        skip: usize,
        take: usize,
    ) -> Result<Vec<HotelWithDistance>, ApiError> {
        let hotels = self.repo.fetch_all().await?;

        Ok(ranking::rank(hotels, point, skip, take))
    }
}

fn validate(input: &HotelInput) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::InvalidArgument(e.to_string()))
}
