use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::errors::ApiError;
use crate::geo::Point;
use crate::models::hotel::HotelInput;
use crate::services::hotels::HotelService;

/// Query string of the ranking endpoint. Coordinates are checked against
/// their valid ranges here, before the service runs; skip/take fall back to
/// standard pagination defaults.
#[derive(Debug, Deserialize, Validate)]
pub struct FindQuery {
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_take")]
    pub take: usize,
}

fn default_take() -> usize {
    15
}

pub async fn list_hotels(service: web::Data<HotelService>) -> Result<HttpResponse, ApiError> {
    let hotels = service.list_all().await?;

    Ok(HttpResponse::Ok().json(hotels))
}

pub async fn get_hotel_by_id(
    service: web::Data<HotelService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    match service.find_by_id(path.into_inner()).await? {
        Some(hotel) => Ok(HttpResponse::Ok().json(hotel)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn create_hotel(
    service: web::Data<HotelService>,
    body: web::Json<HotelInput>,
) -> Result<HttpResponse, ApiError> {
    let hotel = service.create(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(hotel))
}

pub async fn update_hotel(
    service: web::Data<HotelService>,
    path: web::Path<i64>,
    body: web::Json<HotelInput>,
) -> Result<HttpResponse, ApiError> {
    let hotel = service.update(path.into_inner(), body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(hotel))
}

pub async fn delete_hotel(
    service: web::Data<HotelService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    service.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().finish())
}

pub async fn find_hotels(
    service: web::Data<HotelService>,
    query: web::Query<FindQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    query
        .validate()
        .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;

    let hotels = service
        .rank(
            Point::new(query.longitude, query.latitude),
            query.skip,
            query.take,
        )
        .await?;

    Ok(HttpResponse::Ok().json(hotels))
}
