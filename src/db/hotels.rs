use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::hotel::{Hotel, HotelInput};

/// Store seam for hotel records. The ranking query only needs `fetch_all`;
/// SQLite has no spatial functions, so distance is computed in-process over
/// the full snapshot.
#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn insert(&self, input: &HotelInput) -> Result<Hotel, sqlx::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Hotel>, sqlx::Error>;
    async fn fetch_all(&self) -> Result<Vec<Hotel>, sqlx::Error>;
    async fn update(&self, hotel: &Hotel) -> Result<(), sqlx::Error>;
    async fn delete(&self, id: i64) -> Result<(), sqlx::Error>;
}

pub struct SqliteHotelRepository {
    pool: SqlitePool,
}

impl SqliteHotelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelRepository for SqliteHotelRepository {
    async fn insert(&self, input: &HotelInput) -> Result<Hotel, sqlx::Error> {
        sqlx::query_as::<_, Hotel>(
            r#"
            INSERT INTO hotels (name, price, longitude, latitude)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, price, longitude, latitude
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.longitude)
        .bind(input.latitude)
        .fetch_one(&self.pool)
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Hotel>, sqlx::Error> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn fetch_all(&self) -> Result<Vec<Hotel>, sqlx::Error> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM hotels")
            .fetch_all(&self.pool)
            .await
    }

    async fn update(&self, hotel: &Hotel) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE hotels SET name = ?, price = ?, longitude = ?, latitude = ? WHERE id = ?")
            .bind(&hotel.name)
            .bind(hotel.price)
            .bind(hotel.longitude)
            .bind(hotel.latitude)
            .bind(hotel.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM hotels WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
