use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use super::CarStore;
use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};
use crate::models::Car;

pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(config.connect_options()?)
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    info!("Running migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Migrations complete.");
    Ok(())
}

#[derive(Debug, Clone)]
pub struct PgCarStore {
    pool: PgPool,
}

impl PgCarStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn serial_not_found(serial_no: i32) -> AppError {
    AppError::NotFound(format!("Car with serial number {} not found", serial_no))
}

#[async_trait]
impl CarStore for PgCarStore {
    async fn list(&self) -> AppResult<Vec<Car>> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT car_serial_no, car_name, car_price FROM cars ORDER BY car_serial_no",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(cars)
    }

    async fn get(&self, serial_no: i32) -> AppResult<Car> {
        sqlx::query_as::<_, Car>(
            "SELECT car_serial_no, car_name, car_price FROM cars WHERE car_serial_no = $1",
        )
        .bind(serial_no)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| serial_not_found(serial_no))
    }

    async fn insert(&self, car: &Car) -> AppResult<()> {
        let result = sqlx::query(
            "INSERT INTO cars (car_serial_no, car_name, car_price) VALUES ($1, $2, $3)",
        )
        .bind(car.serial_no)
        .bind(&car.name)
        .bind(car.price)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => Err(AppError::Conflict(
                "Car with this serial number already exists".to_string(),
            )),
            Err(err) => Err(err.into()),
        }
    }

    async fn update(&self, serial_no: i32, name: &str, price: f64) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE cars SET car_name = $1, car_price = $2 WHERE car_serial_no = $3")
                .bind(name)
                .bind(price)
                .bind(serial_no)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(serial_not_found(serial_no));
        }
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM cars WHERE car_name = $1")
            .bind(name)
            .execute(&self.pool)
            .await?;

        match result.rows_affected() {
            0 => Err(AppError::NotFound(format!("No car named '{}' found", name))),
            n => Ok(n),
        }
    }

    async fn delete_by_serial(&self, serial_no: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM cars WHERE car_serial_no = $1")
            .bind(serial_no)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(serial_not_found(serial_no));
        }
        Ok(())
    }
}
