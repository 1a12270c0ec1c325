use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::Car;

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[cfg(test)]
pub use memory::MemoryCarStore;
pub use postgres::{connect, run_migrations, PgCarStore};

/// Persistence seam for the `cars` table. Each method maps to one statement.
///
/// Existence is decided by the statement itself (primary key violation,
/// affected row count), never by a separate lookup, so concurrent requests
/// cannot slip between a check and the write.
#[async_trait]
pub trait CarStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Car>>;

    /// `NotFound` when no row has this serial number.
    async fn get(&self, serial_no: i32) -> AppResult<Car>;

    /// `Conflict` when the serial number is already taken.
    async fn insert(&self, car: &Car) -> AppResult<()>;

    /// Rewrites name and price only. `NotFound` when absent.
    async fn update(&self, serial_no: i32, name: &str, price: f64) -> AppResult<()>;

    /// Removes every row carrying `name` and returns how many went. `NotFound` when none matched.
    async fn delete_by_name(&self, name: &str) -> AppResult<u64>;

    async fn delete_by_serial(&self, serial_no: i32) -> AppResult<()>;
}
