use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CarStore;
use crate::error::{AppError, AppResult};
use crate::models::Car;

/// In-process stand-in for the Postgres table. The serial number behaves like
/// a primary key and listing orders by it, as the SQL query does.
#[derive(Debug, Default)]
pub struct MemoryCarStore {
    rows: RwLock<Vec<Car>>,
}

impl MemoryCarStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarStore for MemoryCarStore {
    async fn list(&self) -> AppResult<Vec<Car>> {
        let mut cars = self.rows.read().await.clone();
        cars.sort_by_key(|c| c.serial_no);
        Ok(cars)
    }

    async fn get(&self, serial_no: i32) -> AppResult<Car> {
        self.rows
            .read()
            .await
            .iter()
            .find(|c| c.serial_no == serial_no)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("Car with serial number {} not found", serial_no))
            })
    }

    async fn insert(&self, car: &Car) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|c| c.serial_no == car.serial_no) {
            return Err(AppError::Conflict(
                "Car with this serial number already exists".to_string(),
            ));
        }
        rows.push(car.clone());
        Ok(())
    }

    async fn update(&self, serial_no: i32, name: &str, price: f64) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        let car = rows
            .iter_mut()
            .find(|c| c.serial_no == serial_no)
            .ok_or_else(|| {
                AppError::NotFound(format!("Car with serial number {} not found", serial_no))
            })?;
        car.name = name.to_string();
        car.price = price;
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> AppResult<u64> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|c| c.name != name);
        match (before - rows.len()) as u64 {
            0 => Err(AppError::NotFound(format!("No car named '{}' found", name))),
            n => Ok(n),
        }
    }

    async fn delete_by_serial(&self, serial_no: i32) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|c| c.serial_no != serial_no);
        if rows.len() == before {
            return Err(AppError::NotFound(format!(
                "Car with serial number {} not found",
                serial_no
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(serial_no: i32, name: &str, price: f64) -> Car {
        Car {
            serial_no,
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn duplicate_serial_is_a_conflict() {
        let store = MemoryCarStore::new();
        store.insert(&car(1, "Civic", 1.0)).await.unwrap();
        let err = store.insert(&car(1, "Accord", 2.0)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.list().await.unwrap(), vec![car(1, "Civic", 1.0)]);
    }

    #[tokio::test]
    async fn update_leaves_serial_untouched() {
        let store = MemoryCarStore::new();
        store.insert(&car(3, "Golf", 1.0)).await.unwrap();
        store.update(3, "Polo", 2.0).await.unwrap();
        assert_eq!(store.get(3).await.unwrap(), car(3, "Polo", 2.0));
    }

    #[tokio::test]
    async fn delete_by_name_reports_count() {
        let store = MemoryCarStore::new();
        store.insert(&car(1, "Civic", 1.0)).await.unwrap();
        store.insert(&car(2, "Civic", 1.0)).await.unwrap();
        store.insert(&car(3, "Golf", 1.0)).await.unwrap();
        assert_eq!(store.delete_by_name("Civic").await.unwrap(), 2);
        assert!(matches!(
            store.delete_by_name("Civic").await,
            Err(AppError::NotFound(_))
        ));
    }
}
