use serde::{Deserialize, Serialize};

/// One inventory row. Serialized with the `car_` prefixed names used on the wire and in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Car {
    #[serde(rename = "car_serial_no")]
    #[sqlx(rename = "car_serial_no")]
    pub serial_no: i32,
    #[serde(rename = "car_name")]
    #[sqlx(rename = "car_name")]
    pub name: String,
    #[serde(rename = "car_price")]
    #[sqlx(rename = "car_price")]
    pub price: f64,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of create and update requests. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CarPayload {
    #[serde(rename = "car_serial_no", alias = "serial_no")]
    pub serial_no: i32,
    #[serde(rename = "car_name", alias = "name")]
    pub name: String,
    #[serde(rename = "car_price", alias = "price")]
    pub price: f64,
}

impl CarPayload {
    pub fn into_car(self) -> Car {
        Car {
            serial_no: self.serial_no,
            name: self.name,
            price: self.price,
        }
    }
}

// ── Response envelopes ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ItemsEnvelope {
    pub items: Vec<Car>,
}

#[derive(Debug, Serialize)]
pub struct ItemEnvelope {
    pub item: Car,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<u64>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            deleted: None,
        }
    }

    pub fn with_deleted(mut self, count: u64) -> Self {
        self.deleted = Some(count);
        self
    }
}
