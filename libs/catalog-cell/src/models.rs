use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable treatment and the time windows it is offered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub slots: Vec<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
}
