use crate::types::geo::Point;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DBAqiCreate {
    pub aqi: i32,
    pub location_name: String,
    pub location: Point,
    pub recorded_at: DateTime<Utc>,
}
