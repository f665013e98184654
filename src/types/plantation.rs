use crate::types::geo::{Point, Polygon};
use chrono::NaiveDate;
use entity::plantation_event::PlantationStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DBPlantationCreate {
    pub title: String,
    pub description: String,
    pub organizer: String,
    pub date: NaiveDate,
    pub location_name: String,
    pub boundary: Polygon,
    pub centroid: Point,
    pub trees_goal: i32,
    #[serde(default)]
    pub trees_planted: i32,
    pub status: PlantationStatus,
}
