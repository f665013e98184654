use crate::types::geo::Point;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Community event as listed in a fixture; the host is named by email.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSeed {
    pub title: String,
    pub description: String,
    pub organizer: String,
    pub starts_at: DateTime<Utc>,
    pub location_name: String,
    pub location: Point,
    #[serde(default)]
    pub participants: i32,
    pub max_participants: i32,
    pub host_email: String,
}

#[derive(Debug, Clone)]
pub struct DBEventCreate {
    pub title: String,
    pub description: String,
    pub organizer: String,
    pub starts_at: DateTime<Utc>,
    pub location_name: String,
    pub location: Point,
    pub participants: i32,
    pub max_participants: i32,
    pub host_id: Uuid,
}

impl EventSeed {
    pub fn with_host(&self, host_id: Uuid) -> DBEventCreate {
        DBEventCreate {
            title: self.title.clone(),
            description: self.description.clone(),
            organizer: self.organizer.clone(),
            starts_at: self.starts_at,
            location_name: self.location_name.clone(),
            location: self.location,
            participants: self.participants,
            max_participants: self.max_participants,
            host_id,
        }
    }
}
