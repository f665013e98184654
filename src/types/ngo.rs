use crate::types::geo::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DBNgoCreate {
    pub name: String,
    pub description: String,
    pub address: String,
    pub website: String,
    pub location: Point,
}
