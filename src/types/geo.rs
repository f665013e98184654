use crate::types::error::SeedError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// lon/lat on WGS 84
pub const SRID: i32 = 4326;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    lon: f64,
    lat: f64,
}

impl Point {
    pub fn new(lon: f64, lat: f64) -> Result<Self, SeedError> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(SeedError::Geometry(format!("non-finite coordinate ({lon}, {lat})")));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(SeedError::Geometry(format!("longitude {lon} out of range")));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(SeedError::Geometry(format!("latitude {lat} out of range")));
        }
        Ok(Self { lon, lat })
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// `SRID=4326;POINT(lon lat)`
    pub fn to_ewkt(&self) -> String {
        format!("SRID={};POINT({} {})", SRID, self.lon, self.lat)
    }
}

impl TryFrom<[f64; 2]> for Point {
    type Error = SeedError;

    fn try_from([lon, lat]: [f64; 2]) -> Result<Self, Self::Error> {
        Point::new(lon, lat)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.lon, p.lat]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn contains(&self, p: &Point) -> bool {
        (self.min_lon..=self.max_lon).contains(&p.lon) && (self.min_lat..=self.max_lat).contains(&p.lat)
    }
}

/// A single closed exterior ring. No holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    ring: Vec<Point>,
}

impl Polygon {
    /// Minimum number of distinct vertices in a ring.
    pub const MIN_VERTICES: usize = 4;

    /// Builds a polygon from its ring, appending the first point if the ring
    /// is left open.
    pub fn from_ring(mut ring: Vec<Point>) -> Result<Self, SeedError> {
        let (first, last) = match (ring.first(), ring.last()) {
            (Some(f), Some(l)) => (*f, *l),
            _ => return Err(SeedError::Geometry("empty ring".into())),
        };
        if first != last {
            ring.push(first);
        }

        let distinct = ring[..ring.len() - 1]
            .iter()
            .enumerate()
            .filter(|(i, p)| !ring[..*i].contains(*p))
            .count();
        if distinct < Self::MIN_VERTICES {
            return Err(SeedError::Geometry(format!(
                "ring has {distinct} distinct vertices, need at least {}",
                Self::MIN_VERTICES
            )));
        }

        Ok(Self { ring })
    }

    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    pub fn is_closed(&self) -> bool {
        self.ring.first() == self.ring.last()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox {
            min_lon: f64::INFINITY,
            min_lat: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
            max_lat: f64::NEG_INFINITY,
        };
        for p in &self.ring {
            bb.min_lon = bb.min_lon.min(p.lon);
            bb.min_lat = bb.min_lat.min(p.lat);
            bb.max_lon = bb.max_lon.max(p.lon);
            bb.max_lat = bb.max_lat.max(p.lat);
        }
        bb
    }

    pub fn contains_in_bounds(&self, p: &Point) -> bool {
        self.bounding_box().contains(p)
    }

    /// `SRID=4326;POLYGON((x1 y1, x2 y2, ..., x1 y1))`
    pub fn to_ewkt(&self) -> String {
        format!("SRID={};POLYGON(({}))", SRID, self)
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.ring.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", p.lon, p.lat)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = SeedError;

    fn try_from(ring: Vec<Point>) -> Result<Self, Self::Error> {
        Polygon::from_ring(ring)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(p: Polygon) -> Self {
        p.ring
    }
}
