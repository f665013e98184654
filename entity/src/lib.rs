pub mod aqi_record;
pub mod event;
pub mod ngo;
pub mod plantation_event;
pub mod user;

/*
 Geometry columns (ngos.location, events.location, plantation_events.boundary,
 plantation_events.centroid, aqi_records.location) are PostGIS types in SRID 4326.
 sea-orm has no native type for them, so they are left out of the models below
 and written/read through raw expressions (ST_GeomFromEWKT / ST_AsText).
 */
