pub mod aqi;
pub mod event;
pub mod memory;
pub mod ngo;
pub mod plantation;
pub mod postgres_service;
pub mod store;
pub mod user;

use sea_orm::sea_query::{Expr, SimpleExpr};

/// `gen_random_uuid()` so ids are assigned by the database.
pub(crate) fn server_id() -> SimpleExpr {
    Expr::cust("gen_random_uuid()")
}

/// Geometry literal from extended WKT (`SRID=4326;...`), bound as a parameter.
pub(crate) fn geometry(ewkt: String) -> SimpleExpr {
    Expr::cust_with_values("ST_GeomFromEWKT($1)", [ewkt])
}
