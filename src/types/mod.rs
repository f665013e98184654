pub mod aqi;
pub mod error;
pub mod event;
pub mod geo;
pub mod ngo;
pub mod plantation;
pub mod user;
