pub mod config;
pub mod db;
pub mod fixture;
pub mod seed;
pub mod types;
pub mod utils;
