pub mod api;
pub mod auth;
pub mod configuration;
pub mod constant;
pub mod error;
pub mod request;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
pub mod views;
