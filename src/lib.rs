pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod processor;
pub mod response;
pub mod routes;
pub mod state;
pub mod telemetry;
