pub mod app;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod payment;
pub mod routes;
pub mod schema;
pub mod services;
pub mod state;
pub mod store;
