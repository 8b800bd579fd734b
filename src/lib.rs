pub mod app_state;
pub mod config;
pub mod errors;
pub mod generation;
pub mod handlers;
pub mod models;
pub mod services;
