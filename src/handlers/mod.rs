// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod auth;
pub mod health;
pub mod photos;

pub use health::config as health_config;
pub use photos::config as photos_config;
