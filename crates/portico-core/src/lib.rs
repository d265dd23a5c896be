//! Core library for Portico: configuration and the auth-service client.

pub mod client;
pub mod config;
pub mod logging;
