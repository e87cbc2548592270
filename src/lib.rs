//! Signup API - account registration behind a layered architecture.
//!
//! A request flows HTTP adapter -> [`adapters::http::SignUpController`] ->
//! [`application::AddAccountHandler`] -> ports. The controller owns input
//! validation and error mapping, the use case owns hashing before persistence,
//! and the ports keep both independent of concrete infrastructure.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
