//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod account;

pub use account::AddAccountHandler;
