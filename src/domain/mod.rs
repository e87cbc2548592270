//! Domain layer containing business types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `account` - Account records and the data that creates them

pub mod account;
pub mod foundation;
