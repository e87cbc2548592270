//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresAccountRepository` - Inserts accounts and returns them with their id

mod account_repository;

pub use account_repository::PostgresAccountRepository;
