//! In-memory adapters.
//!
//! Useful for testing and for running without a database.

mod in_memory_account_repository;

pub use in_memory_account_repository::InMemoryAccountRepository;
