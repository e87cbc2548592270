//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the core to external systems:
//! - `crypto` - Argon2id password hashing (`Encrypter`)
//! - `validation` - Email syntax checking (`EmailValidator`)
//! - `postgres` - PostgreSQL persistence (`AddAccountRepository`)
//! - `memory` - In-process persistence for tests and database-less runs
//! - `http` - REST boundary (controller, routes, middleware)

pub mod crypto;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod validation;

pub use crypto::Argon2Encrypter;
pub use memory::InMemoryAccountRepository;
pub use postgres::PostgresAccountRepository;
pub use validation::EmailValidatorAdapter;
