//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the core and the outside world. Adapters implement these ports.
//!
//! ## Outbound Ports
//!
//! - `Encrypter` - One-way password hashing
//! - `EmailValidator` - Email syntax check
//! - `AddAccountRepository` - Account persistence
//!
//! ## Inbound Ports
//!
//! - `AddAccount` - Account creation use case, consumed by the controller

mod account_repository;
mod add_account;
mod email_validator;
mod encrypter;

pub use account_repository::AddAccountRepository;
pub use add_account::AddAccount;
pub use email_validator::EmailValidator;
pub use encrypter::Encrypter;
