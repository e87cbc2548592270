//! Validation adapters.
//!
//! Provides the email syntax checker backing the `EmailValidator` port.

mod email_validator_adapter;

pub use email_validator_adapter::EmailValidatorAdapter;
