//! Account application handlers.

mod add_account;

pub use add_account::AddAccountHandler;
