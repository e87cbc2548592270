//! Account records and the data that creates them.
//!
//! An account moves through three shapes:
//! - [`AddAccountCommand`] carries the validated signup input, plaintext
//!   password included, into the use case.
//! - [`NewAccount`] is the persistence payload; its password is already hashed.
//! - [`Account`] is what the repository returns once an id has been assigned.

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::AccountId;

/// Input for creating an account.
///
/// The password stays wrapped in a [`SecretString`] so it is redacted from
/// `Debug` output and cannot end up in logs by accident.
#[derive(Debug)]
pub struct AddAccountCommand {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

impl AddAccountCommand {
    /// Returns the plaintext password. Only the hashing step should call this.
    pub fn plaintext_password(&self) -> &str {
        self.password.expose_secret()
    }
}

/// Persistence payload handed to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    /// Hashed representation, never plaintext.
    pub password: String,
}

impl NewAccount {
    /// Attaches a store-assigned identifier, producing the persisted record.
    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

/// A persisted account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    /// Hashed password as stored.
    pub password: String,
}
