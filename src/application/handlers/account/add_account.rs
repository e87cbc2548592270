//! AddAccount - Command handler for creating accounts.
//!
//! Guarantees that every persisted account stores a hashed password: the
//! plaintext from the command is handed to the [`Encrypter`] and then dropped.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::{Account, AddAccountCommand, NewAccount};
use crate::domain::foundation::DomainError;
use crate::ports::{AddAccount, AddAccountRepository, Encrypter};

/// Handler for creating accounts.
pub struct AddAccountHandler {
    encrypter: Arc<dyn Encrypter>,
    repository: Arc<dyn AddAccountRepository>,
}

impl AddAccountHandler {
    pub fn new(encrypter: Arc<dyn Encrypter>, repository: Arc<dyn AddAccountRepository>) -> Self {
        Self {
            encrypter,
            repository,
        }
    }
}

#[async_trait]
impl AddAccount for AddAccountHandler {
    async fn add(&self, command: AddAccountCommand) -> Result<Account, DomainError> {
        // 1. Hash the password
        let hashed_password = self.encrypter.encrypt(command.plaintext_password()).await?;

        // 2. Build the persistence payload, plaintext stays behind
        let AddAccountCommand { name, email, .. } = command;
        let payload = NewAccount {
            name,
            email,
            password: hashed_password,
        };

        // 3. Persist and hand back the stored record
        let account = self.repository.add(payload).await?;

        tracing::info!(account_id = %account.id, "account created");

        Ok(account)
    }
}
