//! AddAccountRepository port for account persistence.

use async_trait::async_trait;

use crate::domain::account::{Account, NewAccount};
use crate::domain::foundation::DomainError;

/// Repository for persisting new accounts.
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    /// Insert `data` and return it with a store-assigned unique id.
    ///
    /// # Errors
    /// Returns `DomainError` on store failures (duplicate key, lost
    /// connection, ...). Callers propagate it unchanged.
    async fn add(&self, data: NewAccount) -> Result<Account, DomainError>;
}
