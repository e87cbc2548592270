//! In-Memory Account Repository Adapter
//!
//! Stores accounts in a process-local map. Contents are lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{Account, NewAccount};
use crate::domain::foundation::{AccountId, DomainError};
use crate::ports::AddAccountRepository;

/// In-memory storage for accounts
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    /// Look up a stored account (useful for tests)
    pub async fn get(&self, id: &AccountId) -> Option<Account> {
        self.accounts.read().await.get(id).cloned()
    }
}

#[async_trait]
impl AddAccountRepository for InMemoryAccountRepository {
    async fn add(&self, data: NewAccount) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        let mut id = AccountId::generate();
        while accounts.contains_key(&id) {
            id = AccountId::generate();
        }

        let account = data.into_account(id.clone());
        accounts.insert(id, account.clone());
        Ok(account)
    }
}
