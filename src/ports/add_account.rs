//! AddAccount port - Inbound account creation use case.

use async_trait::async_trait;

use crate::domain::account::{Account, AddAccountCommand};
use crate::domain::foundation::DomainError;

/// Inbound port for account creation.
///
/// The signup controller depends on this trait rather than on the concrete
/// use case, so it can be exercised with test doubles.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create an account from validated signup input.
    async fn add(&self, command: AddAccountCommand) -> Result<Account, DomainError>;
}
