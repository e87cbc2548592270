//! PostgreSQL implementation of AddAccountRepository.

use crate::domain::account::{Account, NewAccount};
use crate::domain::foundation::{AccountId, DomainError, ErrorCode};
use crate::ports::AddAccountRepository;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the AddAccountRepository port.
///
/// Identifiers are v4 UUIDs generated here, so the row is complete before it
/// reaches the database.
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    /// Creates a new PostgresAccountRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an account.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    name: String,
    email: String,
    password: String,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: AccountId::from_uuid(row.id),
            name: row.name,
            email: row.email,
            password: row.password,
        }
    }
}

#[async_trait]
impl AddAccountRepository for PostgresAccountRepository {
    async fn add(&self, data: NewAccount) -> Result<Account, DomainError> {
        let row: AccountRow = sqlx::query_as(
            r#"
            INSERT INTO accounts (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to insert account: {}", e))
        })?;

        Ok(row.into())
    }
}
