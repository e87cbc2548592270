//! Composition root: builds adapters from configuration and wires them into
//! the signup controller.

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::adapters::http::SignUpController;
use crate::adapters::{
    Argon2Encrypter, EmailValidatorAdapter, InMemoryAccountRepository, PostgresAccountRepository,
};
use crate::application::AddAccountHandler;
use crate::config::{AppConfig, DatabaseConfig};
use crate::domain::foundation::DomainError;
use crate::ports::AddAccountRepository;

/// Errors raised while assembling the application
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to build password hasher: {0}")]
    Hasher(#[from] DomainError),
}

/// Wired application.
pub struct App {
    pub controller: Arc<SignUpController>,
    /// Present when a database is configured; close it on shutdown.
    pub pool: Option<PgPool>,
}

/// Builds the controller and everything behind it.
pub async fn build(config: &AppConfig) -> Result<App, BootstrapError> {
    let (repository, pool) = match &config.database {
        Some(database) => {
            let pool = connect(database).await?;
            let repository: Arc<dyn AddAccountRepository> =
                Arc::new(PostgresAccountRepository::new(pool.clone()));
            (repository, Some(pool))
        }
        None => {
            tracing::warn!("no database configured, accounts are kept in memory");
            let repository: Arc<dyn AddAccountRepository> =
                Arc::new(InMemoryAccountRepository::new());
            (repository, None)
        }
    };

    let encrypter = Arc::new(Argon2Encrypter::from_config(&config.hashing)?);
    let add_account = Arc::new(AddAccountHandler::new(encrypter, repository));
    let controller = Arc::new(SignUpController::new(
        Arc::new(EmailValidatorAdapter::new()),
        add_account,
    ));

    Ok(App { controller, pool })
}

async fn connect(database: &DatabaseConfig) -> Result<PgPool, BootstrapError> {
    let pool = database.pool_options().connect(&database.url).await?;
    tracing::info!(
        max_connections = database.max_connections,
        "connected to PostgreSQL"
    );

    if database.run_migrations {
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("migrations applied");
    }

    Ok(pool)
}
