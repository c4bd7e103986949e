use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::SubsecRound;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::jobs::VerificationEmailJob;
use crate::domain::account::models::ensure_max_length;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::CreateAccountCommand;
use crate::domain::account::models::UpdateAccountCommand;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::account::ports::NotificationDispatcher;
use crate::domain::validation::ValidationErrors;

/// Domain service implementation for account operations.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct AccountService<AR, ND>
where
    AR: AccountRepository,
    ND: NotificationDispatcher,
{
    repository: Arc<AR>,
    dispatcher: Arc<ND>,
    authenticator: Arc<Authenticator>,
}

impl<AR, ND> AccountService<AR, ND>
where
    AR: AccountRepository,
    ND: NotificationDispatcher,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `dispatcher` - Notification dispatch implementation
    /// * `authenticator` - Shared password hasher and token maker
    pub fn new(repository: Arc<AR>, dispatcher: Arc<ND>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            dispatcher,
            authenticator,
        }
    }

    /// Hash on the blocking pool so Argon2 does not stall the async workers.
    async fn hash_password(&self, password: String) -> Result<String, AccountError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| AccountError::Unknown(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| AccountError::Unknown(format!("Password hashing failed: {}", e)))
    }

    /// Fire-and-forget: the outcome never reaches the caller.
    fn dispatch_verification_email(&self, account: &Account) {
        let dispatcher = Arc::clone(&self.dispatcher);
        let job = VerificationEmailJob::new(account.email.as_str());
        let account_id = account.id;

        tokio::spawn(async move {
            if let Err(e) = dispatcher.send_verification_email(&job).await {
                tracing::error!(
                    account_id = %account_id,
                    job_id = %job.job_id,
                    error = %e,
                    "Failed to dispatch verification email"
                );
            }
        });
    }
}

fn ensure_not_nil(id: &AccountId) -> Result<(), AccountError> {
    if id.is_nil() {
        return Err(ValidationErrors::single("id", "can not be nil").into());
    }
    Ok(())
}

#[async_trait]
impl<AR, ND> AccountServicePort for AccountService<AR, ND>
where
    AR: AccountRepository,
    ND: NotificationDispatcher,
{
    async fn create_account(&self, command: CreateAccountCommand) -> Result<Account, AccountError> {
        command.validate()?;
        ensure_max_length("full_name", &command.full_name)?;
        ensure_max_length("email", &command.email)?;

        let password_hash = self.hash_password(command.password).await?;

        let account = Account {
            id: AccountId::new(),
            full_name: command.full_name,
            email: command.email,
            password_hash,
            // Postgres keeps microseconds
            created_at: Utc::now().trunc_subsecs(6),
        };

        let created_account = self.repository.create(account).await?;
        tracing::info!(account_id = %created_account.id, "Account created");

        self.dispatch_verification_email(&created_account);

        Ok(created_account)
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError> {
        ensure_not_nil(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AccountError::NotFound(id.to_string()))
    }

    async fn get_account_by_email(&self, email: &str) -> Result<Account, AccountError> {
        if email.is_empty() {
            return Err(ValidationErrors::single("email", "can not be empty").into());
        }

        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AccountError::NotFound(email.to_string()))
    }

    async fn update_account(
        &self,
        id: &AccountId,
        command: UpdateAccountCommand,
    ) -> Result<Account, AccountError> {
        ensure_not_nil(id)?;
        command.validate()?;

        if let Some(full_name) = &command.full_name {
            ensure_max_length("full_name", full_name)?;
        }
        if let Some(email) = &command.email {
            ensure_max_length("email", email)?;
        }

        let updated_account = self.repository.update(id, &command).await?;
        tracing::info!(account_id = %updated_account.id, "Account updated");

        Ok(updated_account)
    }

    async fn delete_account(&self, id: &AccountId) -> Result<(), AccountError> {
        ensure_not_nil(id)?;

        self.repository.delete(id).await?;
        tracing::info!(account_id = %id, "Account deleted");

        Ok(())
    }
}
