use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::errors::DispatchError;
use crate::domain::account::jobs::VerificationEmailJob;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::CreateAccountCommand;
use crate::domain::account::models::UpdateAccountCommand;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Create a new account.
    ///
    /// # Errors
    /// * `InvalidArgument` - One or more fields are malformed
    /// * `StringTooLong` - Full name or email exceeds 255 characters
    /// * `DuplicateEmail` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_account(&self, command: CreateAccountCommand) -> Result<Account, AccountError>;

    /// Retrieve account by unique identifier.
    ///
    /// # Errors
    /// * `InvalidArgument` - ID is the nil UUID
    /// * `NotFound` - Account does not exist
    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError>;

    /// Retrieve account by email address.
    ///
    /// # Errors
    /// * `InvalidArgument` - Email is empty
    /// * `NotFound` - No account with this email
    async fn get_account_by_email(&self, email: &str) -> Result<Account, AccountError>;

    /// Update full name and/or email of an existing account.
    ///
    /// # Errors
    /// * `InvalidArgument` - ID is nil, no field given, or a field is malformed
    /// * `StringTooLong` - A field exceeds 255 characters
    /// * `NotFound` - Account does not exist
    /// * `DuplicateEmail` - New email is already registered
    async fn update_account(
        &self,
        id: &AccountId,
        command: UpdateAccountCommand,
    ) -> Result<Account, AccountError>;

    /// Permanently delete an account.
    ///
    /// # Errors
    /// * `InvalidArgument` - ID is the nil UUID
    /// * `NoRowsAffected` - Account does not exist
    async fn delete_account(&self, id: &AccountId) -> Result<(), AccountError>;
}

/// Persistence operations for the account aggregate.
///
/// Implementations must enforce email uniqueness atomically: of two concurrent
/// `create` calls with the same email exactly one succeeds.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `StringTooLong` - Storage rejected an over-long field
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve account by identifier (None if not found).
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;

    /// Retrieve account by email address (None if not found).
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;

    /// Apply the present fields of `changes` in a single statement.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DuplicateEmail` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        id: &AccountId,
        changes: &UpdateAccountCommand,
    ) -> Result<Account, AccountError>;

    /// Remove account from storage.
    ///
    /// # Errors
    /// * `NoRowsAffected` - Nothing was deleted
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &AccountId) -> Result<(), AccountError>;
}

/// Outbound notifications triggered by account changes.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync + 'static {
    /// Enqueue a verification email for a freshly created account.
    async fn send_verification_email(&self, job: &VerificationEmailJob)
        -> Result<(), DispatchError>;
}
