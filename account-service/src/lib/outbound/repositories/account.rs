use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::UpdateAccountCommand;
use crate::domain::account::models::MAX_FIELD_LENGTH;
use crate::domain::account::ports::AccountRepository;

const EMAIL_UNIQUE_CONSTRAINT: &str = "accounts_email_key";

/// Postgres "string_data_right_truncation"
const STRING_TOO_LONG_CODE: &str = "22001";

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    full_name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            id: AccountId(row.id),
            full_name: row.full_name,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

/// Translate constraint failures on insert/update into domain errors.
fn map_write_error(err: sqlx::Error, email: Option<&str>) -> AccountError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) {
            return AccountError::DuplicateEmail(email.unwrap_or_default().to_string());
        }
        if db_err.code().as_deref() == Some(STRING_TOO_LONG_CODE) {
            return AccountError::StringTooLong {
                field: "full_name, email",
                max: MAX_FIELD_LENGTH,
            };
        }
    }
    AccountError::DatabaseError(err.to_string())
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (id, full_name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, full_name, email, password_hash, created_at
            "#,
        )
        .bind(account.id.0)
        .bind(&account.full_name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, Some(&account.email)))?;

        // Stored row, timestamps at database precision
        Ok(Account::from(row))
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, full_name, email, password_hash, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        Ok(row.map(Account::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, full_name, email, password_hash, created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        Ok(row.map(Account::from))
    }

    async fn update(
        &self,
        id: &AccountId,
        changes: &UpdateAccountCommand,
    ) -> Result<Account, AccountError> {
        // NULL parameters keep the stored column
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts
            SET full_name = COALESCE($2, full_name),
                email = COALESCE($3, email)
            WHERE id = $1
            RETURNING id, full_name, email, password_hash, created_at
            "#,
        )
        .bind(id.0)
        .bind(changes.full_name.as_deref())
        .bind(changes.email.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, changes.email.as_deref()))?;

        row.map(Account::from)
            .ok_or_else(|| AccountError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &AccountId) -> Result<(), AccountError> {
        let result = sqlx::query(
            r#"
            DELETE FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountError::NoRowsAffected(id.to_string()));
        }

        Ok(())
    }
}
