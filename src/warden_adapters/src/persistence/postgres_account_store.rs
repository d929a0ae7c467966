use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, Pool, Postgres};
use uuid::Uuid;
use warden_core::{
    Account, AccountName, AccountStore, AccountStoreError, Email, HashedPassword, NewAccount, Role,
};

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: sqlx::PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresAccountStore { pool }
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: Uuid,
    email: String,
    name: String,
    password_hash: String,
    role: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountStoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let email = Email::try_from(Secret::from(row.email))
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        let name = AccountName::parse(&row.name)
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        Ok(Account::new(
            row.id,
            email,
            name,
            HashedPassword::new(Secret::from(row.password_hash)),
            role,
        ))
    }
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn create(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let id = Uuid::new_v4();

        let query = sqlx::query(
            r#"
                INSERT INTO accounts (id, email, name, password_hash, role)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(account.email.as_str())
        .bind(account.name.as_str())
        .bind(account.password_hash.as_ref().expose_secret())
        .bind(account.role.as_str());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    let field = db_err
                        .constraint()
                        .map(field_from_constraint)
                        .unwrap_or("email");
                    let value = match field {
                        "name" => account.name.as_str(),
                        _ => account.email.as_str(),
                    };
                    return AccountStoreError::DuplicateKey {
                        field: field.to_string(),
                        value: value.to_string(),
                    };
                }
            }
            AccountStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(account.into_account(id))
    }

    #[tracing::instrument(name = "Retrieving account from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        let query = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, email, name, password_hash, role
                FROM accounts
                WHERE email = $1
            "#,
        )
        .bind(email.as_str());

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(AccountStoreError::NotFound);
        };

        Account::try_from(row)
    }
}

// Unique constraints follow the Postgres default `<table>_<column>_key`
fn field_from_constraint(constraint: &str) -> &str {
    constraint
        .strip_prefix("accounts_")
        .and_then(|rest| rest.strip_suffix("_key"))
        .unwrap_or(constraint)
}
