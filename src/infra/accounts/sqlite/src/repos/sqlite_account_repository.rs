// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dill::{component, interface};
use internal_error::{ErrorIntoInternal, InternalError, ResultIntoInternal};
use sqlx::SqlitePool;
use sqlx::error::DatabaseError;

use crate::domain::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct SqliteAccountRepository {
    pool: Arc<SqlitePool>,
}

#[component(pub)]
#[interface(dyn AccountRepository)]
#[interface(dyn PasswordHashRepository)]
impl SqliteAccountRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    fn convert_unique_constraint_violation(e: &dyn DatabaseError) -> CreateAccountErrorDuplicate {
        let sqlite_error_message = e.message();

        let account_field = if sqlite_error_message.contains("accounts.email") {
            CreateAccountDuplicateField::Email
        } else if sqlite_error_message.contains("accounts.id") {
            CreateAccountDuplicateField::Id
        } else {
            tracing::error!(
                error = ?e,
                error_msg = sqlite_error_message,
                "Unexpected SQLite error"
            );
            CreateAccountDuplicateField::Id
        };

        CreateAccountErrorDuplicate { account_field }
    }

    async fn fetch_account<'e, E>(
        executor: E,
        account_id: &AccountID,
    ) -> Result<Option<Account>, InternalError>
    where
        E: sqlx::SqliteExecutor<'e>,
    {
        let maybe_row = sqlx::query_as::<_, AccountRowModel>(
            r#"
            SELECT id, email, display_name, avatar_url, role, provider, vendor_verified,
                   vendor_info, created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(account_id.as_str())
        .fetch_optional(executor)
        .await
        .int_err()?;

        maybe_row.map(Account::try_from).transpose()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn create_account(&self, account: &Account) -> Result<(), CreateAccountError> {
        let vendor_info = serialize_vendor_info(account.vendor_info.as_ref())?;

        sqlx::query(
            r#"
            INSERT INTO accounts (id, email, display_name, avatar_url, role, provider,
                                  vendor_verified, vendor_info, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(account.id.as_str())
        .bind(&account.email)
        .bind(&account.display_name)
        .bind(&account.avatar_url)
        .bind(account.role.as_ref())
        .bind(account.provider.as_ref())
        .bind(account.vendor_verified)
        .bind(vendor_info)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&*self.pool)
        .await
        .map_err(|e: sqlx::Error| match e {
            sqlx::Error::Database(e) if e.is_unique_violation() => CreateAccountError::Duplicate(
                Self::convert_unique_constraint_violation(e.as_ref()),
            ),
            _ => CreateAccountError::Internal(e.int_err()),
        })?;

        Ok(())
    }

    async fn get_account_by_id(
        &self,
        account_id: &AccountID,
    ) -> Result<Account, GetAccountByIdError> {
        Self::fetch_account(&*self.pool, account_id)
            .await?
            .ok_or_else(|| {
                GetAccountByIdError::NotFound(AccountNotFoundByIdError {
                    account_id: account_id.clone(),
                })
            })
    }

    async fn find_account_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Account>, FindAccountByEmailError> {
        let maybe_row = sqlx::query_as::<_, AccountRowModel>(
            r#"
            SELECT id, email, display_name, avatar_url, role, provider, vendor_verified,
                   vendor_info, created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&*self.pool)
        .await
        .int_err()?;

        Ok(maybe_row.map(Account::try_from).transpose()?)
    }

    async fn update_account(
        &self,
        account_id: &AccountID,
        patch: &AccountSettingsPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Account, UpdateAccountError> {
        let mut tx = self.pool.begin().await.int_err()?;

        let Some(mut account) = Self::fetch_account(&mut *tx, account_id).await? else {
            return Err(UpdateAccountError::NotFound(AccountNotFoundByIdError {
                account_id: account_id.clone(),
            }));
        };

        patch.apply_to(&mut account);
        account.updated_at = updated_at;

        let vendor_info = serialize_vendor_info(account.vendor_info.as_ref())?;

        // Role, email and verification are not writable from here
        sqlx::query(
            r#"
            UPDATE accounts SET
                display_name = $2,
                avatar_url = $3,
                vendor_info = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(account.id.as_str())
        .bind(&account.display_name)
        .bind(&account.avatar_url)
        .bind(vendor_info)
        .bind(account.updated_at)
        .execute(&mut *tx)
        .await
        .int_err()?;

        tx.commit().await.int_err()?;

        Ok(account)
    }

    async fn delete_account(&self, account_id: &AccountID) -> Result<(), DeleteAccountError> {
        let mut tx = self.pool.begin().await.int_err()?;

        sqlx::query(
            r#"
            DELETE FROM accounts_passwords WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_str())
        .execute(&mut *tx)
        .await
        .int_err()?;

        let delete_result = sqlx::query(
            r#"
            DELETE FROM accounts WHERE id = $1
            "#,
        )
        .bind(account_id.as_str())
        .execute(&mut *tx)
        .await
        .int_err()?;

        if delete_result.rows_affected() == 0 {
            return Err(DeleteAccountError::NotFound(AccountNotFoundByIdError {
                account_id: account_id.clone(),
            }));
        }

        tx.commit().await.int_err()?;

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl PasswordHashRepository for SqliteAccountRepository {
    async fn save_password_hash(
        &self,
        account_id: &AccountID,
        password_hash: String,
    ) -> Result<(), SavePasswordHashError> {
        sqlx::query(
            r#"
            INSERT INTO accounts_passwords (account_id, password_hash)
                VALUES ($1, $2)
                ON CONFLICT (account_id) DO UPDATE SET password_hash = excluded.password_hash
            "#,
        )
        .bind(account_id.as_str())
        .bind(password_hash)
        .execute(&*self.pool)
        .await
        .map_err(|e: sqlx::Error| match e {
            sqlx::Error::Database(e) if e.is_foreign_key_violation() => {
                SavePasswordHashError::AccountNotFound {
                    account_id: account_id.clone(),
                }
            }
            _ => SavePasswordHashError::Internal(e.int_err()),
        })?;

        Ok(())
    }

    async fn find_password_hash_by_account_id(
        &self,
        account_id: &AccountID,
    ) -> Result<Option<String>, FindPasswordHashError> {
        let maybe_password_hash = sqlx::query_scalar::<_, String>(
            r#"
            SELECT password_hash FROM accounts_passwords WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_str())
        .fetch_optional(&*self.pool)
        .await
        .int_err()?;

        Ok(maybe_password_hash)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, sqlx::FromRow)]
struct AccountRowModel {
    id: String,
    email: String,
    display_name: String,
    avatar_url: Option<String>,
    role: String,
    provider: String,
    vendor_verified: bool,
    /// JSON document, kept schemaless like the rest of the vendor block
    vendor_info: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRowModel> for Account {
    type Error = InternalError;

    fn try_from(row: AccountRowModel) -> Result<Self, Self::Error> {
        let vendor_info = row
            .vendor_info
            .as_deref()
            .map(serde_json::from_str::<VendorInfo>)
            .transpose()
            .int_err()?;

        Ok(Account {
            id: AccountID::new(row.id),
            email: row.email,
            display_name: row.display_name,
            avatar_url: row.avatar_url,
            role: AccountRole::from_str(&row.role).int_err()?,
            provider: AccountProvider::from_str(&row.provider).int_err()?,
            vendor_verified: row.vendor_verified,
            vendor_info,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn serialize_vendor_info(vendor_info: Option<&VendorInfo>) -> Result<Option<String>, InternalError> {
    vendor_info.map(serde_json::to_string).transpose().int_err()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
