// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use dill::*;

use crate::domain::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryAccountRepository {
    state: Arc<Mutex<State>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    accounts_by_id: HashMap<AccountID, Account>,
    account_id_by_email: HashMap<String, AccountID>,
    password_hash_by_account_id: HashMap<AccountID, String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn AccountRepository)]
#[interface(dyn PasswordHashRepository)]
#[scope(Singleton)]
impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create_account(&self, account: &Account) -> Result<(), CreateAccountError> {
        let mut guard = self.state.lock().unwrap();
        if guard.accounts_by_id.contains_key(&account.id) {
            return Err(CreateAccountError::Duplicate(CreateAccountErrorDuplicate {
                account_field: CreateAccountDuplicateField::Id,
            }));
        }
        // Emails are compared exactly as stored
        if guard.account_id_by_email.contains_key(&account.email) {
            return Err(CreateAccountError::Duplicate(CreateAccountErrorDuplicate {
                account_field: CreateAccountDuplicateField::Email,
            }));
        }

        guard
            .account_id_by_email
            .insert(account.email.clone(), account.id.clone());
        guard
            .accounts_by_id
            .insert(account.id.clone(), account.clone());

        Ok(())
    }

    async fn get_account_by_id(
        &self,
        account_id: &AccountID,
    ) -> Result<Account, GetAccountByIdError> {
        let guard = self.state.lock().unwrap();
        if let Some(account) = guard.accounts_by_id.get(account_id) {
            Ok(account.clone())
        } else {
            Err(GetAccountByIdError::NotFound(AccountNotFoundByIdError {
                account_id: account_id.clone(),
            }))
        }
    }

    async fn find_account_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Account>, FindAccountByEmailError> {
        let guard = self.state.lock().unwrap();
        let maybe_account = guard
            .account_id_by_email
            .get(email)
            .and_then(|account_id| guard.accounts_by_id.get(account_id));
        Ok(maybe_account.cloned())
    }

    async fn update_account(
        &self,
        account_id: &AccountID,
        patch: &AccountSettingsPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Account, UpdateAccountError> {
        let mut guard = self.state.lock().unwrap();
        let Some(account) = guard.accounts_by_id.get_mut(account_id) else {
            return Err(UpdateAccountError::NotFound(AccountNotFoundByIdError {
                account_id: account_id.clone(),
            }));
        };

        patch.apply_to(account);
        account.updated_at = updated_at;

        Ok(account.clone())
    }

    async fn delete_account(&self, account_id: &AccountID) -> Result<(), DeleteAccountError> {
        let mut guard = self.state.lock().unwrap();
        let Some(account) = guard.accounts_by_id.remove(account_id) else {
            return Err(DeleteAccountError::NotFound(AccountNotFoundByIdError {
                account_id: account_id.clone(),
            }));
        };

        guard.account_id_by_email.remove(&account.email);
        guard.password_hash_by_account_id.remove(account_id);

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl PasswordHashRepository for InMemoryAccountRepository {
    async fn save_password_hash(
        &self,
        account_id: &AccountID,
        password_hash: String,
    ) -> Result<(), SavePasswordHashError> {
        let mut guard = self.state.lock().unwrap();
        if !guard.accounts_by_id.contains_key(account_id) {
            return Err(SavePasswordHashError::AccountNotFound {
                account_id: account_id.clone(),
            });
        }

        guard
            .password_hash_by_account_id
            .insert(account_id.clone(), password_hash);

        Ok(())
    }

    async fn find_password_hash_by_account_id(
        &self,
        account_id: &AccountID,
    ) -> Result<Option<String>, FindPasswordHashError> {
        let guard = self.state.lock().unwrap();
        Ok(guard.password_hash_by_account_id.get(account_id).cloned())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
