use crate::error::{AccountError, AccountResult};
use crate::models::account::Account;
use crate::models::types::Timestamp;
use crate::repo::AccountRepo;
use crate::services::encoding;
use chrono::Utc;
use std::sync::Arc;

/// Account lifecycle rules on top of an [`AccountRepo`].
pub struct AccountService {
    repo: Arc<dyn AccountRepo>,
}

impl AccountService {
    pub fn new(repo: Arc<dyn AccountRepo>) -> Self {
        Self { repo }
    }

    /// Creates a new account with `last_login` set to now.
    ///
    /// The existence check and the save are two separate repository calls,
    /// so two concurrent creates for the same username can both succeed and
    /// the later save wins.
    pub async fn create_account(&self, username: &str, password: &str, email: &str) -> AccountResult<Account> {
        if self.repo.find_by_name(username).await.is_some() {
            tracing::info!(username = %username, "username already exists");
            return Err(AccountError::DuplicateUser);
        }

        let account = Account::new(username, encoding::encode(password), email, Utc::now());
        let saved = self.repo.save(account).await?;

        tracing::info!(username = %username, id = %saved.id, "account created");
        Ok(saved)
    }

    /// Confirms the password and refreshes `last_login`.
    pub async fn update_account(&self, username: &str, password: &str) -> AccountResult<Account> {
        let account = self.get_account(username).await?;

        let matches = match encoding::decode(&account.encrypted_password) {
            Ok(stored) => stored == password,
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "stored password cannot be decoded");
                false
            }
        };

        if !matches {
            tracing::info!(username = %username, "account update failed: invalid password");
            return Err(AccountError::InvalidCredentials);
        }

        // The account may have been deleted since the lookup above
        let updated = self
            .repo
            .update_last_login(username, Utc::now())
            .await
            .ok_or(AccountError::UnknownUser)?;

        tracing::info!(username = %username, last_login = %updated.last_login, "account updated");
        Ok(updated)
    }

    pub async fn delete_account(&self, username: &str) -> AccountResult<()> {
        let account = self.get_account(username).await?;
        self.repo.delete(&account).await;

        tracing::info!(username = %username, "account deleted");
        Ok(())
    }

    /// Whether the last login is strictly after `since`.
    pub async fn has_logged_in_since(&self, username: &str, since: Timestamp) -> AccountResult<bool> {
        let account = self.get_account(username).await?;
        Ok(account.has_logged_in_since(since))
    }

    /// Looks up an account, failing with [`AccountError::UnknownUser`] if it
    /// does not exist.
    pub async fn get_account(&self, username: &str) -> AccountResult<Account> {
        match self.repo.find_by_name(username).await {
            Some(account) => Ok(account),
            None => {
                tracing::info!(username = %username, "account not found");
                Err(AccountError::UnknownUser)
            }
        }
    }
}
