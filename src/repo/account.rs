use crate::models::account::Account;
use crate::models::types::Timestamp;
use crate::repo::error::RepoResult;

/// Keyed account storage. Accounts are keyed by their exact username.
#[async_trait::async_trait]
pub trait AccountRepo: Send + Sync {
    /// Assigns the next id to `account` and stores it under its username,
    /// replacing whatever was stored there. Fails once no ids are left.
    async fn save(&self, account: Account) -> RepoResult<Account>;
    async fn find_by_name(&self, username: &str) -> Option<Account>;
    /// Removes the account stored under `account.username`, if any.
    async fn delete(&self, account: &Account);
    /// Moves the stored `last_login` forward to `at`. Returns the updated account.
    async fn update_last_login(&self, username: &str, at: Timestamp) -> Option<Account>;
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
