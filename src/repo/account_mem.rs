use crate::models::account::Account;
use crate::models::types::{AccountId, Timestamp};
use crate::repo::account::AccountRepo;
use crate::repo::error::{RepoError, RepoResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;

pub const DEFAULT_FIRST_ID: AccountId = AccountId(1000);

/// Process-local account store. The map and the id counter sit behind one
/// lock, so every single repository call is atomic.
pub struct MemoryAccountRepository {
    inner: Mutex<Inner>,
}

struct Inner {
    accounts: BTreeMap<String, Account>,
    /// `None` once `AccountId(u64::MAX)` has been handed out
    next_id: Option<AccountId>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::with_first_id(DEFAULT_FIRST_ID)
    }

    pub fn with_first_id(first_id: AccountId) -> Self {
        Self {
            inner: Mutex::new(Inner {
                accounts: BTreeMap::new(),
                next_id: Some(first_id),
            }),
        }
    }
}

impl Default for MemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepo for MemoryAccountRepository {
    async fn save(&self, mut account: Account) -> RepoResult<Account> {
        let mut inner = self.inner.lock();

        // Ids are never handed out twice, even after a delete
        let Some(id) = inner.next_id else {
            tracing::error!(username = %account.username, "account ids exhausted");
            return Err(RepoError::IdsExhausted);
        };
        account.id = id;
        inner.next_id = id.next();
        inner.accounts.insert(account.username.clone(), account.clone());

        tracing::debug!(username = %account.username, id = %account.id, "account saved");
        Ok(account)
    }

    async fn find_by_name(&self, username: &str) -> Option<Account> {
        let account = self.inner.lock().accounts.get(username).cloned();
        tracing::debug!(username = %username, found = account.is_some(), "account lookup");
        account
    }

    async fn delete(&self, account: &Account) {
        let removed = self.inner.lock().accounts.remove(&account.username);
        tracing::debug!(username = %account.username, removed = removed.is_some(), "account delete");
    }

    async fn update_last_login(&self, username: &str, at: Timestamp) -> Option<Account> {
        let mut inner = self.inner.lock();
        let account = inner.accounts.get_mut(username)?;
        account.touch_last_login(at);

        tracing::debug!(username = %username, last_login = %account.last_login, "last login updated");
        Some(account.clone())
    }

    async fn len(&self) -> usize {
        self.inner.lock().accounts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn alex() -> Account {
        Account::new("Alex", b"secretpass".to_vec(), "alex@gmail.com", Utc::now())
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = MemoryAccountRepository::new();

        let first = repo.save(alex()).await.unwrap();
        let second = repo
            .save(Account::new("Bo", vec![], "bo@example.com", Utc::now()))
            .await
            .unwrap();

        assert_eq!(first.id, AccountId(1000));
        assert_eq!(second.id, AccountId(1001));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn find_is_exact_and_case_sensitive() {
        let repo = MemoryAccountRepository::new();
        let saved = repo.save(alex()).await.unwrap();

        assert_eq!(repo.find_by_name("Alex").await, Some(saved));
        assert_eq!(repo.find_by_name("alex").await, None);
        assert_eq!(repo.find_by_name("Ale").await, None);
        assert_eq!(repo.find_by_name("Bob").await, None);
    }

    #[tokio::test]
    async fn save_overwrites_by_username() {
        let repo = MemoryAccountRepository::new();
        repo.save(alex()).await.unwrap();

        let mut replacement = alex();
        replacement.email = "other@example.com".into();
        let replaced = repo.save(replacement).await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert_eq!(replaced.id, AccountId(1001));
        assert_eq!(repo.find_by_name("Alex").await.unwrap().email, "other@example.com");
    }

    #[tokio::test]
    async fn delete_removes_and_ignores_missing() {
        let repo = MemoryAccountRepository::new();
        let saved = repo.save(alex()).await.unwrap();

        repo.delete(&saved).await;
        assert!(repo.find_by_name("Alex").await.is_none());
        assert!(repo.is_empty().await);

        // second delete is a no-op
        repo.delete(&saved).await;
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = MemoryAccountRepository::with_first_id(AccountId(7));
        let saved = repo.save(alex()).await.unwrap();
        repo.delete(&saved).await;

        let again = repo.save(alex()).await.unwrap();
        assert_eq!(saved.id, AccountId(7));
        assert_eq!(again.id, AccountId(8));
    }

    #[tokio::test]
    async fn last_id_is_handed_out_then_save_fails() {
        let repo = MemoryAccountRepository::with_first_id(AccountId(u64::MAX));

        let last = repo.save(alex()).await.unwrap();
        assert_eq!(last.id, AccountId(u64::MAX));

        let err = repo
            .save(Account::new("Bo", vec![], "bo@example.com", Utc::now()))
            .await
            .unwrap_err();
        assert_eq!(err, RepoError::IdsExhausted);
        assert!(repo.find_by_name("Bo").await.is_none());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn update_last_login_moves_forward_only() {
        let repo = MemoryAccountRepository::new();
        let saved = repo.save(alex()).await.unwrap();

        let later = saved.last_login + Duration::seconds(5);
        let updated = repo.update_last_login("Alex", later).await.unwrap();
        assert_eq!(updated.last_login, later);
        assert_eq!(updated.id, saved.id);

        let earlier = saved.last_login - Duration::seconds(5);
        let unchanged = repo.update_last_login("Alex", earlier).await.unwrap();
        assert_eq!(unchanged.last_login, later);

        assert!(repo.update_last_login("Nobody", later).await.is_none());
    }
}
