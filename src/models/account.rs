use crate::models::types::{AccountId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Account ID, assigned by the repository on save
    pub id: AccountId,
    /// Username (distinct, case-sensitive)
    pub username: String,
    /// Password passed through the reversible encoding (not a hash)
    pub encrypted_password: Vec<u8>,
    /// Email address registered to the account
    pub email: String,
    /// Last login timestamp, initially the creation time
    pub last_login: Timestamp,
}

impl Account {
    /// A not-yet-stored account. The id is a placeholder until the
    /// repository assigns one.
    pub fn new(username: &str, encrypted_password: Vec<u8>, email: &str, last_login: Timestamp) -> Self {
        Self {
            id: AccountId(0),
            username: username.to_string(),
            encrypted_password,
            email: email.to_string(),
            last_login,
        }
    }

    pub fn has_logged_in_since(&self, since: Timestamp) -> bool {
        self.last_login > since
    }

    /// Moves `last_login` to `at`, unless that would move it backwards.
    pub fn touch_last_login(&mut self, at: Timestamp) {
        if at > self.last_login {
            self.last_login = at;
        }
    }
}
