/// Sequential numeric account identifier, handed out by the repository.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct AccountId(pub u64);

impl AccountId {
    /// The id following this one, or `None` once the id space is used up.
    #[inline]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AccountId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl From<AccountId> for u64 {
    fn from(v: AccountId) -> u64 {
        v.0
    }
}

pub type Timestamp = chrono::DateTime<chrono::Utc>;
