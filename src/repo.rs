mod account;
mod account_mem;
mod error;

pub use account::AccountRepo;
pub use account_mem::{DEFAULT_FIRST_ID, MemoryAccountRepository};
pub use error::{RepoError, RepoResult};
