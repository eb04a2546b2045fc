use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

// RepoError is the lowest level error type. It does not wrap any higher level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    /// Every account id has been handed out
    #[error("no account ids left to assign")]
    IdsExhausted,
}
