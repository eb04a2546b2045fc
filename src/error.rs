use crate::repo::RepoError;
use thiserror::Error;

pub type AccountResult<T> = Result<T, AccountError>;

/// Failures of the account lifecycle operations. The display text is what
/// the HTTP layer sends back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Create was called for a username that is already stored
    #[error("UserName already exist. Please provide different UserName")]
    DuplicateUser,

    /// No account is stored for the given username
    #[error("UserName is invalid")]
    UnknownUser,

    /// The supplied password does not match the stored one
    #[error("Password is invalid")]
    InvalidCredentials,

    /// The store cannot take the account
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Debug, Error)]
pub enum ConfigErrorKind {
    #[error("failed to read file: {0}")]
    Read(std::io::Error),

    #[error("failed to parse file: {0}")]
    Parse(toml::de::Error),

    #[error("invalid environment variable {0}: {1}")]
    InvalidEnv(String, String),
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: std::path::PathBuf,
        #[source]
        source: ConfigErrorKind,
    },

    #[error("invalid configuration: {0}")]
    Env(#[source] ConfigErrorKind),

    #[error("invalid listen address {addr}: {source}")]
    Addr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type InfraResult<T> = Result<T, InfraError>;
