pub mod config;
pub mod error;
pub mod models;
pub mod net;
pub mod repo;
pub mod services;
pub mod state;

// Convenient re-exports (so call sites can do `accountstore::Registry`, etc.)
pub use error::{AccountError, AccountResult};
pub use models::account::Account;
pub use state::registry::Registry;
