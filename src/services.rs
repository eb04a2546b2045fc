mod account;
pub mod encoding;

pub use account::AccountService;
