use crate::config::Config;
use crate::models::types::AccountId;
use crate::repo::{AccountRepo, MemoryAccountRepository};
use crate::services::AccountService;
use std::sync::Arc;

pub struct Repos {
    pub account: Arc<dyn AccountRepo>,
}

pub struct Services {
    pub account: Arc<AccountService>,
}

pub struct Registry {
    pub repos: Arc<Repos>,
    pub services: Arc<Services>,
    pub config: Arc<Config>,
}

impl Registry {
    /// Wires the in-memory repositories, honouring the configured first id.
    pub fn new(config: Arc<Config>) -> Self {
        let account: Arc<dyn AccountRepo> =
            Arc::new(MemoryAccountRepository::with_first_id(AccountId(config.account_id_start)));
        Self::with_repos(config, Repos { account })
    }

    pub fn with_repos(config: Arc<Config>, repos: Repos) -> Self {
        let repos = Arc::new(repos);

        let services = Arc::new(Services {
            account: Arc::new(AccountService::new(repos.account.clone())),
        });

        Self {
            config,
            repos,
            services,
        }
    }
}
