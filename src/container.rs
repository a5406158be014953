use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::config::ServiceConfig;
use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;

use crate::services::account::AccountServiceImpl;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;

/// Name the service reports about itself on `GET /`.
#[derive(Debug, Clone)]
pub struct ServiceTitle(pub String);

/// Everything a request handler may reach, built once and shared by workers.
pub struct Container {
    pub account_service: Arc<dyn AccountService>,
    pub service_title: ServiceTitle,
}

impl Container {
    pub fn new(conn: Surreal<Client>, service_config: &ServiceConfig) -> Self {
        let db = Arc::new(conn);

        Container {
            account_service: account_service(db),
            service_title: ServiceTitle(service_config.title.to_owned()),
        }
    }
}

fn account_service(db: Arc<Surreal<Client>>) -> Arc<dyn AccountService> {
    let account_repository: Arc<dyn AccountRepository> = Arc::new(AccountRepositoryImpl::new(db));

    Arc::new(AccountServiceImpl::new(account_repository))
}
