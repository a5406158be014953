use std::sync::Arc;

use ::surrealdb::{Surreal, engine::remote::ws::Client};

use crate::domain::models::account::{Account, AccountData};
use crate::domain::repositories::account::AccountRepository;
use crate::infrastructure::repositories::account::AccountRepositoryImpl;

pub async fn seed_account(conn: &Surreal<Client>, name: &str) -> Account {
    AccountRepositoryImpl::new(Arc::new(conn.clone()))
        .create(AccountData {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: "secret".to_string(),
        })
        .await
        .unwrap()
}
