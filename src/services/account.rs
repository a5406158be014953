use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    models::account::{Account, AccountData},
    repositories::account::AccountRepository,
    services::account::AccountService,
};

use async_trait::async_trait;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn create(&self, new_account: AccountData) -> AppResult<Account> {
        Ok(self.repository.create(new_account).await?)
    }

    async fn list(&self, name: Option<&str>) -> AppResult<Vec<Account>> {
        match name {
            Some(name) => Ok(self.repository.find_by_name(name).await?),
            None => Ok(self.repository.all().await?),
        }
    }

    async fn find(&self, id: i64) -> AppResult<Account> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::account_not_found(id))
    }

    async fn update(&self, account: Account) -> AppResult<Account> {
        let id = account.id;

        // The record may vanish between the existence check and the write.
        self.repository
            .update(account)
            .await?
            .ok_or_else(|| AppError::account_not_found(id))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
