use async_trait::async_trait;

use crate::domain::models::account::{Account, AccountData};

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, new_account: AccountData) -> RepositoryResult<Account>;
    /// Returns `None` when no record carries `account.id`.
    async fn update(&self, account: Account) -> RepositoryResult<Option<Account>>;
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
    async fn find(&self, id: i64) -> RepositoryResult<Option<Account>>;
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Account>>;
    async fn all(&self) -> RepositoryResult<Vec<Account>>;
}
