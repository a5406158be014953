use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, AccountData};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn create(&self, new_account: AccountData) -> AppResult<Account>;
    async fn list(&self, name: Option<&str>) -> AppResult<Vec<Account>>;
    /// Fails with `NotFound` when the id is unknown.
    async fn find(&self, id: i64) -> AppResult<Account>;
    async fn update(&self, account: Account) -> AppResult<Account>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}
