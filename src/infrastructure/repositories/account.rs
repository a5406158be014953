use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account::{Account, AccountData};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountContent};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";
const SEQUENCE: &str = "sequence";

// The counter bump and the insert share one statement, hence one transaction.
const CREATE_WITH_SEQUENCE: &str = "CREATE type::thing($table, \
     (UPSERT type::thing($sequence, $table) SET value += 1 RETURN VALUE value)[0]) \
     CONTENT $content";

fn into_accounts(records: Vec<SurrealAccount>) -> RepositoryResult<Vec<Account>> {
    records.into_iter().map(Account::try_from).collect()
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn create(&self, new_account: AccountData) -> RepositoryResult<Account> {
        let account: Option<SurrealAccount> = self
            .db
            .query(CREATE_WITH_SEQUENCE)
            .bind(("table", ACCOUNT))
            .bind(("sequence", SEQUENCE))
            .bind(("content", SurrealAccountContent::from(new_account)))
            .await?
            .take(0)?;

        account
            .ok_or(RepositoryError::EmptyResult("CREATE account"))?
            .try_into()
    }

    async fn update(&self, account: Account) -> RepositoryResult<Option<Account>> {
        let id = account.id;

        let account: Option<SurrealAccount> = self
            .db
            .query("UPDATE type::thing($table, $id) CONTENT $content")
            .bind(("table", ACCOUNT))
            .bind(("id", id))
            .bind(("content", SurrealAccountContent::from(account)))
            .await?
            .take(0)?;

        account.map(Account::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        self.db
            .query("DELETE type::thing($table, $id)")
            .bind(("table", ACCOUNT))
            .bind(("id", id))
            .await?
            .check()?;

        Ok(())
    }

    async fn find(&self, id: i64) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = self
            .db
            .query("SELECT * FROM type::thing($table, $id)")
            .bind(("table", ACCOUNT))
            .bind(("id", id))
            .await?
            .take(0)?;

        account.map(Account::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Account>> {
        let accounts: Vec<SurrealAccount> = self
            .db
            .query("SELECT * FROM type::table($table) WHERE name = type::string($name)")
            .bind(("table", ACCOUNT))
            .bind(("name", name.to_owned()))
            .await?
            .take(0)?;

        into_accounts(accounts)
    }

    async fn all(&self) -> RepositoryResult<Vec<Account>> {
        let accounts: Vec<SurrealAccount> = self.db.select(ACCOUNT).await?;

        into_accounts(accounts)
    }
}
