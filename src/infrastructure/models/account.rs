use serde::{Deserialize, Serialize};
use surrealdb::sql::{Id, Thing};

use crate::domain::models::account::{Account, AccountData};
use crate::domain::repositories::repository::RepositoryError;

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    id: Thing,
    name: String,
    email: String,
    password: String,
}

/// Record body without identity, bound as `CONTENT` on create and update.
#[derive(Serialize)]
pub struct SurrealAccountContent {
    name: String,
    email: String,
    password: String,
}

impl From<AccountData> for SurrealAccountContent {
    fn from(acc: AccountData) -> Self {
        SurrealAccountContent {
            name: acc.name,
            email: acc.email,
            password: acc.password,
        }
    }
}

impl From<Account> for SurrealAccountContent {
    fn from(acc: Account) -> Self {
        SurrealAccountContent {
            name: acc.name,
            email: acc.email,
            password: acc.password,
        }
    }
}

impl TryFrom<SurrealAccount> for Account {
    type Error = RepositoryError;

    fn try_from(acc: SurrealAccount) -> Result<Self, Self::Error> {
        let id = match acc.id.id {
            Id::Number(id) => id,
            _ => return Err(RepositoryError::MalformedRecord(acc.id.to_string())),
        };

        Ok(Account {
            id,
            name: acc.name,
            email: acc.email,
            password: acc.password,
        })
    }
}
