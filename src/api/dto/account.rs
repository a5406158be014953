use crate::api::dto::validation::{is_email, is_name};
use crate::domain::models::account::{Account, AccountData};
use serde::Deserialize;
use serde::Serialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Wire form of a stored account. Every field round-trips unchanged,
/// `password` included.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    #[schema(examples(1))]
    id: i64,
    #[schema(examples("John"))]
    name: String,
    #[schema(examples("john@example.com"))]
    email: String,
    #[schema(examples("secret"))]
    password: String,
}

/// Request body for create and update. Unknown keys, `id` among them, are ignored.
#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct AccountPayloadDTO {
    #[validate(custom(function = "is_name"))]
    #[schema(examples("John"))]
    pub name: String,

    #[validate(custom(function = "is_email"))]
    #[schema(examples("john@example.com"))]
    pub email: String,

    #[schema(examples("secret"))]
    pub password: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AccountQueryDTO {
    /// Exact name to filter by
    pub name: Option<String>,
}

impl AccountQueryDTO {
    /// An empty `name` is treated as no filter at all.
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
            password: val.password,
        }
    }
}

impl From<AccountPayloadDTO> for AccountData {
    fn from(payload: AccountPayloadDTO) -> Self {
        AccountData {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        }
    }
}
