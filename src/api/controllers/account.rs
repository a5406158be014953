use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

use crate::api::dto::account::{AccountDTO, AccountPayloadDTO, AccountQueryDTO};
use crate::domain::models::account::AccountData;

use actix_web::{
    HttpResponse, delete, get,
    http::header,
    post, put,
    web::{Data as State, Path, Query},
};

use tracing::info;
use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(create_account)
        .service(list_accounts)
        .service(read_account)
        .service(update_account)
        .service(delete_account);
}

fn location(id: i64) -> String {
    format!("/accounts/{id}")
}

#[utoipa::path(
    responses(
        (status = 201, body = AccountDTO, description = "Account Created",
            headers(("Location" = String, description = "Path of the new account"))),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 415, body = AppError, example = json!(AppError::example_415())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = AccountPayloadDTO,
    tag = "Account",
)]
#[post("/accounts")]
pub async fn create_account(
    payload: Json<AccountPayloadDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    info!("Request to create an Account");

    let new_account = AccountData::from(payload.into_inner()?);

    let account = account_service.create(new_account).await?;

    info!(id = account.id, "Account created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location(account.id)))
        .json(AccountDTO::from(account)))
}

#[utoipa::path(
    params(AccountQueryDTO),
    responses(
        (status = 200, body = Vec<AccountDTO>),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/accounts")]
pub async fn list_accounts(
    query: Query<AccountQueryDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let name = query.name_filter();

    match name {
        Some(name) => info!(name, "Request to list Accounts by name"),
        None => info!("Request to list Accounts"),
    }

    let accounts = account_service.list(name).await?;

    Ok(HttpResponse::Ok().json(
        accounts
            .into_iter()
            .map(AccountDTO::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account identifier")),
    responses(
        (status = 200, body = AccountDTO),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/accounts/{id}")]
pub async fn read_account(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let id = id.into_inner();

    info!(id, "Processing lookup for Account");

    let account = account_service.find(id).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account identifier")),
    responses(
        (status = 200, body = AccountDTO, description = "Account Updated"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 415, body = AppError, example = json!(AppError::example_415())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = AccountPayloadDTO,
    tag = "Account",
)]
#[put("/accounts/{id}")]
pub async fn update_account(
    id: Path<i64>,
    payload: Json<AccountPayloadDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let id = id.into_inner();

    info!(id, "Request to update Account");

    // Existence is checked before the body is parsed.
    let mut account = account_service.find(id).await?;

    account.assign(payload.into_inner()?.into());

    let account = account_service.update(account).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account identifier")),
    responses(
        (status = 204, description = "Account deleted or already absent"),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[delete("/accounts/{id}")]
pub async fn delete_account(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let id = id.into_inner();

    info!(id, "Request to delete Account");

    account_service.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}
