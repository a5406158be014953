use crate::api::dto::service::{HealthDTO, ServiceInfoDTO};
use crate::container::ServiceTitle;

use actix_web::{HttpResponse, Responder, get, web::Data as State};
use utoipa_actix_web::service_config::ServiceConfig;

/// API version as clients see it: major and minor of the package version.
pub const API_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR")
);

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(index).service(health);
}

#[utoipa::path(
    responses((status = 200, body = ServiceInfoDTO)),
    tag = "Service",
)]
#[get("/")]
pub async fn index(title: State<ServiceTitle>) -> impl Responder {
    HttpResponse::Ok().json(ServiceInfoDTO {
        name: title.0.to_owned(),
        status: "OK".to_string(),
        version: API_VERSION.to_string(),
    })
}

#[utoipa::path(
    responses((status = 200, body = HealthDTO)),
    tag = "Service",
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthDTO {
        status: "OK".to_string(),
    })
}
