use core::fmt::Debug;
use std::marker::PhantomData;

use crate::domain::error::{AppError, AppResult};
use actix_web::FromRequest;
use actix_web::HttpMessage;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::error::JsonPayloadError;
use actix_web::web::Bytes;
use futures::future::{FutureExt, LocalBoxFuture, ready};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

const NOT_AN_OBJECT: &str = "Json deserialize error: expected a JSON object";

/// JSON request body whose media type is checked during extraction while
/// deserialization and validation wait for [`Json::into_inner`].
///
/// Handlers can therefore reject an unknown resource before reporting a bad
/// body: a wrong `Content-Type` fails extraction with 415, a malformed or
/// invalid body only fails once the handler asks for it, with 400.
pub struct Json<T> {
    body: Bytes,
    marker: PhantomData<T>,
}

impl<T> Debug for Json<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Json").field("len", &self.body.len()).finish()
    }
}

impl<T> Json<T>
where
    T: DeserializeOwned + Validate,
{
    pub fn into_inner(self) -> AppResult<T> {
        let document: Value =
            serde_json::from_slice(&self.body).map_err(JsonPayloadError::Deserialize)?;

        // Derived struct deserializers also accept sequences; only objects are payloads.
        if !document.is_object() {
            return Err(AppError::BadRequest(NOT_AN_OBJECT));
        }

        // Parsed again from the raw bytes so type errors keep their line and column.
        let payload: T =
            serde_json::from_slice(&self.body).map_err(JsonPayloadError::Deserialize)?;

        payload.validate()?;

        Ok(payload)
    }
}

/// Accepts `application/json` and `application/*+json`, parameters allowed.
fn is_json(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(mime)) => {
            mime.type_() == mime::APPLICATION
                && (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
        }
        _ => false,
    }
}

impl<T> FromRequest for Json<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if !is_json(req) {
            return ready(Err(AppError::from(JsonPayloadError::ContentType))).boxed_local();
        }

        Bytes::from_request(req, payload)
            .map(|res| match res {
                Ok(body) => Ok(Json {
                    body,
                    marker: PhantomData,
                }),
                Err(err) => Err(AppError::BadRequest(err.to_string())),
            })
            .boxed_local()
    }
}
