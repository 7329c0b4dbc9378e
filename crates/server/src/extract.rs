use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::AppError;

/// Body extractor for the POST endpoints, which accept url-encoded
/// form posts and JSON bodies interchangeably
///
/// Dispatches on the Content-Type header; anything else is rejected
/// with 415 before the body is read
#[derive(Debug, Clone)]
pub struct FormOrJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send + 'static,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<mime::Mime>().ok());

        match content_type {
            Some(ref content)
                if content.subtype() == mime::JSON || content.suffix() == Some(mime::JSON) =>
            {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::new(StatusCode::BAD_REQUEST, e.body_text()))?;
                Ok(FormOrJson(value))
            }
            Some(ref content)
                if content.type_() == mime::APPLICATION
                    && content.subtype() == mime::WWW_FORM_URLENCODED =>
            {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::new(StatusCode::BAD_REQUEST, e.body_text()))?;
                Ok(FormOrJson(value))
            }
            other => Err(AppError::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                match other {
                    Some(mime) => format!("expected a form or json body, got {mime}"),
                    None => "expected a form or json body".to_owned(),
                },
            )),
        }
    }
}
