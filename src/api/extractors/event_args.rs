use axum::{
    body::Bytes,
    extract::{FromRequest, Request, Form, Query},
    http::header::CONTENT_TYPE,
};
use std::collections::HashMap;
use std::convert::Infallible;
use crate::api::dtos::requests::EventArgs;

/// Reads event arguments from a JSON or form-encoded body, then fills fields
/// the body left out from the query string. Any other content type contributes
/// no body fields. Never rejects: an unreadable body is carried inside
/// `EventArgs` and surfaces when the handler validates.
impl<S> FromRequest<S> for EventArgs
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<HashMap<String, String>>::try_from_uri(req.uri())
            .map(|Query(params)| params)
            .unwrap_or_default();

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase())
            .unwrap_or_default();

        let args = if content_type.starts_with("application/x-www-form-urlencoded") {
            match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(form)) => EventArgs::from_form(form),
                Err(e) => EventArgs::rejected(e.body_text()),
            }
        } else if is_json(&content_type) {
            match Bytes::from_request(req, state).await {
                Ok(body) => EventArgs::from_json_body(&body),
                Err(e) => EventArgs::rejected(e.body_text()),
            }
        } else {
            EventArgs::default()
        };

        Ok(args.with_fallback(query))
    }
}

fn is_json(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
