//! Form body decoding.
//!
//! `/predict` accepts urlencoded and multipart bodies. Any other content type
//! (or none) is read as an empty form, so every field falls back to `0.0`.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;
use axum::Form;

use crate::error::CoercionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKind {
    UrlEncoded,
    Multipart,
    Other,
}

fn form_kind(request: &Request) -> FormKind {
    let essence = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| essence.trim().to_ascii_lowercase());

    match essence.as_deref() {
        Some("application/x-www-form-urlencoded") => FormKind::UrlEncoded,
        Some("multipart/form-data") => FormKind::Multipart,
        _ => FormKind::Other,
    }
}

/// Decode the request body into `(key, value)` pairs in submission order.
///
/// Multipart parts without a name are skipped; file parts contribute their
/// contents as text.
pub(super) async fn read_form_pairs(
    request: Request,
) -> Result<Vec<(String, String)>, CoercionError> {
    match form_kind(&request) {
        FormKind::UrlEncoded => {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, &())
                .await
                .map_err(|rejection| CoercionError::MalformedForm(rejection.body_text()))?;
            Ok(pairs)
        }
        FormKind::Multipart => {
            let mut multipart = Multipart::from_request(request, &())
                .await
                .map_err(|rejection| CoercionError::MalformedForm(rejection.body_text()))?;

            let mut pairs = Vec::new();
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|err| CoercionError::MalformedForm(err.body_text()))?
            {
                let Some(name) = field.name().map(str::to_owned) else {
                    continue;
                };
                let value = field
                    .text()
                    .await
                    .map_err(|err| CoercionError::MalformedForm(err.body_text()))?;
                pairs.push((name, value));
            }
            Ok(pairs)
        }
        FormKind::Other => Ok(Vec::new()),
    }
}
