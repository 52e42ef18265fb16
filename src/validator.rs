use anyhow::anyhow;
use axum::{
    Form, Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{FormRejection, JsonRejection},
    },
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use todosapp_core::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>();
    messages.sort();
    messages.join(", ")
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        // Well-formed JSON of the wrong shape: missing fields, wrong types.
        JsonRejection::JsonDataError(err) => {
            let error_msg = err.body_text();

            if let Some(field) = error_msg
                .split("missing field `")
                .nth(1)
                .and_then(|s| s.split('`').next())
            {
                return AppError::unprocessable(anyhow!("{} is required", field));
            }

            AppError::unprocessable(anyhow!("Invalid field type in request"))
        }
        JsonRejection::MissingJsonContentType(_) => AppError::new(
            StatusCode::BAD_REQUEST,
            anyhow!("Missing 'Content-Type: application/json' header"),
        ),
        _ => AppError::bad_request(anyhow!("Invalid request body")),
    }
}

/// JSON body that must also pass its `validator` rules.
///
/// Malformed JSON is a 400. A body that parses but is missing fields, has
/// the wrong types, or breaks a rule is a 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        value
            .validate()
            .map_err(|errors| AppError::unprocessable(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

/// Url-encoded form body. Any rejection is a 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection: FormRejection| {
                AppError::unprocessable(anyhow!("{}", rejection.body_text()))
            })?;

        Ok(ValidatedForm(value))
    }
}

/// Single numeric path parameter that must be greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveId(pub i64);

impl<S> FromRequestParts<S> for PositiveId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::unprocessable(anyhow!("Path id must be an integer")))?;

        check_positive(id).map(PositiveId)
    }
}

fn check_positive(id: i64) -> Result<i64, AppError> {
    if id <= 0 {
        return Err(AppError::unprocessable(anyhow!(
            "Path id must be greater than 0"
        )));
    }
    Ok(id)
}
