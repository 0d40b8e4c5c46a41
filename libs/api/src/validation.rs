//! Request validation.
//!
//! Handlers take [`ValidPath`] and [`ValidJson`] instead of axum's `Path`
//! and `Json`. Both deserialize the raw request type and run its
//! [`Validate`] impl, so a handler only ever sees checked values. Every
//! violated field is reported back in one `400` response.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use regex::Regex;
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::ApiError;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub trait Validate {
    type Valid: Send;

    fn validate(self) -> Result<Self::Valid, Vec<FieldError>>;
}

pub struct ValidPath<T: Validate>(pub T::Valid);

pub struct ValidJson<T: Validate>(pub T::Valid);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                ApiError::ValidationError(vec![FieldError::new(
                    "params",
                    e.body_text(),
                )])
            })?;

        raw.validate().map(ValidPath).map_err(ApiError::ValidationError)
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(raw) =
            Json::<T>::from_request(req, state).await.map_err(|e| {
                ApiError::ValidationError(vec![FieldError::new(
                    "body",
                    e.body_text(),
                )])
            })?;

        raw.validate().map(ValidJson).map_err(ApiError::ValidationError)
    }
}

/// Parses a UUID and returns it in lowercase hyphenated form.
pub fn uuid(field: &str, value: &str) -> Result<String, FieldError> {
    Uuid::try_parse(value)
        .map(|id| id.hyphenated().to_string())
        .map_err(|_| FieldError::new(field, "Invalid uuid"))
}

pub fn integer(field: &str, value: &str) -> Result<i32, FieldError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| FieldError::new(field, "Expected integer"))
}

pub fn min_length(
    field: &str,
    value: &str,
    min: usize,
) -> Result<(), FieldError> {
    if value.chars().count() < min {
        return Err(FieldError::new(
            field,
            format!("String must contain at least {min} character(s)"),
        ));
    }

    Ok(())
}

pub fn email(field: &str, value: &str) -> Result<(), FieldError> {
    let valid = Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(value))
        .unwrap_or(false);

    if !valid {
        return Err(FieldError::new(field, "Invalid email"));
    }

    Ok(())
}

pub fn required<T>(field: &str, value: Option<T>) -> Result<T, FieldError> {
    value.ok_or_else(|| FieldError::new(field, "Required"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_uuid() {
        assert_eq!(
            uuid("eventId", "99713657-03A8-4C9F-831D-4CCA180CB367").unwrap(),
            "99713657-03a8-4c9f-831d-4cca180cb367"
        );
        assert_eq!(
            uuid("eventId", "not-a-uuid").unwrap_err(),
            FieldError::new("eventId", "Invalid uuid")
        );
    }

    #[test]
    fn test_integer() {
        assert_eq!(integer("id", "42").unwrap(), 42);
        assert_eq!(integer("id", " 7 ").unwrap(), 7);
        assert!(integer("id", "1.5").is_err());
        assert!(integer("id", "abc").is_err());
        assert!(integer("id", "").is_err());
    }

    #[test]
    fn test_min_length() {
        assert!(min_length("name", "Ana", 4).is_err());
        assert!(min_length("name", "Anna", 4).is_ok());
        // counted in characters, not bytes
        assert!(min_length("name", "Zoë", 4).is_err());
    }

    #[test]
    fn test_email() {
        for valid in [
            "ana@x.com",
            "user.name+tag@example.co.uk",
            "o'brien@mail.ie",
        ] {
            assert!(email("email", valid).is_ok(), "{valid}");
        }

        for invalid in [
            "ana",
            "ana@",
            "@x.com",
            "ana@x",
            "ana..b@x.com",
            ".ana@x.com",
            "ana@x.c",
            "ana b@x.com",
        ] {
            assert!(email("email", invalid).is_err(), "{invalid}");
        }
    }

    #[test]
    fn test_required() {
        assert_eq!(required("name", Some(1)).unwrap(), 1);
        assert_eq!(
            required::<String>("name", None).unwrap_err(),
            FieldError::new("name", "Required")
        );
    }
}
