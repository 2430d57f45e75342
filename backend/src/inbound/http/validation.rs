//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies arrive with every field optional so that a missing field
//! becomes a 400 naming the field rather than a deserialisation error with
//! an opaque body.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyField,
    InvalidFlag,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyField => "empty_field",
            ErrorCode::InvalidFlag => "invalid_flag",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let message = format!("missing required field: {}", field.as_str());
    field_error(field, message, ErrorCode::MissingField)
}

pub(crate) fn empty_field_error(field: FieldName) -> Error {
    let message = format!("{} must not be empty", field.as_str());
    field_error(field, message, ErrorCode::EmptyField)
}

/// Require a present field.
///
/// Blankness of text fields is the domain constructors' concern; this only
/// distinguishes "absent from the body" so the error can say so.
pub(crate) fn require_value<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Parse an optional `is_lost` query parameter.
///
/// Accepts `0`/`1` and `false`/`true`; anything else is a client error.
pub(crate) fn parse_optional_flag(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<bool>, Error> {
    match value.as_deref() {
        None => Ok(None),
        Some("1") | Some("true") => Ok(Some(true)),
        Some("0") | Some("false") => Ok(Some(false)),
        Some(other) => {
            let message = format!("{} must be 0 or 1", field.as_str());
            Err(Error::invalid_request(message).with_details(json!({
                "field": field.as_str(),
                "value": other,
                "code": ErrorCode::InvalidFlag.as_str(),
            })))
        }
    }
}
