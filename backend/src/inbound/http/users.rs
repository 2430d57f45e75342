//! User registration handler.
//!
//! ```text
//! POST /register {"name":"Ann","email":"ann@x.com"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::UserPersistenceError;
use crate::domain::{Error, NewUser, UserId, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, empty_field_error, require_value};

const NAME: FieldName = FieldName::new("name");
const EMAIL: FieldName = FieldName::new("email");

/// Registration request body for `POST /register`.
///
/// Fields are optional at the serde level so an absent field becomes a 400
/// naming the field instead of an opaque deserialisation failure.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    /// Display name (required, non-empty).
    #[schema(example = "Ann")]
    pub name: Option<String>,
    /// Contact email (required, non-empty, globally unique).
    #[schema(example = "ann@x.com")]
    pub email: Option<String>,
}

/// Registration success body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    /// Human-readable confirmation.
    #[schema(example = "User registered successfully")]
    pub message: String,
    /// Store-assigned user identifier.
    #[schema(value_type = i32, example = 1)]
    pub id: UserId,
}

fn validate(payload: RegisterRequest) -> Result<NewUser, Error> {
    let name = require_value(payload.name, NAME)?;
    let email = require_value(payload.email, EMAIL)?;
    NewUser::try_from_parts(&name, &email).map_err(|err| match err {
        UserValidationError::EmptyName => empty_field_error(NAME),
        UserValidationError::EmptyEmail => empty_field_error(EMAIL),
    })
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::DuplicateEmail => Error::invalid_request("Email already exists")
            .with_details(json!({ "field": "email", "code": "email_exists" })),
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

/// Register a new user.
///
/// Email uniqueness is enforced by the store's unique constraint, not a
/// pre-check, so concurrent registrations cannot race between check and
/// insert.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Missing field or duplicate email", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let user = validate(payload.into_inner())?;
    let id = state
        .users
        .insert(&user)
        .await
        .map_err(map_persistence_error)?;
    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "User registered successfully".into(),
        id,
    }))
}
