//! Item posting and search handlers.
//!
//! ```text
//! POST /post_item {"title":"Black Wallet","description":"lost near park",
//!                  "location":"Central Park","is_lost":true,"user_id":1}
//! GET /search_items?query=wallet&is_lost=1
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::ItemPersistenceError;
use crate::domain::{Error, ItemId, ItemSummary, ItemValidationError, NewItem, SearchFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, empty_field_error, parse_optional_flag, require_value,
};

const TITLE: FieldName = FieldName::new("title");
const DESCRIPTION: FieldName = FieldName::new("description");
const LOCATION: FieldName = FieldName::new("location");
const IS_LOST: FieldName = FieldName::new("is_lost");
const USER_ID: FieldName = FieldName::new("user_id");

/// Item posting request body for `POST /post_item`.
///
/// Fields are optional at the serde level so an absent field becomes a 400
/// naming the field instead of an opaque deserialisation failure.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PostItemRequest {
    /// Short title (required, non-empty).
    #[schema(example = "Black Wallet")]
    pub title: Option<String>,
    /// Free-text description (required, non-empty).
    #[schema(example = "lost near park")]
    pub description: Option<String>,
    /// Where the item was lost or found (required, non-empty).
    #[schema(example = "Central Park")]
    pub location: Option<String>,
    /// True for a lost posting, false for a found posting (required).
    pub is_lost: Option<bool>,
    /// Identifier of an existing user (required).
    #[schema(example = 1)]
    pub user_id: Option<i32>,
}

/// Item posting success body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostItemResponse {
    /// Human-readable confirmation.
    #[schema(example = "Item posted successfully")]
    pub message: String,
    /// Store-assigned item identifier.
    #[schema(value_type = i32, example = 1)]
    pub id: ItemId,
}

/// Query parameters for `GET /search_items`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Free-text query matched case-insensitively against title,
    /// description, and location. Defaults to the empty string, which
    /// matches every item.
    pub query: Option<String>,
    /// Optional lost-flag filter: `1`/`true` for lost postings, `0`/`false`
    /// for found postings. Both kinds are returned when absent.
    pub is_lost: Option<String>,
}

fn validate(payload: PostItemRequest) -> Result<NewItem, Error> {
    let title = require_value(payload.title, TITLE)?;
    let description = require_value(payload.description, DESCRIPTION)?;
    let location = require_value(payload.location, LOCATION)?;
    let is_lost = require_value(payload.is_lost, IS_LOST)?;
    let user_id = require_value(payload.user_id, USER_ID)?;

    NewItem::try_from_parts(&title, &description, &location, is_lost, user_id.into()).map_err(
        |err| match err {
            ItemValidationError::EmptyTitle => empty_field_error(TITLE),
            ItemValidationError::EmptyDescription => empty_field_error(DESCRIPTION),
            ItemValidationError::EmptyLocation => empty_field_error(LOCATION),
        },
    )
}

fn map_persistence_error(error: ItemPersistenceError) -> Error {
    match error {
        ItemPersistenceError::UnknownUser => {
            Error::invalid_request("user_id does not reference a registered user")
                .with_details(json!({ "field": "user_id", "code": "unknown_user" }))
        }
        ItemPersistenceError::Connection { message } => Error::service_unavailable(message),
        ItemPersistenceError::Query { message } => Error::internal(message),
    }
}

/// Post a lost or found item.
///
/// The creation timestamp is assigned by the store; referential integrity
/// against the users table is enforced by the store's foreign key, so an
/// unknown `user_id` is rejected rather than stored as an orphan.
#[utoipa::path(
    post,
    path = "/post_item",
    request_body = PostItemRequest,
    responses(
        (status = 201, description = "Item posted", body = PostItemResponse),
        (status = 400, description = "Missing field or unknown user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["items"],
    operation_id = "postItem"
)]
#[post("/post_item")]
pub async fn post_item(
    state: web::Data<HttpState>,
    payload: web::Json<PostItemRequest>,
) -> ApiResult<HttpResponse> {
    let item = validate(payload.into_inner())?;
    let id = state
        .items
        .insert(&item)
        .await
        .map_err(map_persistence_error)?;
    Ok(HttpResponse::Created().json(PostItemResponse {
        message: "Item posted successfully".into(),
        id,
    }))
}

/// Search items by free-text query and optional lost-flag filter.
///
/// Results are ordered by ascending item identifier and joined with the
/// owning user; an empty array is a valid result, not an error.
#[utoipa::path(
    get,
    path = "/search_items",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching items", body = [ItemSummary]),
        (status = 400, description = "Invalid is_lost filter", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["items"],
    operation_id = "searchItems"
)]
#[get("/search_items")]
pub async fn search_items(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<Vec<ItemSummary>>> {
    let params = params.into_inner();
    let is_lost = parse_optional_flag(params.is_lost, IS_LOST)?;
    let filter = SearchFilter::new(params.query.unwrap_or_default(), is_lost);
    let results = state
        .items
        .search(&filter)
        .await
        .map_err(map_persistence_error)?;
    Ok(web::Json(results))
}
