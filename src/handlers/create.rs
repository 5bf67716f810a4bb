use crate::error::ApiError;
use crate::models::{CreateItemRequest, Item};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// POST /item handler - Create an item with a generated id
///
/// `name` must be present and non-empty; no other validation is applied.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Missing 'name' or malformed body", body = String, content_type = "text/plain"),
        (status = 500, description = "Store write failed", body = String, content_type = "text/plain")
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(request) = payload?;

    let name = match request.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::MissingName),
    };

    let item = Item {
        id: Uuid::new_v4().to_string(),
        name,
    };

    state.store.put(&item).await?;

    tracing::info!("Created item with id: {} in table {}", item.id, state.config.table_name);
    Ok((StatusCode::CREATED, Json(item)))
}
