use serde::{Deserialize, Serialize};

/// A stored item. `id` is assigned by the service at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: String,
    pub name: String,
}

/// Request body for POST /item
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateItemRequest {
    pub name: Option<String>,
}
