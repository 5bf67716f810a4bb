use utoipa::OpenApi;

use crate::handlers;
use crate::models::{CreateItemRequest, Item};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-dynamodb-items API",
        version = "1.0.0",
        description = "Create and read items stored in DynamoDB"
    ),
    paths(
        handlers::health::health_handler,
        handlers::create::create_handler,
        handlers::get::get_handler
    ),
    components(
        schemas(Item, CreateItemRequest)
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item operations")
    )
)]
pub struct ApiDoc;
