use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
        UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ReplaceItem, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

pub const COLLECTION_PATH: &str = "/Item/";
pub const DETAIL_PATH: &str = "/Item/{id}/";

/// OpenAPI documentation for the Item API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_items,
        create_item,
        get_item,
        replace_item,
        update_item,
        delete_item,
    ),
    components(
        schemas(Item, CreateItem, ReplaceItem, UpdateItem),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Item", description = "To-do item endpoints")
    )
)]
pub struct ApiDoc;

/// Create the Item router. Paths are relative to the API prefix.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(COLLECTION_PATH, get(list_items).post(create_item))
        .route(
            DETAIL_PATH,
            get(get_item)
                .put(replace_item)
                .patch(update_item)
                .delete(delete_item),
        )
        .with_state(shared_service)
}

/// List all items, newest first
#[utoipa::path(
    get,
    path = "/Item/",
    tag = "Item",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Items ordered by created_at descending", body = Vec<Item>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/Item/",
    tag = "Item",
    security(("bearer_auth" = [])),
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/Item/{id}/",
    tag = "Item",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Full update
#[utoipa::path(
    put,
    path = "/Item/{id}/",
    tag = "Item",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    request_body = ReplaceItem,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ReplaceItem>,
) -> ItemResult<Json<Item>> {
    let item = service.replace_item(id, input).await?;
    Ok(Json(item))
}

/// Partial update
#[utoipa::path(
    patch,
    path = "/Item/{id}/",
    tag = "Item",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> ItemResult<Json<Item>> {
    let item = service.update_item(id, input).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/Item/{id}/",
    tag = "Item",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<impl IntoResponse> {
    service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
