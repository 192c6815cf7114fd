use axum::{
    Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::{
        categories::ProductCategories,
        products::{
            ProductBody, ProductDataBody, ProductListBody, ProductPayload, product_created,
            product_updated,
        },
    },
    error::AppResult,
    extract::{AppJson, AppQuery},
    response::{ApiResponse, NoData},
    routes::params::{IdQuery, Pagination},
    services::{category_service, product_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/index", get(list_products))
        .route("/view", get(get_product))
        .route("/create", post(create_product))
        .route("/update", post(update_product).put(update_product))
        .route("/delete", post(delete_product).delete(delete_product))
        .route("/categorias", get(list_product_categories))
}

#[utoipa::path(
    get,
    path = "/producto",
    params(Pagination),
    responses(
        (status = 200, description = "Paginated products with brand and section names", body = ProductListBody)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    AppQuery(pagination): AppQuery<Pagination>,
) -> AppResult<ApiResponse<ProductListBody>> {
    let page = product_service::list_products(&state, pagination).await?;
    Ok(page.into())
}

#[utoipa::path(
    get,
    path = "/producto/view",
    params(IdQuery),
    responses(
        (status = 200, description = "Get product", body = ProductBody),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<ApiResponse<ProductBody>> {
    let product = product_service::get_product(&state, query.id).await?;
    Ok(product.into())
}

#[utoipa::path(
    post,
    path = "/producto/create",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = ProductDataBody),
        (status = 422, description = "Field validation failed"),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProductPayload>,
) -> AppResult<ApiResponse<ProductDataBody>> {
    let product = product_service::create_product(&state, payload).await?;
    Ok(product_created(product))
}

#[utoipa::path(
    put,
    path = "/producto/update",
    params(IdQuery),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated", body = ProductDataBody),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Field validation failed"),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<IdQuery>,
    AppJson(payload): AppJson<ProductPayload>,
) -> AppResult<ApiResponse<ProductDataBody>> {
    let product = product_service::update_product(&state, query.id, payload).await?;
    Ok(product_updated(product))
}

#[utoipa::path(
    delete,
    path = "/producto/delete",
    params(IdQuery),
    responses(
        (status = 200, description = "Product deleted", body = NoData),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Product still referenced"),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<ApiResponse<NoData>> {
    product_service::delete_product(&state, query.id).await?;
    Ok(ApiResponse::message_only("El producto fue eliminado con éxito."))
}

#[utoipa::path(
    get,
    path = "/producto/categorias",
    params(IdQuery),
    responses(
        (status = 200, description = "Categories linked to the product", body = ProductCategories),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn list_product_categories(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<ApiResponse<ProductCategories>> {
    let categories = category_service::list_product_categories(&state, query.id).await?;
    Ok(categories.into())
}
