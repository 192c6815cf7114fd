use axum::{Router, extract::State, routing::get};

use crate::{
    dto::catalog::{ProductsBody, SectionWithProducts, StockCheckBody, TotalBody},
    error::AppResult,
    extract::AppQuery,
    response::{ApiResponse, NoData},
    routes::params::{CategoryLinkQuery, IdQuery},
    services::{catalog_service, category_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get-seccion", get(get_section))
        .route("/get-total-products-by-brand", get(total_stock_by_brand))
        .route("/product-with-max-stock", get(max_stock_products))
        .route("/verify-product-stock", get(verify_product_stock))
        .route("/assign-category", get(assign_category))
        .route("/unassign-category", get(unassign_category))
}

#[utoipa::path(
    get,
    path = "/api/get-seccion",
    params(IdQuery),
    responses(
        (status = 200, description = "Section with its products", body = SectionWithProducts),
        (status = 404, description = "Section not found"),
    ),
    tag = "Catalog"
)]
pub async fn get_section(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<ApiResponse<SectionWithProducts>> {
    let section = catalog_service::get_section(&state, query.id).await?;
    Ok(section.into())
}

#[utoipa::path(
    get,
    path = "/api/get-total-products-by-brand",
    params(IdQuery),
    responses(
        (status = 200, description = "Sum of stock over the brand's products", body = TotalBody),
        (status = 404, description = "Brand not found"),
    ),
    tag = "Catalog"
)]
pub async fn total_stock_by_brand(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<ApiResponse<TotalBody>> {
    let total = catalog_service::total_stock_by_brand(&state, query.id).await?;
    Ok(total.into())
}

#[utoipa::path(
    get,
    path = "/api/product-with-max-stock",
    responses(
        (status = 200, description = "Products sharing the highest stock", body = ProductsBody),
    ),
    tag = "Catalog"
)]
pub async fn max_stock_products(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<ProductsBody>> {
    let result = catalog_service::max_stock_products(&state).await?;
    Ok(result.into())
}

#[utoipa::path(
    get,
    path = "/api/verify-product-stock",
    params(IdQuery),
    responses(
        (status = 200, description = "Whether the product has stock", body = StockCheckBody),
        (status = 404, description = "Product not found"),
    ),
    tag = "Catalog"
)]
pub async fn verify_product_stock(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<IdQuery>,
) -> AppResult<ApiResponse<StockCheckBody>> {
    let check = catalog_service::verify_product_stock(&state, query.id).await?;
    Ok(check.into())
}

#[utoipa::path(
    get,
    path = "/api/assign-category",
    params(CategoryLinkQuery),
    responses(
        (status = 200, description = "Category assigned", body = NoData),
        (status = 404, description = "Product or category not found"),
        (status = 422, description = "Category already assigned"),
    ),
    tag = "Categories"
)]
pub async fn assign_category(
    State(state): State<AppState>,
    AppQuery(link): AppQuery<CategoryLinkQuery>,
) -> AppResult<ApiResponse<NoData>> {
    let change = category_service::assign_category(&state, link).await?;
    Ok(change.into())
}

#[utoipa::path(
    get,
    path = "/api/unassign-category",
    params(CategoryLinkQuery),
    responses(
        (status = 200, description = "Category unassigned", body = NoData),
        (status = 404, description = "Product or category not found"),
        (status = 422, description = "Category not assigned"),
    ),
    tag = "Categories"
)]
pub async fn unassign_category(
    State(state): State<AppState>,
    AppQuery(link): AppQuery<CategoryLinkQuery>,
) -> AppResult<ApiResponse<NoData>> {
    let change = category_service::unassign_category(&state, link).await?;
    Ok(change.into())
}
