use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        catalog::{ProductsBody, SectionWithProducts, StockCheck, StockCheckBody, TotalBody},
        categories::ProductCategories,
        products::{ProductBody, ProductDataBody, ProductListBody, ProductPayload},
    },
    models::{Brand, Category, Product, ProductListing, Section},
    response::{NoData, PaginationMeta},
    routes::{api, health, params, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        products::list_product_categories,
        api::get_section,
        api::total_stock_by_brand,
        api::max_stock_products,
        api::verify_product_stock,
        api::assign_category,
        api::unassign_category
    ),
    components(
        schemas(
            Product,
            ProductListing,
            Brand,
            Section,
            Category,
            ProductPayload,
            ProductListBody,
            ProductBody,
            ProductDataBody,
            ProductCategories,
            SectionWithProducts,
            TotalBody,
            ProductsBody,
            StockCheck,
            StockCheckBody,
            PaginationMeta,
            NoData,
            params::Pagination,
            params::IdQuery,
            params::CategoryLinkQuery,
            health::HealthBody
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product endpoints"),
        (name = "Catalog", description = "Catalog queries and reports"),
        (name = "Categories", description = "Product category assignment"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
