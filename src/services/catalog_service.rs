use crate::{
    dto::catalog::{BrandStockTotal, MaxStockProducts, SectionWithProducts, StockCheck},
    error::{AppError, AppResult},
    models::{Brand, Product, Section},
    repository::{BrandRepository, ProductRepository, SectionRepository},
    services::product_service::PRODUCT_NOT_FOUND,
    state::AppState,
};

pub async fn get_section(state: &AppState, id: i32) -> AppResult<SectionWithProducts> {
    let section = match SectionRepository::new(&state.orm).find_by_id(id).await? {
        Some(s) => s,
        None => return Err(AppError::NotFound("Sección no encontrada.".into())),
    };

    let productos = ProductRepository::new(&state.orm)
        .find_by_section(section.id)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    Ok(SectionWithProducts {
        seccion: Section::from(section),
        productos,
    })
}

pub async fn total_stock_by_brand(state: &AppState, brand_id: i32) -> AppResult<BrandStockTotal> {
    let brand = match BrandRepository::new(&state.orm).find_by_id(brand_id).await? {
        Some(b) => b,
        None => return Err(AppError::NotFound("Marca no encontrada.".into())),
    };

    let total = ProductRepository::new(&state.orm)
        .total_stock_by_brand(brand.id)
        .await?;

    Ok(BrandStockTotal {
        brand: Brand::from(brand),
        total,
    })
}

pub async fn max_stock_products(state: &AppState) -> AppResult<MaxStockProducts> {
    let repo = ProductRepository::new(&state.orm);
    let Some(max) = repo.max_stock().await? else {
        return Ok(MaxStockProducts {
            max: None,
            products: Vec::new(),
        });
    };

    let products = repo
        .find_by_stock(max)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    Ok(MaxStockProducts {
        max: Some(max),
        products,
    })
}

pub async fn verify_product_stock(state: &AppState, product_id: i32) -> AppResult<StockCheck> {
    let product = match ProductRepository::new(&state.orm).find_by_id(product_id).await? {
        Some(p) => p,
        None => return Err(AppError::NotFound(PRODUCT_NOT_FOUND.into())),
    };

    Ok(StockCheck {
        has_stock: product.stock.is_some_and(|stock| stock > 0),
        stock: product.stock,
    })
}
