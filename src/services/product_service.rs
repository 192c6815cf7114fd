use chrono::Utc;
use sea_orm::{ActiveValue::NotSet, Set, TransactionTrait};

use crate::{
    dto::products::{ProductPage, ProductPayload},
    entity::products::ActiveModel,
    error::{AppError, AppResult},
    models::{Product, ProductListing},
    repository::{ProductListingRow, ProductRepository},
    routes::params::Pagination,
    state::AppState,
    validation::validate_product,
};

pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado.";
pub const PRODUCT_IN_USE: &str = "El producto se encuentra en uso.";

pub async fn list_products(state: &AppState, pagination: Pagination) -> AppResult<ProductPage> {
    let repo = ProductRepository::new(&state.orm);
    let total = repo.count().await?;
    let window = pagination.window(total);

    let items = repo
        .list_with_names(window.limit, window.offset)
        .await?
        .into_iter()
        .map(listing_from_row)
        .collect();

    Ok(ProductPage { items, window })
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Product> {
    let result = ProductRepository::new(&state.orm)
        .find_by_id(id)
        .await?
        .map(Product::from);
    match result {
        Some(p) => Ok(p),
        None => Err(AppError::NotFound(PRODUCT_NOT_FOUND.into())),
    }
}

pub async fn create_product(state: &AppState, payload: ProductPayload) -> AppResult<Product> {
    let txn = state.orm.begin().await?;
    let valid = validate_product(&txn, &payload).await?;

    let active = ActiveModel {
        id: NotSet,
        name: Set(valid.name),
        description: Set(valid.description),
        price: Set(valid.price),
        stock: Set(valid.stock),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
        brand_id: Set(valid.brand_id),
        section_id: Set(valid.section_id),
    };
    let product = ProductRepository::new(&txn).insert(active).await?;
    txn.commit().await?;

    tracing::info!(product_id = product.id, "product created");
    Ok(product.into())
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: ProductPayload,
) -> AppResult<Product> {
    let txn = state.orm.begin().await?;
    let repo = ProductRepository::new(&txn);

    let existing = match repo.find_by_id(id).await? {
        Some(p) => p,
        None => return Err(AppError::NotFound(PRODUCT_NOT_FOUND.into())),
    };

    let payload = payload.merged_with(&existing);
    let valid = validate_product(&txn, &payload).await?;

    let mut active: ActiveModel = existing.into();
    active.name = Set(valid.name);
    active.description = Set(valid.description);
    active.price = Set(valid.price);
    active.stock = Set(valid.stock);
    active.brand_id = Set(valid.brand_id);
    active.section_id = Set(valid.section_id);
    active.updated_at = Set(Some(Utc::now().into()));

    let product = repo.update(active).await?;
    txn.commit().await?;

    tracing::info!(product_id = product.id, "product updated");
    Ok(product.into())
}

pub async fn delete_product(state: &AppState, id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;
    let repo = ProductRepository::new(&txn);

    if !repo.exists(id).await? {
        return Err(AppError::NotFound(PRODUCT_NOT_FOUND.into()));
    }

    if let Err(err) = repo.delete(id).await {
        return Err(AppError::from_delete(err, PRODUCT_IN_USE));
    }
    txn.commit().await?;

    tracing::info!(product_id = id, "product deleted");
    Ok(())
}

fn listing_from_row(row: ProductListingRow) -> ProductListing {
    ProductListing {
        product: Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            stock: row.stock,
            created_at: row.created_at.with_timezone(&Utc),
            updated_at: row.updated_at.map(|dt| dt.with_timezone(&Utc)),
            brand_id: row.brand_id,
            section_id: row.section_id,
        },
        brand_name: row.brand_name,
        section_description: row.section_description,
    }
}
