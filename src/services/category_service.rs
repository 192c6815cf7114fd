use sea_orm::TransactionTrait;

use crate::{
    dto::categories::{LinkChange, ProductCategories},
    error::{AppError, AppResult},
    models::Category,
    repository::{CategoryRepository, ProductCategoryRepository, ProductRepository},
    routes::params::CategoryLinkQuery,
    services::product_service::PRODUCT_NOT_FOUND,
    state::AppState,
};

pub const CATEGORY_NOT_FOUND: &str = "Categoría no encontrada.";
pub const ALREADY_ASSIGNED: &str = "El producto ya posee la categoría.";
pub const NOT_ASSIGNED: &str = "El producto no posee la categoría.";

/// Unlinked -> Linked. The checks and the insert share one transaction; the
/// composite key on the join table rejects a duplicate that slips through.
pub async fn assign_category(state: &AppState, link: CategoryLinkQuery) -> AppResult<LinkChange> {
    let txn = state.orm.begin().await?;

    if !ProductRepository::new(&txn).exists(link.producto_id).await? {
        return Err(AppError::NotFound(PRODUCT_NOT_FOUND.into()));
    }
    if !CategoryRepository::new(&txn).exists(link.categoria_id).await? {
        return Err(AppError::NotFound(CATEGORY_NOT_FOUND.into()));
    }

    let links = ProductCategoryRepository::new(&txn);
    if links.is_linked(link.producto_id, link.categoria_id).await? {
        return Err(AppError::Conflict(ALREADY_ASSIGNED.into()));
    }
    links.link(link.producto_id, link.categoria_id).await?;
    txn.commit().await?;

    tracing::info!(
        product_id = link.producto_id,
        category_id = link.categoria_id,
        "category assigned"
    );
    Ok(LinkChange::Assigned)
}

/// Linked -> Unlinked. The join row is deleted, not flagged.
pub async fn unassign_category(
    state: &AppState,
    link: CategoryLinkQuery,
) -> AppResult<LinkChange> {
    let txn = state.orm.begin().await?;

    if !ProductRepository::new(&txn).exists(link.producto_id).await? {
        return Err(AppError::NotFound(PRODUCT_NOT_FOUND.into()));
    }
    if !CategoryRepository::new(&txn).exists(link.categoria_id).await? {
        return Err(AppError::NotFound(CATEGORY_NOT_FOUND.into()));
    }

    let links = ProductCategoryRepository::new(&txn);
    if !links.is_linked(link.producto_id, link.categoria_id).await? {
        return Err(AppError::Conflict(NOT_ASSIGNED.into()));
    }
    links.unlink(link.producto_id, link.categoria_id).await?;
    txn.commit().await?;

    tracing::info!(
        product_id = link.producto_id,
        category_id = link.categoria_id,
        "category unassigned"
    );
    Ok(LinkChange::Unassigned)
}

pub async fn list_product_categories(
    state: &AppState,
    product_id: i32,
) -> AppResult<ProductCategories> {
    let product = match ProductRepository::new(&state.orm).find_by_id(product_id).await? {
        Some(p) => p,
        None => return Err(AppError::NotFound(PRODUCT_NOT_FOUND.into())),
    };

    let categorias = ProductCategoryRepository::new(&state.orm)
        .categories_of(&product)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();

    Ok(ProductCategories {
        producto_id: product.id,
        categorias,
    })
}
