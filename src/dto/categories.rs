use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::Category,
    response::{ApiResponse, NoData},
};

/// Outcome of a category assignment change on one (product, category) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkChange {
    Assigned,
    Unassigned,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductCategories {
    pub producto_id: i32,
    pub categorias: Vec<Category>,
}

impl From<LinkChange> for ApiResponse<NoData> {
    fn from(change: LinkChange) -> Self {
        match change {
            LinkChange::Assigned => {
                ApiResponse::message_only("Se asigno la categoría al producto correctamente.")
            }
            LinkChange::Unassigned => {
                ApiResponse::message_only("Se desasigno la categoría al producto correctamente.")
            }
        }
    }
}

impl From<ProductCategories> for ApiResponse<ProductCategories> {
    fn from(categories: ProductCategories) -> Self {
        ApiResponse::ok(categories)
    }
}
