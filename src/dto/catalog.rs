use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::{Brand, Product, Section},
    response::ApiResponse,
};

/// A section with every product filed under it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SectionWithProducts {
    pub seccion: Section,
    pub productos: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrandStockTotal {
    pub brand: Brand,
    pub total: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TotalBody {
    pub total: i64,
}

/// Products sharing the highest stock value. `max` is `None` when no product
/// carries a stock value.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxStockProducts {
    pub max: Option<i32>,
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductsBody {
    pub productos: Vec<Product>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockCheck {
    pub has_stock: bool,
    pub stock: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StockCheckBody {
    pub data: StockCheck,
}

impl From<SectionWithProducts> for ApiResponse<SectionWithProducts> {
    fn from(section: SectionWithProducts) -> Self {
        ApiResponse::ok(section)
    }
}

impl From<BrandStockTotal> for ApiResponse<TotalBody> {
    fn from(result: BrandStockTotal) -> Self {
        ApiResponse::ok(TotalBody {
            total: result.total,
        })
        .with_message(format!(
            "Cantidad total de productos de la marca {}",
            result.brand.name
        ))
    }
}

impl From<MaxStockProducts> for ApiResponse<ProductsBody> {
    fn from(result: MaxStockProducts) -> Self {
        let message = match result.max {
            Some(max) => format!("Lista de productos con el mayor stock = {max}."),
            None => "No hay productos con stock registrado.".to_string(),
        };
        ApiResponse::ok(ProductsBody {
            productos: result.products,
        })
        .with_message(message)
    }
}

impl From<StockCheck> for ApiResponse<StockCheckBody> {
    fn from(data: StockCheck) -> Self {
        let message = if data.has_stock {
            "El producto tiene stock."
        } else {
            "El producto no tiene stock."
        };
        ApiResponse::ok(StockCheckBody { data }).with_message(message)
    }
}
