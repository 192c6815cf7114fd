use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::entity::{brands, categories, products, sections};

/// A catalog product as it travels on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: Option<i32>,
    #[serde(rename = "fecha_creacion")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "fecha_actualizacion")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "marca_id")]
    pub brand_id: i32,
    #[serde(rename = "seccion_id")]
    pub section_id: i32,
}

/// Product row of the paginated listing, denormalized with the brand name
/// and the section description.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductListing {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "marca")]
    pub brand_name: Option<String>,
    #[serde(rename = "seccion")]
    pub section_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Brand {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Section {
    pub id: i32,
    #[serde(rename = "descripcion")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            stock: model.stock,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.map(|dt| dt.with_timezone(&Utc)),
            brand_id: model.brand_id,
            section_id: model.section_id,
        }
    }
}

impl From<brands::Model> for Brand {
    fn from(model: brands::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<sections::Model> for Section {
    fn from(model: sections::Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
        }
    }
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
