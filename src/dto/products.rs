use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{
    entity::products,
    models::{Product, ProductListing},
    response::{ApiResponse, PaginationMeta},
    routes::params::PageWindow,
};

/// A numeric field as the client sent it. Strings and other JSON values are
/// kept so that a bad value surfaces as a field error instead of a parse
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput<T> {
    Number(T),
    Text(String),
    #[serde(skip_serializing)]
    Other(IgnoredAny),
}

impl<T: FromStr> NumberInput<T> {
    /// The number, if the input is one or is a string that parses as one.
    pub fn value(self) -> Option<T> {
        match self {
            NumberInput::Number(n) => Some(n),
            NumberInput::Text(text) => text.trim().parse().ok(),
            NumberInput::Other(_) => None,
        }
    }
}

impl<T> From<T> for NumberInput<T> {
    fn from(n: T) -> Self {
        NumberInput::Number(n)
    }
}

// Outer None: not in the request (keep current). Some(None): explicit null.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Body of the create and update actions. Every field is optional on the
/// wire so that missing or mistyped values surface as field errors.
#[allow(clippy::option_option)]
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ProductPayload {
    #[validate(
        required(message = "Nombre cannot be blank."),
        custom(function = "not_blank", message = "Nombre cannot be blank.")
    )]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub descripcion: Option<Option<String>>,
    #[validate(required(message = "Precio cannot be blank."))]
    #[schema(value_type = Option<f64>)]
    pub precio: Option<NumberInput<f64>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i32>)]
    pub stock: Option<Option<NumberInput<i32>>>,
    #[validate(required(message = "Marca ID cannot be blank."))]
    #[schema(value_type = Option<i32>)]
    pub marca_id: Option<NumberInput<i32>>,
    #[validate(required(message = "Seccion ID cannot be blank."))]
    #[schema(value_type = Option<i32>)]
    pub seccion_id: Option<NumberInput<i32>>,
}

impl ProductPayload {
    /// Fills the fields the client left out with the stored values. An
    /// explicit null on `descripcion` or `stock` clears the value.
    pub fn merged_with(self, existing: &products::Model) -> Self {
        Self {
            nombre: self.nombre.or_else(|| Some(existing.name.clone())),
            descripcion: self
                .descripcion
                .or_else(|| Some(existing.description.clone())),
            precio: self.precio.or(Some(existing.price.into())),
            stock: self.stock.or(Some(existing.stock.map(NumberInput::from))),
            marca_id: self.marca_id.or(Some(existing.brand_id.into())),
            seccion_id: self.seccion_id.or(Some(existing.section_id.into())),
        }
    }
}

/// One page of the product listing.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub items: Vec<ProductListing>,
    pub window: PageWindow,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListBody {
    pub data: Vec<ProductListing>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductBody {
    pub producto: Product,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDataBody {
    pub data: Product,
}

impl From<ProductPage> for ApiResponse<ProductListBody> {
    fn from(page: ProductPage) -> Self {
        ApiResponse::ok(ProductListBody {
            data: page.items,
            pagination: page.window.into(),
        })
    }
}

impl From<Product> for ApiResponse<ProductBody> {
    fn from(producto: Product) -> Self {
        ApiResponse::ok(ProductBody { producto })
    }
}

pub fn product_created(product: Product) -> ApiResponse<ProductDataBody> {
    ApiResponse::created(ProductDataBody { data: product })
        .with_message("El producto se creo con éxito.")
}

pub fn product_updated(product: Product) -> ApiResponse<ProductDataBody> {
    ApiResponse::ok(ProductDataBody { data: product })
        .with_message("El producto se actualizó con éxito.")
}
