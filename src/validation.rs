//! Product payload validation, kept apart from the records and repositories.

use std::{collections::BTreeMap, str::FromStr};

use sea_orm::ConnectionTrait;
use validator::{Validate, ValidationErrors};

use crate::{
    dto::products::{NumberInput, ProductPayload},
    error::{AppError, AppResult},
    repository::{BrandRepository, SectionRepository},
};

/// Field name to the messages raised for it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A payload that passed every rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: Option<i32>,
    pub brand_id: i32,
    pub section_id: i32,
}

pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut map = FieldErrors::new();
    for (field, failures) in errors.field_errors() {
        let messages = map.entry(field.to_string()).or_default();
        for failure in failures {
            let message = failure
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid."));
            if !messages.contains(&message) {
                messages.push(message);
            }
        }
    }
    map
}

/// Runs the field rules, converts the numeric fields, then checks that
/// `marca_id` and `seccion_id` point at existing rows. A check is skipped
/// when its field already failed.
pub async fn validate_product<C>(conn: &C, payload: &ProductPayload) -> AppResult<ValidProduct>
where
    C: ConnectionTrait,
{
    let mut errors = match payload.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => field_errors(&e),
    };

    let price = match number(
        &mut errors,
        "precio",
        payload.precio.clone(),
        "Precio must be a number.",
    ) {
        Some(p) if !p.is_finite() => {
            push(&mut errors, "precio", "Precio must be a number.");
            None
        }
        other => other,
    };
    let stock = number(
        &mut errors,
        "stock",
        payload.stock.clone().flatten(),
        "Stock must be an integer.",
    );
    let brand_id = number(
        &mut errors,
        "marca_id",
        payload.marca_id.clone(),
        "Marca ID must be an integer.",
    );
    let section_id = number(
        &mut errors,
        "seccion_id",
        payload.seccion_id.clone(),
        "Seccion ID must be an integer.",
    );

    if let Some(id) = brand_id.filter(|_| !errors.contains_key("marca_id")) {
        if !BrandRepository::new(conn).exists(id).await? {
            push(&mut errors, "marca_id", "Marca ID is invalid.");
        }
    }

    if let Some(id) = section_id.filter(|_| !errors.contains_key("seccion_id")) {
        if !SectionRepository::new(conn).exists(id).await? {
            push(&mut errors, "seccion_id", "Seccion ID is invalid.");
        }
    }

    let (Some(name), Some(price), Some(brand_id), Some(section_id)) =
        (payload.nombre.clone(), price, brand_id, section_id)
    else {
        return Err(AppError::Validation(errors));
    };

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(ValidProduct {
        name,
        description: payload.descripcion.clone().flatten(),
        price,
        stock,
        brand_id,
        section_id,
    })
}

/// Converts a numeric input, recording `message` under `field` when the
/// value is present but not a number of the right kind.
fn number<T: FromStr>(
    errors: &mut FieldErrors,
    field: &str,
    input: Option<NumberInput<T>>,
    message: &str,
) -> Option<T> {
    let input = input?;
    let value = input.value();
    if value.is_none() {
        push(errors, field, message);
    }
    value
}

fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    let messages = errors.entry(field.to_string()).or_default();
    if !messages.iter().any(|m| m == message) {
        messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ProductPayload {
        ProductPayload {
            nombre: Some("Taladro".into()),
            precio: Some(59.9.into()),
            stock: Some(Some(4.into())),
            marca_id: Some(1.into()),
            seccion_id: Some(2.into()),
            ..Default::default()
        }
    }

    #[test]
    fn missing_required_fields_are_reported_per_field() {
        let payload = ProductPayload {
            descripcion: Some(Some("sin nombre".into())),
            ..Default::default()
        };
        let errors = field_errors(&payload.validate().unwrap_err());

        assert_eq!(errors["nombre"], vec!["Nombre cannot be blank."]);
        assert_eq!(errors["precio"], vec!["Precio cannot be blank."]);
        assert_eq!(errors["marca_id"], vec!["Marca ID cannot be blank."]);
        assert_eq!(errors["seccion_id"], vec!["Seccion ID cannot be blank."]);
        assert!(!errors.contains_key("descripcion"));
    }

    #[test]
    fn empty_or_whitespace_name_is_blank() {
        for name in ["", "   ", "\t\n"] {
            let payload = ProductPayload {
                nombre: Some(name.into()),
                ..complete()
            };
            let errors = field_errors(&payload.validate().unwrap_err());
            assert_eq!(errors.len(), 1);
            assert_eq!(errors["nombre"], vec!["Nombre cannot be blank."]);
        }
    }

    #[test]
    fn complete_payload_passes_field_rules() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn numeric_strings_convert_and_words_are_reported() {
        let mut errors = FieldErrors::new();
        let parsed = number(
            &mut errors,
            "precio",
            Some(NumberInput::<f64>::Text(" 12.5 ".into())),
            "Precio must be a number.",
        );
        assert_eq!(parsed, Some(12.5));
        assert!(errors.is_empty());

        let parsed = number(
            &mut errors,
            "stock",
            Some(NumberInput::<i32>::Text("muchos".into())),
            "Stock must be an integer.",
        );
        assert_eq!(parsed, None);
        assert_eq!(errors["stock"], vec!["Stock must be an integer."]);

        let absent = number::<i32>(&mut errors, "marca_id", None, "Marca ID must be an integer.");
        assert_eq!(absent, None);
        assert!(!errors.contains_key("marca_id"));
    }

    #[test]
    fn payload_keeps_mistyped_numbers_for_field_errors() {
        let payload: ProductPayload = serde_json::from_str(
            r#"{"nombre":"Taladro","precio":"caro","stock":4.5,"marca_id":"7","seccion_id":true}"#,
        )
        .unwrap();

        assert_eq!(payload.precio.clone().and_then(NumberInput::value), None);
        assert_eq!(payload.stock.clone().flatten().and_then(NumberInput::value), None);
        assert_eq!(payload.marca_id.clone().and_then(NumberInput::value), Some(7));
        assert_eq!(payload.seccion_id.clone().and_then(NumberInput::value), None);
    }

    #[test]
    fn explicit_null_differs_from_absent() {
        let cleared: ProductPayload =
            serde_json::from_str(r#"{"stock":null,"descripcion":null}"#).unwrap();
        assert_eq!(cleared.stock, Some(None));
        assert_eq!(cleared.descripcion, Some(None));

        let untouched: ProductPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(untouched.stock, None);
        assert_eq!(untouched.descripcion, None);
    }
}
