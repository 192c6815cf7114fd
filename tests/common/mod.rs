#![allow(dead_code)]

use catalog_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{brands, categories, product_categories, products, sections},
    state::AppState,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};

/// Fresh application state over an in-memory SQLite database with the
/// schema applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn(&AppConfig::in_memory()).await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(orm))
}

pub async fn create_brand(state: &AppState, name: &str) -> anyhow::Result<i32> {
    let brand = brands::ActiveModel {
        id: NotSet,
        name: Set(name.into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(brand.id)
}

pub async fn create_section(state: &AppState, description: &str) -> anyhow::Result<i32> {
    let section = sections::ActiveModel {
        id: NotSet,
        description: Set(description.into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(section.id)
}

pub async fn create_category(state: &AppState, name: &str) -> anyhow::Result<i32> {
    let category = categories::ActiveModel {
        id: NotSet,
        name: Set(name.into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(category.id)
}

pub async fn create_product(
    state: &AppState,
    name: &str,
    stock: Option<i32>,
    brand_id: i32,
    section_id: i32,
) -> anyhow::Result<i32> {
    let product = products::ActiveModel {
        id: NotSet,
        name: Set(name.into()),
        description: Set(None),
        price: Set(10.0),
        stock: Set(stock),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
        brand_id: Set(brand_id),
        section_id: Set(section_id),
    }
    .insert(&state.orm)
    .await?;
    Ok(product.id)
}

pub async fn link(state: &AppState, product_id: i32, category_id: i32) -> anyhow::Result<()> {
    product_categories::ActiveModel {
        product_id: Set(product_id),
        category_id: Set(category_id),
    }
    .insert(&state.orm)
    .await?;
    Ok(())
}

/// A brand and a section every product in a test can point at.
pub async fn brand_and_section(state: &AppState) -> anyhow::Result<(i32, i32)> {
    let brand = create_brand(state, "Bosch").await?;
    let section = create_section(state, "Herramientas").await?;
    Ok((brand, section))
}
