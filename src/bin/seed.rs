use catalog_api::{
    config::AppConfig,
    db::{OrmConn, create_orm_conn, run_migrations},
    entity::{brands, categories, products, sections},
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let brand_ids = seed_brands(&orm).await?;
    let section_ids = seed_sections(&orm).await?;
    seed_categories(&orm).await?;
    seed_products(&orm, &brand_ids, &section_ids).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_brands(orm: &OrmConn) -> anyhow::Result<Vec<i32>> {
    let mut ids = Vec::new();
    for name in ["Bosch", "Stanley", "Truper"] {
        let existing = brands::Entity::find()
            .filter(brands::Column::Name.eq(name))
            .one(orm)
            .await?;
        let brand = match existing {
            Some(b) => b,
            None => {
                brands::ActiveModel {
                    id: NotSet,
                    name: Set(name.to_string()),
                }
                .insert(orm)
                .await?
            }
        };
        ids.push(brand.id);
    }
    println!("Ensured brands");
    Ok(ids)
}

async fn seed_sections(orm: &OrmConn) -> anyhow::Result<Vec<i32>> {
    let mut ids = Vec::new();
    for description in ["Herramientas eléctricas", "Herramientas manuales"] {
        let existing = sections::Entity::find()
            .filter(sections::Column::Description.eq(description))
            .one(orm)
            .await?;
        let section = match existing {
            Some(s) => s,
            None => {
                sections::ActiveModel {
                    id: NotSet,
                    description: Set(description.to_string()),
                }
                .insert(orm)
                .await?
            }
        };
        ids.push(section.id);
    }
    println!("Ensured sections");
    Ok(ids)
}

async fn seed_categories(orm: &OrmConn) -> anyhow::Result<()> {
    for name in ["Ofertas", "Novedades", "Profesional"] {
        let existing = categories::Entity::find()
            .filter(categories::Column::Name.eq(name))
            .one(orm)
            .await?;
        if existing.is_none() {
            categories::ActiveModel {
                id: NotSet,
                name: Set(name.to_string()),
            }
            .insert(orm)
            .await?;
        }
    }
    println!("Ensured categories");
    Ok(())
}

async fn seed_products(orm: &OrmConn, brand_ids: &[i32], section_ids: &[i32]) -> anyhow::Result<()> {
    let catalog = vec![
        ("Taladro percutor", "Taladro de 750W", 89.90, 12, 0, 0),
        ("Amoladora angular", "Disco de 115 mm", 64.50, 12, 0, 0),
        ("Martillo de uña", "Mango de fibra", 15.25, 40, 1, 1),
        ("Juego de destornilladores", "6 piezas", 22.00, 7, 2, 1),
    ];

    for (name, description, price, stock, brand, section) in catalog {
        let existing = products::Entity::find()
            .filter(products::Column::Name.eq(name))
            .one(orm)
            .await?;
        if existing.is_some() {
            continue;
        }
        products::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
            price: Set(price),
            stock: Set(Some(stock)),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
            brand_id: Set(brand_ids[brand]),
            section_id: Set(section_ids[section]),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
