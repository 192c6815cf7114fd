//! Per-entity data access on top of SeaORM.
//!
//! Every repository borrows a connection, so the same code runs against the
//! pool or inside a transaction.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};

use crate::entity::{brands, categories, sections};

mod product_categories;
mod products;

pub use product_categories::ProductCategoryRepository;
pub use products::{ProductListingRow, ProductRepository};

pub type BrandRepository<'a, C> = Repository<'a, C, brands::Entity>;
pub type SectionRepository<'a, C> = Repository<'a, C, sections::Entity>;
pub type CategoryRepository<'a, C> = Repository<'a, C, categories::Entity>;

/// find-by-id, find-all, insert, update and delete for an entity keyed by an
/// integer id.
pub struct Repository<'a, C, E> {
    conn: &'a C,
    entity: PhantomData<E>,
}

impl<'a, C, E> Repository<'a, C, E>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    pub fn new(conn: &'a C) -> Self {
        Self {
            conn,
            entity: PhantomData,
        }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.conn).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn find_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(self.conn).await
    }

    pub async fn insert<A>(&self, active: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'a,
        E::Model: IntoActiveModel<A>,
    {
        active.insert(self.conn).await
    }

    pub async fn update<A>(&self, active: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'a,
        E::Model: IntoActiveModel<A>,
    {
        active.update(self.conn).await
    }

    /// Hard delete. Returns the number of removed rows.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = E::delete_by_id(id).exec(self.conn).await?;
        Ok(result.rows_affected)
    }
}
