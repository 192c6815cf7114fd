use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryOrder, Set,
};

use crate::entity::{
    categories,
    product_categories::{ActiveModel, Entity as ProductCategories},
    products,
};

/// Access to the product/category join table.
pub struct ProductCategoryRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ProductCategoryRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn is_linked(&self, product_id: i32, category_id: i32) -> Result<bool, DbErr> {
        let link = ProductCategories::find_by_id((product_id, category_id))
            .one(self.conn)
            .await?;
        Ok(link.is_some())
    }

    pub async fn link(&self, product_id: i32, category_id: i32) -> Result<(), DbErr> {
        ActiveModel {
            product_id: Set(product_id),
            category_id: Set(category_id),
        }
        .insert(self.conn)
        .await?;
        Ok(())
    }

    /// Removes the join row. Returns the number of deleted rows.
    pub async fn unlink(&self, product_id: i32, category_id: i32) -> Result<u64, DbErr> {
        let result = ProductCategories::delete_by_id((product_id, category_id))
            .exec(self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn categories_of(
        &self,
        product: &products::Model,
    ) -> Result<Vec<categories::Model>, DbErr> {
        product
            .find_related(categories::Entity)
            .order_by_asc(categories::Column::Id)
            .all(self.conn)
            .await
    }
}
