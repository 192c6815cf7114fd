use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    prelude::DateTimeWithTimeZone,
};

use super::Repository;
use crate::entity::{
    brands, products,
    products::{Column, Entity as Products, Relation},
    sections,
};

pub type ProductRepository<'a, C> = Repository<'a, C, Products>;

/// Product columns plus the joined brand name and section description.
#[derive(Debug, Clone, FromQueryResult)]
pub struct ProductListingRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
    pub brand_id: i32,
    pub section_id: i32,
    pub brand_name: Option<String>,
    pub section_description: Option<String>,
}

impl<C: ConnectionTrait> Repository<'_, C, Products> {
    pub async fn count(&self) -> Result<u64, DbErr> {
        Products::find().count(self.conn).await
    }

    /// One page of the listing ordered by id. `limit = None` returns every
    /// row from `offset` on.
    pub async fn list_with_names(
        &self,
        limit: Option<u64>,
        offset: u64,
    ) -> Result<Vec<ProductListingRow>, DbErr> {
        let mut finder = Products::find()
            .column_as(brands::Column::Name, "brand_name")
            .column_as(sections::Column::Description, "section_description")
            .join(JoinType::LeftJoin, Relation::Brand.def())
            .join(JoinType::LeftJoin, Relation::Section.def())
            .order_by_asc(Column::Id);

        if offset > 0 {
            finder = finder.offset(offset);
        }
        if let Some(limit) = limit {
            finder = finder.limit(limit);
        }

        finder
            .into_model::<ProductListingRow>()
            .all(self.conn)
            .await
    }

    pub async fn find_by_section(&self, section_id: i32) -> Result<Vec<products::Model>, DbErr> {
        Products::find()
            .filter(Column::SectionId.eq(section_id))
            .order_by_asc(Column::Id)
            .all(self.conn)
            .await
    }

    /// `SUM(stock)` over the brand's products. Null stock does not count and
    /// a brand without products sums to zero.
    pub async fn total_stock_by_brand(&self, brand_id: i32) -> Result<i64, DbErr> {
        let total: Option<Option<i64>> = Products::find()
            .select_only()
            .column_as(Column::Stock.sum(), "total")
            .filter(Column::BrandId.eq(brand_id))
            .into_tuple()
            .one(self.conn)
            .await?;
        Ok(total.flatten().unwrap_or(0))
    }

    /// Highest stock value in the catalog, `None` when no product has one.
    pub async fn max_stock(&self) -> Result<Option<i32>, DbErr> {
        let max: Option<Option<i32>> = Products::find()
            .select_only()
            .column_as(Column::Stock.max(), "max_stock")
            .into_tuple()
            .one(self.conn)
            .await?;
        Ok(max.flatten())
    }

    pub async fn find_by_stock(&self, stock: i32) -> Result<Vec<products::Model>, DbErr> {
        Products::find()
            .filter(Column::Stock.eq(stock))
            .order_by_asc(Column::Id)
            .all(self.conn)
            .await
    }
}
