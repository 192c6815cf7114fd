pub mod brands;
pub mod categories;
pub mod product_categories;
pub mod products;
pub mod sections;

pub use brands::Entity as Brands;
pub use categories::Entity as Categories;
pub use product_categories::Entity as ProductCategories;
pub use products::Entity as Products;
pub use sections::Entity as Sections;
