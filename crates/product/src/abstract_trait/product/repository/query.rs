use crate::{
    domain::requests::product::FindLowStock,
    model::product::{LowStockProduct, Product as ProductModel},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_low_stock(
        &mut self,
        req: &FindLowStock,
    ) -> Result<Vec<LowStockProduct>, RepositoryError>;
    async fn find_by_id(&mut self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;
}
