use super::ProductRepository;
use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::requests::product::FindLowStock,
    model::product::{LowStockProduct, Product as ProductModel},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{error, info};

#[async_trait]
impl ProductQueryRepositoryTrait for ProductRepository {
    async fn find_low_stock(
        &mut self,
        req: &FindLowStock,
    ) -> Result<Vec<LowStockProduct>, RepositoryError> {
        info!("📉 Fetching products with stock below {}", req.threshold);

        let conn = self.connection()?;

        let products = sqlx::query_as::<_, LowStockProduct>(
            r#"
            SELECT nombre, stock, precio
            FROM productos
            WHERE stock < $1
            ORDER BY stock DESC, id ASC
            "#,
        )
        .bind(req.threshold)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch low-stock products: {:?}", e);
            RepositoryError::from_statement(e)
        })?;

        Ok(products)
    }

    async fn find_by_id(&mut self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let conn = self.connection()?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, nombre, descripcion, precio, stock
            FROM productos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {}: {:?}", id, e);
            RepositoryError::from_statement(e)
        })?;

        Ok(result)
    }
}
