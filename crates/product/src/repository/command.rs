use super::{ProductRepository, rollback};
use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::{
        requests::product::{CreateProductRequest, UpdatePriceRequest},
        response::product::WriteOutcome,
    },
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use sqlx::Connection;
use tracing::error;

#[async_trait]
impl ProductCommandRepositoryTrait for ProductRepository {
    async fn create_product(&mut self, req: &CreateProductRequest) -> Result<i32, RepositoryError> {
        let conn = self.connection()?;
        let mut tx = conn.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO productos (nombre, descripcion, precio, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.stock)
        .fetch_one(&mut *tx)
        .await;

        let id = match result {
            Ok(id) => id,
            Err(err) => {
                error!("❌ Failed to create product {}: {:?}", req.name, err);
                rollback(tx, "product insert").await;
                return Err(RepositoryError::from_statement(err));
            }
        };

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit product {}: {:?}", req.name, e);
            RepositoryError::from_statement(e)
        })?;

        Ok(id)
    }

    async fn update_price(
        &mut self,
        req: &UpdatePriceRequest,
    ) -> Result<WriteOutcome, RepositoryError> {
        let conn = self.connection()?;
        let mut tx = conn.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE productos
            SET precio = $1
            WHERE id = $2
            "#,
        )
        .bind(req.price)
        .bind(req.id)
        .execute(&mut *tx)
        .await;

        let rows = match result {
            Ok(done) => done.rows_affected(),
            Err(err) => {
                error!("❌ Failed to update price of product ID {}: {:?}", req.id, err);
                rollback(tx, "price update").await;
                return Err(RepositoryError::from_statement(err));
            }
        };

        if WriteOutcome::from_rows_affected(rows) == WriteOutcome::NotFound {
            rollback(tx, "empty price update").await;
            return Ok(WriteOutcome::NotFound);
        }

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit price of product ID {}: {:?}", req.id, e);
            RepositoryError::from_statement(e)
        })?;

        Ok(WriteOutcome::Applied)
    }

    async fn delete_product(&mut self, id: i32) -> Result<WriteOutcome, RepositoryError> {
        let conn = self.connection()?;
        let mut tx = conn.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM productos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await;

        let rows = match result {
            Ok(done) => done.rows_affected(),
            Err(err) => {
                error!("❌ Failed to delete product {}: {:?}", id, err);
                rollback(tx, "product delete").await;
                return Err(RepositoryError::from_statement(err));
            }
        };

        if WriteOutcome::from_rows_affected(rows) == WriteOutcome::NotFound {
            rollback(tx, "empty product delete").await;
            return Ok(WriteOutcome::NotFound);
        }

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit delete of product {}: {:?}", id, e);
            RepositoryError::from_statement(e)
        })?;

        Ok(WriteOutcome::Applied)
    }
}
