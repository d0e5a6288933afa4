use crate::domain::{
    requests::product::{CreateProductRequest, UpdatePriceRequest},
    response::product::WriteOutcome,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;

/// Each method runs in its own transaction.
#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&mut self, req: &CreateProductRequest) -> Result<i32, RepositoryError>;
    async fn update_price(
        &mut self,
        req: &UpdatePriceRequest,
    ) -> Result<WriteOutcome, RepositoryError>;
    async fn delete_product(&mut self, id: i32) -> Result<WriteOutcome, RepositoryError>;
}
