use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "descripcion")]
    pub description: Option<String>,
    #[sqlx(rename = "precio")]
    pub price: Decimal,
    pub stock: i32,
}

/// Row shape of the low-stock listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LowStockProduct {
    #[sqlx(rename = "nombre")]
    pub name: String,
    pub stock: i32,
    #[sqlx(rename = "precio")]
    pub price: Decimal,
}
