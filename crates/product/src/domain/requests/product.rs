use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
}

impl CreateProductRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            stock,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePriceRequest {
    pub id: i32,
    pub price: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FindLowStock {
    pub threshold: i32,
}

impl Default for FindLowStock {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl FindLowStock {
    pub fn below(threshold: i32) -> Self {
        Self { threshold }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_stock_threshold_defaults_to_twenty() {
        assert_eq!(FindLowStock::default().threshold, 20);
        assert_eq!(FindLowStock::below(25).threshold, 25);
    }
}
