use anyhow::{Context, Result};
use product::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, FindLowStock, UpdatePriceRequest},
        response::product::WriteOutcome,
    },
    repository::ProductRepository,
};
use rust_decimal::Decimal;
use shared::{config::Config, utils::init_logger};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::init().context("Failed to load configuration")?;

    let _log_guard = init_logger("product", config.dev_mode, config.enable_file_log);

    info!("🚀 Starting product inventory run...");

    let mut repository = ProductRepository::new(&config.database);

    if let Err(e) = repository.connect().await {
        error!("💀 The application could not run because of a database connection error: {e}");
        return Ok(());
    }

    run(&mut repository).await;

    if let Err(e) = repository.disconnect().await {
        error!("Failed to close the database connection: {e}");
    }

    info!("✅ Product inventory run complete.");
    Ok(())
}

async fn run(repository: &mut ProductRepository) {
    let webcam = CreateProductRequest::new(
        "Webcam HD",
        "Cámara web para videoconferencias",
        Decimal::new(3500, 2),
        60,
    );

    match repository.create_product(&webcam).await {
        Ok(id) => info!("Product '{}' created with ID {}", webcam.name, id),
        Err(e) => error!("Failed to create product: {e}"),
    }

    let low_stock = FindLowStock::below(25);
    match repository.find_low_stock(&low_stock).await {
        Ok(products) => {
            info!("--- Products with stock below {} ---", low_stock.threshold);
            for product in &products {
                info!(
                    "Name: {}, Stock: {}, Price: {}",
                    product.name, product.stock, product.price
                );
            }
        }
        Err(e) => error!("Failed to read products: {e}"),
    }

    let new_price = UpdatePriceRequest {
        id: 5,
        price: Decimal::new(10550, 2),
    };
    match repository.update_price(&new_price).await {
        Ok(WriteOutcome::Applied) => info!(
            "Price of product ID {} updated to {}",
            new_price.id, new_price.price
        ),
        Ok(WriteOutcome::NotFound) => {
            info!("No product found with ID {} to update", new_price.id)
        }
        Err(e) => error!("Failed to update product: {e}"),
    }

    for id in [1, 999] {
        match repository.delete_product(id).await {
            Ok(WriteOutcome::Applied) => info!("Product ID {id} deleted"),
            Ok(WriteOutcome::NotFound) => info!("No product found with ID {id} to delete"),
            Err(e) => error!("Failed to delete product: {e}"),
        }
    }
}
