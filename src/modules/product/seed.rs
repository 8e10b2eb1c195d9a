use super::model::ProductFields;
use super::repository::ProductRepository;
use crate::config::AppConfig;
use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::lifecycle::{LifecycleError, OnApplicationBootstrap};
use async_trait::async_trait;
use std::sync::Arc;

/// (name, price, color, description)
pub const SEED_PRODUCTS: [(&str, f64, &str, &str); 10] = [
    ("iPhone 15 Pro", 999.0, "Titanium", "Flagship phone"),
    ("iPhone 15", 799.0, "Blue", "Standard phone"),
    ("MacBook Pro", 1999.0, "Space Gray", "Powerful laptop"),
    ("MacBook Air", 1099.0, "Silver", "Lightweight laptop"),
    ("iPad Pro", 1199.0, "Silver", "Tablet for pros"),
    ("iPad Air", 699.0, "Blue", "Tablet for everyone"),
    ("Apple Watch Ultra", 799.0, "Titanium", "Premium smartwatch"),
    ("Apple Watch SE", 279.0, "Black", "Affordable smartwatch"),
    ("AirPods Pro", 249.0, "White", "Noise-cancelling earbuds"),
    ("HomePod Mini", 99.0, "Space Gray", "Smart speaker"),
];

/// Inserts the example catalogue into an empty store
pub struct ProductSeeder {
    repository: Arc<dyn ProductRepository>,
    enabled: bool,
}

impl Injectable for ProductSeeder {
    fn inject(container: &Container) -> Result<Self> {
        let config = container.resolve::<AppConfig>()?;
        Ok(Self::new(
            container.resolve_trait::<dyn ProductRepository>()?,
            config.seed_on_startup,
        ))
    }
}

impl ProductSeeder {
    pub fn new(repository: Arc<dyn ProductRepository>, enabled: bool) -> Self {
        Self {
            repository,
            enabled,
        }
    }

    /// Returns the number of rows inserted; zero when the store already had rows.
    pub async fn seed(&self) -> Result<usize> {
        if self.repository.count().await? > 0 {
            return Ok(0);
        }
        for (name, price, color, description) in SEED_PRODUCTS {
            self.repository
                .insert(ProductFields {
                    name: name.to_string(),
                    price,
                    color: color.to_string(),
                    description: description.to_string(),
                })
                .await?;
        }
        Ok(SEED_PRODUCTS.len())
    }
}

#[async_trait]
impl OnApplicationBootstrap for ProductSeeder {
    async fn on_application_bootstrap(&mut self) -> std::result::Result<(), LifecycleError> {
        if !self.enabled {
            tracing::info!("🌱 Seeding disabled");
            return Ok(());
        }
        match self.seed().await {
            Ok(0) => tracing::info!("🌱 Store already populated, skipping seed"),
            Ok(inserted) => tracing::info!("🌱 Seeded {} products", inserted),
            Err(e) => return Err(LifecycleError::init_failed(e.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::product::InMemoryProductRepository;

    #[tokio::test]
    async fn test_seed_runs_once() {
        let repository: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
        let mut seeder = ProductSeeder::new(Arc::clone(&repository), true);

        seeder.on_application_bootstrap().await.unwrap();
        seeder.on_application_bootstrap().await.unwrap();

        let products = repository.find_all().await.unwrap();
        assert_eq!(products.len(), 10);
        assert_eq!(products[0].name, "iPhone 15 Pro");
        assert_eq!(products[2].id, 3);
        assert_eq!(products[2].name, "MacBook Pro");
    }

    #[tokio::test]
    async fn test_disabled_seeder_leaves_store_empty() {
        let repository: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
        let mut seeder = ProductSeeder::new(Arc::clone(&repository), false);

        seeder.on_application_bootstrap().await.unwrap();
        assert_eq!(repository.count().await.unwrap(), 0);
    }
}
