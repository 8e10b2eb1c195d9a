use super::model::{Product, ProductPayload};
use super::repository::ProductRepository;
use crate::di::{Container, Injectable};
use crate::error::{Result, StoreError};
use std::sync::Arc;

/// The product lifecycle: validation, persistence and read-back
///
/// Identifiers arrive already parsed; each operation validates its payload
/// before touching the repository.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl Injectable for ProductService {
    fn inject(container: &Container) -> Result<Self> {
        Ok(Self::new(container.resolve_trait::<dyn ProductRepository>()?))
    }
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Product>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    pub async fn create(&self, payload: ProductPayload) -> Result<Product> {
        let fields = payload.into_fields()?;
        let product = self.repository.insert(fields).await?;
        tracing::info!("Created product {} ({})", product.id, product.name);
        Ok(product)
    }

    /// Full update. Validation runs before the row is looked up.
    pub async fn replace(&self, id: i64, payload: ProductPayload) -> Result<Product> {
        let fields = payload.into_fields()?;
        let product = self
            .repository
            .update(id, fields)
            .await?
            .ok_or(StoreError::NotFound { id })?;
        tracing::info!("Replaced product {}", id);
        Ok(product)
    }

    /// Partial update: supplied fields win, the rest keep their stored values.
    pub async fn patch(&self, id: i64, payload: ProductPayload) -> Result<Product> {
        let patch = payload.into_patch()?;
        let product = self
            .repository
            .patch(id, patch)
            .await?
            .ok_or(StoreError::NotFound { id })?;
        tracing::info!("Patched product {}", id);
        Ok(product)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(StoreError::NotFound { id });
        }
        tracing::info!("Deleted product {}", id);
        Ok(())
    }
}
