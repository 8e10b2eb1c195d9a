use crate::di::Container;
use std::sync::Arc;

/// Fluent construction of a [`Container`]
///
/// # Example
/// ```
/// use product_store::di::ContainerBuilder;
/// use product_store::modules::product::{InMemoryProductRepository, ProductRepository};
/// use std::sync::Arc;
///
/// let container = ContainerBuilder::new()
///     .bind::<dyn ProductRepository>(Arc::new(InMemoryProductRepository::new()))
///     .build();
/// assert!(container.contains_trait::<dyn ProductRepository>());
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Register a concrete service instance
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    /// Bind a trait object so it can be resolved as `Arc<dyn Trait>`
    pub fn bind<T: ?Sized + 'static + Send + Sync>(mut self, instance: Arc<T>) -> Self {
        self.container.bind(instance);
        self
    }

    pub fn build(self) -> Container {
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
