use crate::di::Container;
use crate::error::Result;

/// A group of providers registered together
///
/// # Example
/// ```
/// use product_store::di::{Container, ContainerBuilder};
/// use product_store::module::Module;
/// use product_store::modules::product::{InMemoryProductRepository, ProductModule, ProductRepository, ProductService};
/// use std::sync::Arc;
///
/// let mut container = ContainerBuilder::new()
///     .bind::<dyn ProductRepository>(Arc::new(InMemoryProductRepository::new()))
///     .build();
/// ProductModule::register(&mut container).unwrap();
/// assert!(container.contains::<ProductService>());
/// ```
pub trait Module {
    /// Register all providers and controllers in this module
    fn register(container: &mut Container) -> Result<()>;
}
