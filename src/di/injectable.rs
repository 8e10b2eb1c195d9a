use crate::di::Container;
use crate::error::Result;

/// Types that can build themselves from the DI container
///
/// # Example
/// ```
/// use product_store::di::{Container, Injectable};
/// use product_store::modules::product::{ProductRepository, ProductService};
/// use std::sync::Arc;
///
/// struct AuditLog {
///     repository: Arc<dyn ProductRepository>,
/// }
///
/// impl Injectable for AuditLog {
///     fn inject(container: &Container) -> product_store::Result<Self> {
///         Ok(Self {
///             repository: container.resolve_trait::<dyn ProductRepository>()?,
///         })
///     }
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not registered.
    fn inject(container: &Container) -> Result<Self>;
}
