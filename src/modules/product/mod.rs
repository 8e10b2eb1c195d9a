use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::module::Module;
use std::sync::Arc;

pub mod controller;
pub mod entity;
pub mod model;
pub mod repository;
pub mod seed;
pub mod service;
pub mod validation;

pub use controller::ProductController;
pub use model::{Product, ProductFields, ProductPatch, ProductPayload};
pub use repository::{InMemoryProductRepository, ProductRepository, SeaOrmProductRepository};
pub use seed::ProductSeeder;
pub use service::ProductService;
pub use validation::{ProductField, ValidationMode, validate};

/// Repository binding, service and controller
///
/// A repository already bound in the container is kept, so tests can supply
/// [`InMemoryProductRepository`]; otherwise the SQLite repository is built
/// from the registered `Database`.
pub struct ProductModule;

impl Module for ProductModule {
    fn register(container: &mut Container) -> Result<()> {
        if !container.contains_trait::<dyn ProductRepository>() {
            let repository = SeaOrmProductRepository::inject(container)?;
            container.bind::<dyn ProductRepository>(Arc::new(repository));
        }
        let service = ProductService::inject(container)?;
        container.register(service);
        let controller = ProductController::inject(container)?;
        container.register(controller);
        Ok(())
    }
}
