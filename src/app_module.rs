use crate::config::AppConfig;
use crate::di::{Container, ContainerBuilder, Injectable};
use crate::error::Result;
use crate::infrastructure::Database;
use crate::interceptor::logging_interceptor;
use crate::lifecycle::Application;
use crate::module::Module;
use crate::modules::home::HomeController;
use crate::modules::product::{ProductController, ProductModule, ProductSeeder};
use axum::Router;
use axum::middleware;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Root module: the product module plus the home banner
///
/// Expects `AppConfig` to be registered already.
pub struct AppModule;

impl Module for AppModule {
    fn register(container: &mut Container) -> Result<()> {
        ProductModule::register(container)?;
        let home = HomeController::inject(container)?;
        container.register(home);
        Ok(())
    }
}

/// Connect to the store, wire the container and run the startup hooks
pub async fn bootstrap(config: AppConfig) -> anyhow::Result<Application> {
    let database = Database::connect(&config.database_url).await?;
    let init_timeout = config.init_timeout;

    let mut container = ContainerBuilder::new()
        .register(config)
        .register(database.clone())
        .build();
    AppModule::register(&mut container)?;

    let seeder = ProductSeeder::inject(&container)?;

    let app = Application::builder()
        .container(container)
        .register_lifecycle(Arc::new(RwLock::new(database)), "Database")
        .on_bootstrap(Arc::new(RwLock::new(seeder)), "ProductSeeder")
        .init_timeout(init_timeout)
        .build()
        .await?;
    Ok(app)
}

/// Assemble the HTTP routes from a registered container
pub fn build_router(container: &Container) -> Result<Router> {
    let home = container.resolve::<HomeController>()?;
    let products = container.resolve::<ProductController>()?;

    Ok(Router::new()
        .merge(HomeController::router(home))
        .nest(
            ProductController::base_path(),
            ProductController::router(products),
        )
        .layer(middleware::from_fn(logging_interceptor)))
}
