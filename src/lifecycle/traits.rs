//! Lifecycle hook traits

use super::LifecycleError;
use async_trait::async_trait;

/// Called once dependencies are wired, before any request is served
///
/// `Database` uses it to create the `products` table.
#[async_trait]
pub trait OnModuleInit: Send + Sync {
    async fn on_module_init(&mut self) -> Result<(), LifecycleError>;
}

/// Called after every `OnModuleInit` hook has succeeded
///
/// This is the last hook before the listener starts, so it may rely on the
/// schema being in place (`ProductSeeder` inserts the example rows here).
#[async_trait]
pub trait OnApplicationBootstrap: Send + Sync {
    async fn on_application_bootstrap(&mut self) -> Result<(), LifecycleError>;
}

/// Called during graceful shutdown, in reverse registration order
#[async_trait]
pub trait OnModuleDestroy: Send + Sync {
    async fn on_module_destroy(&mut self) -> Result<(), LifecycleError>;
}
