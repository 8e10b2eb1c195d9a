//! # product-store
//!
//! A JSON CRUD service for product records (name, price, color,
//! description) stored in SQLite.
//!
//! | Method & path           | Success                       |
//! |-------------------------|-------------------------------|
//! | `GET /`                 | 200 service banner            |
//! | `GET /products`         | 200 every product             |
//! | `GET /products/{id}`    | 200 one product               |
//! | `POST /products`        | 201 created product           |
//! | `PUT /products/{id}`    | 200 replaced product          |
//! | `PATCH /products/{id}`  | 200 merged product            |
//! | `DELETE /products/{id}` | 200 `{"message": "Product deleted"}` |
//!
//! Services are wired through a small DI [`Container`]; the store is reached
//! only through [`modules::product::ProductRepository`], so tests can bind
//! [`modules::product::InMemoryProductRepository`] instead of SQLite.
//!
//! ```rust,no_run
//! use product_store::config::{AppConfig, ConfigService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_service(&ConfigService::from_env())?;
//!     let app = product_store::bootstrap(config).await?;
//!     let router = product_store::build_router(app.container())?;
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

pub mod app_module;
pub mod common;
pub mod config;
pub mod di;
pub mod error;
pub mod infrastructure;
pub mod interceptor;
pub mod lifecycle;
pub mod module;
pub mod modules;
pub mod pipe;

pub use app_module::{AppModule, bootstrap, build_router};
pub use common::ApiResponse;
pub use di::{Container, ContainerBuilder, Injectable};
pub use error::{Result, StoreError};
pub use module::Module;
