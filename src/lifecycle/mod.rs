//! Startup and shutdown hooks
//!
//! ```text
//! 1. Configuration loading
//!    ↓
//! 2. Database connection + DI container
//!    ↓
//! 3. Module registration
//!    ↓
//! 4. OnModuleInit              ← schema creation
//!    ↓
//! 5. OnApplicationBootstrap    ← seed rows
//!    ↓
//! 6. Server start ... shutdown signal (SIGTERM/SIGINT)
//!    ↓
//! 7. OnModuleDestroy           ← close the pool (reverse order)
//! ```

mod application;
mod error;
mod manager;
mod shutdown;
mod traits;

pub use application::{Application, ApplicationBuilder};
pub use error::{LifecycleError, Result};
pub use manager::LifecycleManager;
pub use shutdown::shutdown_signal;
pub use traits::{OnApplicationBootstrap, OnModuleDestroy, OnModuleInit};
