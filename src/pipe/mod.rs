use crate::error::Result;
use async_trait::async_trait;

pub mod builtins;

pub use builtins::{JsonObjectPipe, ParseIdPipe, RawBody};

/// Transforms or validates one piece of request input before it reaches
/// the service layer
#[async_trait]
pub trait Pipe: Send + Sync + 'static {
    type Input: Send + 'static;
    type Output: Send + 'static;

    async fn transform(&self, input: Self::Input) -> Result<Self::Output>;
}
