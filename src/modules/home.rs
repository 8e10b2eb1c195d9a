use crate::config::AppConfig;
use crate::di::{Container, Injectable};
use crate::error::Result;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::HOST;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: String,
    pub hostname: String,
    pub products_url: String,
}

/// `GET /` banner pointing clients at the product collection
pub struct HomeController {
    config: Arc<AppConfig>,
}

impl Injectable for HomeController {
    fn inject(container: &Container) -> Result<Self> {
        Ok(Self {
            config: container.resolve::<AppConfig>()?,
        })
    }
}

impl HomeController {
    pub fn router(controller: Arc<Self>) -> Router {
        Router::new().route("/", get(welcome)).with_state(controller)
    }

    fn welcome(&self, host: Option<&str>) -> Welcome {
        let host = host
            .map(str::to_owned)
            .unwrap_or_else(|| self.config.bind_address());
        Welcome {
            message: "Welcome to Apple Products API".to_string(),
            hostname: self.config.hostname.clone(),
            products_url: format!("http://{}/products", host),
        }
    }
}

async fn welcome(State(controller): State<Arc<HomeController>>, headers: HeaderMap) -> Json<Welcome> {
    let host = headers.get(HOST).and_then(|value| value.to_str().ok());
    Json(controller.welcome(host))
}
