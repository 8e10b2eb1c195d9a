use super::model::{Product, ProductPayload};
use super::service::ProductService;
use crate::common::{ApiResponse, MessageBody};
use crate::di::{Container, Injectable};
use crate::error::{Result, StoreError};
use crate::pipe::{JsonObjectPipe, ParseIdPipe, Pipe, RawBody};
use axum::Router;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::get;
use std::sync::Arc;

type IdPath = std::result::Result<Path<String>, PathRejection>;

/// HTTP surface of the product resource
///
/// The path id is parsed before the body is read, so a bad id always wins
/// over a bad payload.
pub struct ProductController {
    service: Arc<ProductService>,
}

impl Injectable for ProductController {
    fn inject(container: &Container) -> Result<Self> {
        Ok(Self {
            service: container.resolve::<ProductService>()?,
        })
    }
}

impl ProductController {
    pub fn base_path() -> &'static str {
        "/products"
    }

    pub fn router(controller: Arc<Self>) -> Router {
        Router::new()
            .route("/", get(list).post(create))
            .route(
                "/{id}",
                get(get_one).put(replace).patch(patch).delete(remove),
            )
            .with_state(controller)
    }
}

/// A segment axum cannot decode (e.g. invalid UTF-8) is an invalid id too.
async fn parse_id(path: IdPath) -> Result<i64> {
    let Path(raw) = path.map_err(|rejection| StoreError::InvalidIdentifier(rejection.body_text()))?;
    ParseIdPipe.transform(raw).await
}

async fn read_payload(headers: &HeaderMap, body: Bytes) -> Result<ProductPayload> {
    let map = JsonObjectPipe.transform(RawBody::new(headers, body)).await?;
    Ok(ProductPayload::from(map))
}

async fn list(State(controller): State<Arc<ProductController>>) -> Result<ApiResponse<Vec<Product>>> {
    Ok(ApiResponse::ok(controller.service.list().await?))
}

async fn get_one(
    State(controller): State<Arc<ProductController>>,
    path: IdPath,
) -> Result<ApiResponse<Product>> {
    let id = parse_id(path).await?;
    Ok(ApiResponse::ok(controller.service.get(id).await?))
}

async fn create(
    State(controller): State<Arc<ProductController>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ApiResponse<Product>> {
    let payload = read_payload(&headers, body).await?;
    Ok(ApiResponse::created(controller.service.create(payload).await?))
}

async fn replace(
    State(controller): State<Arc<ProductController>>,
    path: IdPath,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ApiResponse<Product>> {
    let id = parse_id(path).await?;
    let payload = read_payload(&headers, body).await?;
    Ok(ApiResponse::ok(controller.service.replace(id, payload).await?))
}

async fn patch(
    State(controller): State<Arc<ProductController>>,
    path: IdPath,
    headers: HeaderMap,
    body: Bytes,
) -> Result<ApiResponse<Product>> {
    let id = parse_id(path).await?;
    let payload = read_payload(&headers, body).await?;
    Ok(ApiResponse::ok(controller.service.patch(id, payload).await?))
}

async fn remove(
    State(controller): State<Arc<ProductController>>,
    path: IdPath,
) -> Result<ApiResponse<MessageBody>> {
    let id = parse_id(path).await?;
    controller.service.delete(id).await?;
    Ok(ApiResponse::ok(MessageBody::new("Product deleted")))
}
