use super::entity::{self, Entity as ProductEntity};
use super::model::{Product, ProductFields, ProductPatch};
use crate::di::{Container, Injectable};
use crate::error::{Result, StoreError};
use crate::infrastructure::database::Database;
use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Single-row CRUD over the `products` table
///
/// Writes return the row as read back from the store afterwards, never an
/// echo of the input.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every row, by ascending id.
    async fn find_all(&self) -> Result<Vec<Product>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;
    async fn insert(&self, fields: ProductFields) -> Result<Product>;
    /// `None` when no row has this id.
    async fn update(&self, id: i64, fields: ProductFields) -> Result<Option<Product>>;
    /// Read, merge and write as one unit. `None` when no row has this id.
    async fn patch(&self, id: i64, patch: ProductPatch) -> Result<Option<Product>>;
    /// `false` when no row has this id.
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn count(&self) -> Result<u64>;
}

/// SQLite-backed repository
pub struct SeaOrmProductRepository {
    conn: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

impl Injectable for SeaOrmProductRepository {
    fn inject(container: &Container) -> Result<Self> {
        let database = container.resolve::<Database>()?;
        Ok(Self::new(database.connection().clone()))
    }
}

fn active_model(fields: ProductFields) -> entity::ActiveModel {
    entity::ActiveModel {
        name: Set(fields.name),
        price: Set(fields.price),
        color: Set(fields.color),
        description: Set(fields.description),
        ..Default::default()
    }
}

async fn select_one<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Option<Product>> {
    let row = ProductEntity::find_by_id(id).one(conn).await?;
    Ok(row.map(Product::from))
}

/// Returns whether a row matched.
async fn write_fields<C: ConnectionTrait>(conn: &C, id: i64, fields: ProductFields) -> Result<bool> {
    let result = ProductEntity::update_many()
        .set(active_model(fields))
        .filter(entity::Column::Id.eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected > 0)
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows = ProductEntity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        select_one(&self.conn, id).await
    }

    async fn insert(&self, fields: ProductFields) -> Result<Product> {
        let inserted = ProductEntity::insert(active_model(fields))
            .exec(&self.conn)
            .await?;
        let id = inserted.last_insert_id;
        tracing::debug!("Inserted product {}", id);
        select_one(&self.conn, id)
            .await?
            .ok_or_else(|| StoreError::Storage(format!("product {id} missing after insert")))
    }

    async fn update(&self, id: i64, fields: ProductFields) -> Result<Option<Product>> {
        if !write_fields(&self.conn, id, fields).await? {
            return Ok(None);
        }
        select_one(&self.conn, id).await
    }

    async fn patch(&self, id: i64, patch: ProductPatch) -> Result<Option<Product>> {
        // Dropping `txn` without commit rolls back.
        let txn = self.conn.begin().await?;
        let Some(existing) = select_one(&txn, id).await? else {
            return Ok(None);
        };
        write_fields(&txn, id, patch.apply(&existing)).await?;
        let updated = select_one(&txn, id).await?;
        txn.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = ProductEntity::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64> {
        Ok(ProductEntity::find().count(&self.conn).await?)
    }
}

#[derive(Default)]
struct InMemoryState {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

impl InMemoryState {
    fn store(&mut self, id: i64, fields: ProductFields) -> Product {
        let product = Product {
            id,
            name: fields.name,
            price: fields.price,
            color: fields.color,
            description: fields.description,
        };
        self.rows.insert(id, product.clone());
        product
    }
}

/// Process-local repository for tests and demos
///
/// Ids keep increasing after deletes, matching SQLite `AUTOINCREMENT`.
#[derive(Default)]
pub struct InMemoryProductRepository {
    state: RwLock<InMemoryState>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, fields: ProductFields) -> Result<Product> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let id = state.last_id;
        Ok(state.store(id, fields))
    }

    async fn update(&self, id: i64, fields: ProductFields) -> Result<Option<Product>> {
        let mut state = self.state.write().await;
        if !state.rows.contains_key(&id) {
            return Ok(None);
        }
        Ok(Some(state.store(id, fields)))
    }

    async fn patch(&self, id: i64, patch: ProductPatch) -> Result<Option<Product>> {
        let mut state = self.state.write().await;
        let Some(existing) = state.rows.get(&id) else {
            return Ok(None);
        };
        let merged = patch.apply(existing);
        Ok(Some(state.store(id, merged)))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.state.read().await.rows.len() as u64)
    }
}
