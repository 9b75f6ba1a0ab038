use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    db::{DbPool, OrmConn, create_orm_conn, create_pool, ensure_schema},
    entity::{
        Products,
        products::{ActiveModel, Column, Model as ProductModel},
    },
    error::{AppError, AppResult},
    models::{Product, ProductFields, SaleRecord},
};

/// Handle to the local catalog database.
///
/// Cloning is cheap; every clone shares the same single connection.
#[derive(Clone)]
pub struct CatalogStore {
    pool: DbPool,
    orm: OrmConn,
}

impl CatalogStore {
    /// Open the database and make sure the schema is in place.
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let store = Self::open(database_url).await?;
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Open the database without touching the schema.
    pub async fn open(database_url: &str) -> AppResult<Self> {
        let pool = create_pool(database_url).await?;
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: DbPool) -> Self {
        let orm = create_orm_conn(&pool);
        Self { pool, orm }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub async fn ensure_schema(&self) -> AppResult<()> {
        ensure_schema(&self.pool).await
    }

    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        let items: Vec<Product> = Products::find()
            .order_by_desc(Column::Id)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect();
        tracing::debug!(count = items.len(), "listed products");
        Ok(items)
    }

    pub async fn find_product(&self, id: i64) -> AppResult<Option<Product>> {
        let product = Products::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(product_from_entity);
        Ok(product)
    }

    pub async fn insert_product(&self, fields: &ProductFields) -> AppResult<i64> {
        let id = Products::insert(active_from_fields(fields))
            .exec(&self.orm)
            .await?
            .last_insert_id;
        tracing::info!(product_id = id, name = %fields.name, "product inserted");
        Ok(id)
    }

    pub async fn update_product(&self, id: i64, fields: &ProductFields) -> AppResult<()> {
        let result = Products::update_many()
            .set(active_from_fields(fields))
            .filter(Column::Id.eq(id))
            .exec(&self.orm)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        tracing::info!(product_id = id, "product updated");
        Ok(())
    }

    pub async fn delete_product(&self, id: i64) -> AppResult<()> {
        let result = Products::delete_by_id(id).exec(&self.orm).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        tracing::info!(product_id = id, "product deleted");
        Ok(())
    }

    pub async fn record_sale(&self, name: &str, price: i64) -> AppResult<SaleRecord> {
        let sale = sqlx::query_as::<_, SaleRecord>(
            "INSERT INTO sales (name, price) VALUES (?1, ?2) RETURNING id, name, price",
        )
        .bind(name)
        .bind(price)
        .fetch_one(&self.pool)
        .await?;
        tracing::info!(sale_id = sale.id, name = %sale.name, price = sale.price, "sale recorded");
        Ok(sale)
    }

    pub async fn list_sales(&self) -> AppResult<Vec<SaleRecord>> {
        let sales = sqlx::query_as::<_, SaleRecord>("SELECT id, name, price FROM sales ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(sales)
    }

    pub async fn total_profit(&self) -> AppResult<i64> {
        let total: (i64,) = sqlx::query_as("SELECT COALESCE(SUM(price), 0) FROM sales")
            .fetch_one(&self.pool)
            .await?;
        Ok(total.0)
    }
}

fn active_from_fields(fields: &ProductFields) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(fields.name.clone()),
        price: Set(fields.price),
        color: Set(fields.color),
        size: Set(fields.size),
        quantity: Set(fields.quantity),
        image_uri: Set(fields.image_uri.clone()),
    }
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        price: model.price,
        color: model.color,
        size: model.size,
        quantity: model.quantity,
        // Older rows store a missing image as ''.
        image_uri: model.image_uri.filter(|uri| !uri.trim().is_empty()),
    }
}
