//! Products service.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::info;

use crate::{
    domain::{
        categories::records::CategoryUuid,
        is_blank,
        products::{
            data::{NewProduct, ProductUpdate},
            errors::ProductsServiceError,
            records::{ProductRecord, ProductUuid},
        },
    },
    repository::InventoryRepository,
};

/// Products with fewer units in stock than this are reported as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

#[derive(Debug, Clone)]
pub struct DocumentProductsService {
    repository: InventoryRepository,
}

impl DocumentProductsService {
    #[must_use]
    pub fn new(repository: InventoryRepository) -> Self {
        Self { repository }
    }

    async fn filtered<P>(&self, predicate: P) -> Result<Vec<ProductRecord>, ProductsServiceError>
    where
        P: Fn(&ProductRecord) -> bool + Send,
    {
        let mut products = self.repository.get_products().await?;

        products.retain(|product| predicate(product));

        Ok(products)
    }
}

fn validate(name: &str, price: Decimal) -> Result<(), ProductsServiceError> {
    if is_blank(name) {
        return Err(ProductsServiceError::MissingRequiredData);
    }

    if price < Decimal::ZERO {
        return Err(ProductsServiceError::InvalidPrice);
    }

    Ok(())
}

#[async_trait]
impl ProductsService for DocumentProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.repository.get_products().await?)
    }

    async fn list_products_by_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        self.filtered(|product| product.category_id == category)
            .await
    }

    async fn list_active_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        self.filtered(|product| product.is_active).await
    }

    async fn list_low_stock_products(
        &self,
        threshold: u32,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        self.filtered(|product| product.stock_quantity < threshold)
            .await
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .get_products()
            .await?
            .into_iter()
            .find(|p| p.id == product)
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        validate(&product.name, product.price)?;

        let created = ProductRecord {
            id: ProductUuid::new(),
            name: product.name,
            code: product.code,
            category_id: product.category_id,
            price: product.price,
            stock_quantity: product.stock_quantity,
            is_active: product.is_active,
        };

        self.repository
            .update_products(|products| {
                products.push(created.clone());

                Ok::<_, ProductsServiceError>(())
            })
            .await?;

        info!(product_id = %created.id, category_id = %created.category_id, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        validate(&update.name, update.price)?;

        self.repository
            .update_products(|products| {
                let existing = products
                    .iter_mut()
                    .find(|p| p.id == product)
                    .ok_or(ProductsServiceError::NotFound)?;

                existing.name = update.name;
                existing.code = update.code;
                existing.category_id = update.category_id;
                existing.price = update.price;
                existing.stock_quantity = update.stock_quantity;
                existing.is_active = update.is_active;

                Ok(existing.clone())
            })
            .await
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        self.repository
            .update_products(|products| {
                let position = products
                    .iter()
                    .position(|p| p.id == product)
                    .ok_or(ProductsServiceError::NotFound)?;

                products.remove(position);

                Ok::<_, ProductsServiceError>(())
            })
            .await?;

        info!(product_id = %product, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in stored order.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves the products referencing the given category.
    async fn list_products_by_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves the products flagged as active.
    async fn list_active_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves the products with fewer than `threshold` units in stock.
    async fn list_low_stock_products(
        &self,
        threshold: u32,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a product under a freshly assigned id. The category reference
    /// is stored as given and is not checked against existing categories.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Overwrites every mutable field of the product with the given id.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product with the given id.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
