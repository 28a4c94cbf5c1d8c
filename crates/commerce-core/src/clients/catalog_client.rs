//! High-level API for the catalog actor.

use crate::catalog_actor::{CatalogCommand, CatalogError, CatalogReply, CatalogService};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_core::ServiceClient;
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ServiceClient<CatalogService>,
}

impl CatalogClient {
    pub fn new(inner: ServiceClient<CatalogService>) -> Self {
        Self { inner }
    }

    async fn call(&self, command: CatalogCommand) -> Result<CatalogReply, CatalogError> {
        self.inner.call(command).await.map_err(CatalogError::from_actor)
    }

    #[instrument(skip(self, params))]
    pub async fn add_product(&self, params: ProductCreate) -> Result<ProductId, CatalogError> {
        debug!("Sending request");
        match self.call(CatalogCommand::AddProduct(params)).await? {
            CatalogReply::ProductId(id) => Ok(id),
            _ => unreachable!("AddProduct must return ProductId"),
        }
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, CatalogError> {
        debug!("Sending request");
        match self.call(CatalogCommand::UpdateProduct { id, update }).await? {
            CatalogReply::Product(product) => Ok(product),
            _ => unreachable!("UpdateProduct must return Product"),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        debug!("Sending request");
        match self.call(CatalogCommand::GetProduct { id }).await? {
            CatalogReply::Product(product) => Ok(product),
            _ => unreachable!("GetProduct must return Product"),
        }
    }

    /// Returns whether `quantity` units are available right now. Advisory:
    /// the answer can be stale by the time the caller acts on it.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId, quantity: u32) -> Result<bool, CatalogError> {
        debug!("Sending request");
        match self.call(CatalogCommand::CheckStock { id, quantity }).await? {
            CatalogReply::StockAvailable(available) => Ok(available),
            _ => unreachable!("CheckStock must return StockAvailable"),
        }
    }

    #[instrument(skip(self))]
    pub async fn reduce_stock(&self, id: ProductId, quantity: u32) -> Result<(), CatalogError> {
        debug!("Sending request");
        match self.call(CatalogCommand::ReduceStock { id, quantity }).await? {
            CatalogReply::Done => Ok(()),
            _ => unreachable!("ReduceStock must return Done"),
        }
    }

    #[instrument(skip(self))]
    pub async fn increase_stock(&self, id: ProductId, quantity: u32) -> Result<(), CatalogError> {
        debug!("Sending request");
        match self.call(CatalogCommand::IncreaseStock { id, quantity }).await? {
            CatalogReply::Done => Ok(()),
            _ => unreachable!("IncreaseStock must return Done"),
        }
    }

    #[instrument(skip(self))]
    pub async fn deactivate_product(&self, id: ProductId) -> Result<(), CatalogError> {
        debug!("Sending request");
        match self.call(CatalogCommand::DeactivateProduct { id }).await? {
            CatalogReply::Done => Ok(()),
            _ => unreachable!("DeactivateProduct must return Done"),
        }
    }
}
