//! State and command handling for the catalog actor.

use super::command::{CatalogCommand, CatalogReply};
use super::error::CatalogError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_core::Service;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::info;

/// The stock authority's state: the product table and an id counter.
#[derive(Debug)]
pub struct CatalogService {
    products: HashMap<ProductId, Product>,
    next_id: u32,
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
            next_id: 1,
        }
    }

    fn alloc_id(&mut self) -> ProductId {
        let id = ProductId::from(self.next_id);
        self.next_id += 1;
        id
    }

    /// Looks up an active product. Inactive and absent products are
    /// indistinguishable to callers.
    fn active_product(&self, id: ProductId) -> Result<&Product, CatalogError> {
        self.products
            .get(&id)
            .filter(|p| p.is_active)
            .ok_or(CatalogError::NotFound(id))
    }

    fn active_product_mut(&mut self, id: ProductId) -> Result<&mut Product, CatalogError> {
        self.products
            .get_mut(&id)
            .filter(|p| p.is_active)
            .ok_or(CatalogError::NotFound(id))
    }

    fn add_product(&mut self, params: ProductCreate) -> Result<ProductId, CatalogError> {
        if params.price <= Decimal::ZERO {
            return Err(CatalogError::InvalidPrice(params.price));
        }
        let id = self.alloc_id();
        let product = Product::new(id, params);
        info!(product_id = %id, quantity = product.quantity, "Product added");
        self.products.insert(id, product);
        Ok(id)
    }

    fn update_product(
        &mut self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, CatalogError> {
        if let Some(price) = update.price {
            if price <= Decimal::ZERO {
                return Err(CatalogError::InvalidPrice(price));
            }
        }
        let product = self.active_product_mut(id)?;
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(quantity) = update.quantity {
            product.quantity = quantity;
            product.last_stock_update = Utc::now();
        }
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    fn check_stock(&self, id: ProductId, quantity: u32) -> Result<bool, CatalogError> {
        if quantity == 0 {
            return Err(CatalogError::InvalidQuantity(quantity));
        }
        // Absent is an error; inactive is a plain "not available".
        let product = self
            .products
            .get(&id)
            .ok_or(CatalogError::NotFound(id))?;
        if !product.is_active {
            return Ok(false);
        }
        Ok(product.has_sufficient_stock(quantity))
    }

    fn reduce_stock(&mut self, id: ProductId, quantity: u32) -> Result<(), CatalogError> {
        if quantity == 0 {
            return Err(CatalogError::InvalidQuantity(quantity));
        }
        let product = self.active_product_mut(id)?;
        if !product.has_sufficient_stock(quantity) {
            return Err(CatalogError::InsufficientStock {
                product_id: id,
                requested: quantity,
                available: product.quantity,
            });
        }
        product.reduce_stock(quantity);
        info!(product_id = %id, remaining = product.quantity, "Stock reduced");
        Ok(())
    }

    fn increase_stock(&mut self, id: ProductId, quantity: u32) -> Result<(), CatalogError> {
        let product = self.active_product_mut(id)?;
        product.increase_stock(quantity);
        Ok(())
    }

    fn deactivate(&mut self, id: ProductId) -> Result<(), CatalogError> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or(CatalogError::NotFound(id))?;
        product.deactivate();
        info!(product_id = %id, "Product deactivated");
        Ok(())
    }
}

#[async_trait]
impl Service for CatalogService {
    type Command = CatalogCommand;
    type Reply = CatalogReply;
    type Context = ();
    type Error = CatalogError;

    async fn handle(
        &mut self,
        command: CatalogCommand,
        _ctx: &(),
    ) -> Result<CatalogReply, CatalogError> {
        match command {
            CatalogCommand::AddProduct(params) => {
                self.add_product(params).map(CatalogReply::ProductId)
            }
            CatalogCommand::UpdateProduct { id, update } => {
                self.update_product(id, update).map(CatalogReply::Product)
            }
            CatalogCommand::GetProduct { id } => self
                .active_product(id)
                .map(|p| CatalogReply::Product(p.clone())),
            CatalogCommand::CheckStock { id, quantity } => self
                .check_stock(id, quantity)
                .map(CatalogReply::StockAvailable),
            CatalogCommand::ReduceStock { id, quantity } => {
                self.reduce_stock(id, quantity).map(|()| CatalogReply::Done)
            }
            CatalogCommand::IncreaseStock { id, quantity } => self
                .increase_stock(id, quantity)
                .map(|()| CatalogReply::Done),
            CatalogCommand::DeactivateProduct { id } => {
                self.deactivate(id).map(|()| CatalogReply::Done)
            }
        }
    }
}
