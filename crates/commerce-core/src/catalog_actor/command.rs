//! Commands and replies for the catalog actor.

use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};

/// Operations the catalog actor accepts.
#[derive(Debug)]
pub enum CatalogCommand {
    /// Registers a new active product (seed/administrative path).
    AddProduct(ProductCreate),
    /// Mutates the live price and/or quantity of an active product.
    UpdateProduct {
        id: ProductId,
        update: ProductUpdate,
    },
    /// Fetches an active product.
    GetProduct { id: ProductId },
    /// Answers whether `quantity` units are available right now.
    CheckStock { id: ProductId, quantity: u32 },
    /// Administrative stock decrement.
    ReduceStock { id: ProductId, quantity: u32 },
    /// Administrative stock increment.
    IncreaseStock { id: ProductId, quantity: u32 },
    /// Hides the product from all lookups.
    DeactivateProduct { id: ProductId },
}

/// Replies produced by the catalog actor. Variants pair with commands.
#[derive(Debug)]
pub enum CatalogReply {
    ProductId(ProductId),
    Product(Product),
    StockAvailable(bool),
    Done,
}
