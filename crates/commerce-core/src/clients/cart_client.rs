//! High-level API for the cart actor.

use crate::cart_actor::{CartCommand, CartError, CartReply, CartService};
use crate::model::{CartLine, CartLineId, ProductId, UserId};
use actor_core::ServiceClient;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ServiceClient<CartService>,
}

impl CartClient {
    pub fn new(inner: ServiceClient<CartService>) -> Self {
        Self { inner }
    }

    async fn call(&self, command: CartCommand) -> Result<CartReply, CartError> {
        self.inner.call(command).await.map_err(CartError::from_actor)
    }

    /// Adds `quantity` units of a product to the user's cart, merging with
    /// an existing line for the same product.
    #[instrument(skip(self))]
    pub async fn add_line(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartLine, CartError> {
        debug!("Sending request");
        let command = CartCommand::AddLine {
            user_id,
            product_id,
            quantity,
        };
        match self.call(command).await? {
            CartReply::Line(line) => Ok(line),
            _ => unreachable!("AddLine must return Line"),
        }
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        user_id: UserId,
        line_id: CartLineId,
        quantity: u32,
    ) -> Result<CartLine, CartError> {
        debug!("Sending request");
        let command = CartCommand::UpdateQuantity {
            user_id,
            line_id,
            quantity,
        };
        match self.call(command).await? {
            CartReply::Line(line) => Ok(line),
            _ => unreachable!("UpdateQuantity must return Line"),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_line(&self, user_id: UserId, line_id: CartLineId) -> Result<(), CartError> {
        debug!("Sending request");
        match self.call(CartCommand::RemoveLine { user_id, line_id }).await? {
            CartReply::Removed => Ok(()),
            _ => unreachable!("RemoveLine must return Removed"),
        }
    }

    /// Clears the user's cart. Returns the number of lines removed.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self, user_id: UserId) -> Result<usize, CartError> {
        debug!("Sending request");
        match self.call(CartCommand::ClearCart { user_id }).await? {
            CartReply::Cleared(count) => Ok(count),
            _ => unreachable!("ClearCart must return Cleared"),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_lines(&self, user_id: UserId) -> Result<Vec<CartLine>, CartError> {
        debug!("Sending request");
        match self.call(CartCommand::ListLines { user_id }).await? {
            CartReply::Lines(lines) => Ok(lines),
            _ => unreachable!("ListLines must return Lines"),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_line(
        &self,
        user_id: UserId,
        line_id: CartLineId,
    ) -> Result<CartLine, CartError> {
        debug!("Sending request");
        match self.call(CartCommand::GetLine { user_id, line_id }).await? {
            CartReply::Line(line) => Ok(line),
            _ => unreachable!("GetLine must return Line"),
        }
    }

    #[instrument(skip(self))]
    pub async fn total(&self, user_id: UserId) -> Result<Decimal, CartError> {
        debug!("Sending request");
        match self.call(CartCommand::Total { user_id }).await? {
            CartReply::Total(total) => Ok(total),
            _ => unreachable!("Total must return Total"),
        }
    }

    #[instrument(skip(self))]
    pub async fn count(&self, user_id: UserId) -> Result<usize, CartError> {
        debug!("Sending request");
        match self.call(CartCommand::Count { user_id }).await? {
            CartReply::Count(count) => Ok(count),
            _ => unreachable!("Count must return Count"),
        }
    }

    #[instrument(skip(self))]
    pub async fn contains_product(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<bool, CartError> {
        debug!("Sending request");
        let command = CartCommand::ContainsProduct {
            user_id,
            product_id,
        };
        match self.call(command).await? {
            CartReply::Contains(contains) => Ok(contains),
            _ => unreachable!("ContainsProduct must return Contains"),
        }
    }
}
