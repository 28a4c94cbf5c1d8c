//! State and command handling for the cart actor.

use super::command::{CartCommand, CartReply};
use super::error::CartError;
use crate::clients::CatalogClient;
use crate::config::CommerceConfig;
use crate::model::{CartLine, CartLineId, Product, ProductId, UserId};
use actor_core::Service;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::info;

/// The cart store's state: one line table for all users plus an id counter.
///
/// The configured `max_lines_per_cart` is carried but not enforced in the
/// add path; the cap is advisory, matching the system this replaces. The
/// invariant that *is* enforced is at most one active line per
/// (user, product) pair: adds merge into the existing line.
pub struct CartService {
    lines: HashMap<CartLineId, CartLine>,
    next_id: u32,
    #[allow(dead_code)]
    config: CommerceConfig,
}

impl CartService {
    pub fn new(config: CommerceConfig) -> Self {
        Self {
            lines: HashMap::new(),
            next_id: 1,
            config,
        }
    }

    fn alloc_id(&mut self) -> CartLineId {
        let id = CartLineId::from(self.next_id);
        self.next_id += 1;
        id
    }

    fn active_line_for(&self, user_id: UserId, product_id: ProductId) -> Option<CartLineId> {
        self.lines
            .values()
            .find(|l| l.is_active && l.belongs_to(user_id) && l.product_id == product_id)
            .map(|l| l.id)
    }

    /// Looks up a line and checks ownership. Active-state checking is left
    /// to callers because removal deliberately accepts inactive lines.
    fn owned_line(&self, user_id: UserId, line_id: CartLineId) -> Result<&CartLine, CartError> {
        let line = self
            .lines
            .get(&line_id)
            .ok_or(CartError::LineNotFound(line_id))?;
        if !line.belongs_to(user_id) {
            return Err(CartError::NotOwned { line_id, user_id });
        }
        Ok(line)
    }

    /// Fetches the product and validates that `quantity` units are
    /// available. Returns the product so callers can snapshot price and
    /// name, and report `available` on failure.
    async fn validate_stock(
        catalog: &CatalogClient,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Product, CartError> {
        let product = catalog.get_product(product_id).await?;
        let available = catalog.check_stock(product_id, quantity).await?;
        if !available {
            return Err(CartError::InsufficientStock {
                product_id,
                requested: quantity,
                available: product.quantity,
            });
        }
        Ok(product)
    }

    async fn add_line(
        &mut self,
        catalog: &CatalogClient,
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartLine, CartError> {
        let existing = self.active_line_for(user_id, product_id);
        let current = match existing {
            Some(line_id) => {
                self.lines
                    .get(&line_id)
                    .ok_or(CartError::LineNotFound(line_id))?
                    .quantity
            }
            None => 0,
        };
        let required = match current.checked_add(quantity) {
            Some(required) => required,
            // The combined quantity does not fit in the counter, so no
            // shelf can cover it.
            None => {
                let product = catalog.get_product(product_id).await?;
                return Err(CartError::InsufficientStock {
                    product_id,
                    requested: current.saturating_add(quantity),
                    available: product.quantity,
                });
            }
        };

        // A zero add surfaces as InvalidQuantity from the stock check.
        let product = Self::validate_stock(catalog, product_id, required).await?;

        match existing {
            Some(line_id) => {
                let line = self
                    .lines
                    .get_mut(&line_id)
                    .ok_or(CartError::LineNotFound(line_id))?;
                line.set_quantity(required);
                info!(%user_id, %product_id, quantity = required, "Cart line merged");
                Ok(line.clone())
            }
            None => {
                let id = self.alloc_id();
                let line = CartLine::new(id, user_id, &product, quantity);
                self.lines.insert(id, line.clone());
                info!(%user_id, %product_id, line_id = %id, quantity, "Cart line added");
                Ok(line)
            }
        }
    }

    async fn update_quantity(
        &mut self,
        catalog: &CatalogClient,
        user_id: UserId,
        line_id: CartLineId,
        quantity: u32,
    ) -> Result<CartLine, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        let line = self.owned_line(user_id, line_id)?;
        if !line.is_active {
            return Err(CartError::InactiveLine(line_id));
        }
        let product_id = line.product_id;

        Self::validate_stock(catalog, product_id, quantity).await?;

        let line = self
            .lines
            .get_mut(&line_id)
            .ok_or(CartError::LineNotFound(line_id))?;
        line.set_quantity(quantity);
        info!(%user_id, %line_id, quantity, "Cart line quantity updated");
        Ok(line.clone())
    }

    fn remove_line(&mut self, user_id: UserId, line_id: CartLineId) -> Result<(), CartError> {
        self.owned_line(user_id, line_id)?;
        let line = self
            .lines
            .get_mut(&line_id)
            .ok_or(CartError::LineNotFound(line_id))?;
        line.deactivate();
        info!(%user_id, %line_id, "Cart line removed");
        Ok(())
    }

    fn clear_cart(&mut self, user_id: UserId) -> usize {
        let mut cleared = 0;
        for line in self
            .lines
            .values_mut()
            .filter(|l| l.is_active && l.belongs_to(user_id))
        {
            line.deactivate();
            cleared += 1;
        }
        info!(%user_id, cleared, "Cart cleared");
        cleared
    }

    fn list_lines(&self, user_id: UserId) -> Vec<CartLine> {
        let mut lines: Vec<CartLine> = self
            .lines
            .values()
            .filter(|l| l.is_active && l.belongs_to(user_id))
            .cloned()
            .collect();
        lines.sort_by_key(|l| l.id.0);
        lines
    }

    fn get_line(&self, user_id: UserId, line_id: CartLineId) -> Result<CartLine, CartError> {
        let line = self.owned_line(user_id, line_id)?;
        if !line.is_active {
            return Err(CartError::InactiveLine(line_id));
        }
        Ok(line.clone())
    }

    fn total(&self, user_id: UserId) -> Decimal {
        self.lines
            .values()
            .filter(|l| l.is_active && l.belongs_to(user_id))
            .map(|l| l.total)
            .sum()
    }

    fn count(&self, user_id: UserId) -> usize {
        self.lines
            .values()
            .filter(|l| l.is_active && l.belongs_to(user_id))
            .count()
    }

    fn contains_product(&self, user_id: UserId, product_id: ProductId) -> bool {
        self.active_line_for(user_id, product_id).is_some()
    }
}

#[async_trait]
impl Service for CartService {
    type Command = CartCommand;
    type Reply = CartReply;
    type Context = CatalogClient;
    type Error = CartError;

    async fn handle(
        &mut self,
        command: CartCommand,
        catalog: &CatalogClient,
    ) -> Result<CartReply, CartError> {
        match command {
            CartCommand::AddLine {
                user_id,
                product_id,
                quantity,
            } => self
                .add_line(catalog, user_id, product_id, quantity)
                .await
                .map(CartReply::Line),
            CartCommand::UpdateQuantity {
                user_id,
                line_id,
                quantity,
            } => self
                .update_quantity(catalog, user_id, line_id, quantity)
                .await
                .map(CartReply::Line),
            CartCommand::RemoveLine { user_id, line_id } => self
                .remove_line(user_id, line_id)
                .map(|()| CartReply::Removed),
            CartCommand::ClearCart { user_id } => {
                Ok(CartReply::Cleared(self.clear_cart(user_id)))
            }
            CartCommand::ListLines { user_id } => {
                Ok(CartReply::Lines(self.list_lines(user_id)))
            }
            CartCommand::GetLine { user_id, line_id } => {
                self.get_line(user_id, line_id).map(CartReply::Line)
            }
            CartCommand::Total { user_id } => Ok(CartReply::Total(self.total(user_id))),
            CartCommand::Count { user_id } => Ok(CartReply::Count(self.count(user_id))),
            CartCommand::ContainsProduct {
                user_id,
                product_id,
            } => Ok(CartReply::Contains(
                self.contains_product(user_id, product_id),
            )),
        }
    }
}
