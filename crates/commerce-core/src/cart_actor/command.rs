//! Commands and replies for the cart actor. All operations are scoped to a
//! user.

use crate::model::{CartLine, CartLineId, ProductId, UserId};
use rust_decimal::Decimal;

/// Operations the cart actor accepts.
#[derive(Debug)]
pub enum CartCommand {
    /// Adds `quantity` units of a product, merging into the existing active
    /// line for that (user, product) if one exists.
    AddLine {
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
    },
    /// Replaces the quantity of an owned, active line.
    UpdateQuantity {
        user_id: UserId,
        line_id: CartLineId,
        quantity: u32,
    },
    /// Soft-deletes an owned line. Does not require the line to be active.
    RemoveLine {
        user_id: UserId,
        line_id: CartLineId,
    },
    /// Soft-deletes every active line of the user.
    ClearCart { user_id: UserId },
    /// Lists the user's active lines.
    ListLines { user_id: UserId },
    /// Fetches one owned, active line.
    GetLine {
        user_id: UserId,
        line_id: CartLineId,
    },
    /// Sum of active line totals.
    Total { user_id: UserId },
    /// Number of active lines.
    Count { user_id: UserId },
    /// Whether an active line for the product exists.
    ContainsProduct {
        user_id: UserId,
        product_id: ProductId,
    },
}

/// Replies produced by the cart actor.
#[derive(Debug)]
pub enum CartReply {
    Line(CartLine),
    Lines(Vec<CartLine>),
    Removed,
    Cleared(usize),
    Total(Decimal),
    Count(usize),
    Contains(bool),
}
