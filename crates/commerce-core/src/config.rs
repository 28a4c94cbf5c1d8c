//! Runtime configuration for the commerce components.

use rust_decimal::Decimal;

/// Configuration passed into each component at construction.
///
/// This is an explicit value object rather than ambient state, so tests can
/// run components with different limits side by side.
#[derive(Debug, Clone)]
pub struct CommerceConfig {
    /// Advisory per-user cart cap. Carried for reporting but not enforced
    /// in the add path; see the cart service docs.
    pub max_lines_per_cart: u32,
    /// Upper bound on a single payment amount.
    pub max_payment_amount: Decimal,
    /// Success likelihood of the default probabilistic settlement gateway,
    /// in `[0.0, 1.0]`.
    pub settlement_success_rate: f64,
    /// Currency assigned to payments that do not specify one.
    pub default_currency: String,
}

impl Default for CommerceConfig {
    fn default() -> Self {
        Self {
            max_lines_per_cart: 50,
            max_payment_amount: Decimal::new(100_000_00, 2),
            settlement_success_rate: 0.9,
            default_currency: "PEN".to_string(),
        }
    }
}
