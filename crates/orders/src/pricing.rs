//! Order pricing.
//!
//! The aggregate formula is fixed — `base_price + delivery_fee - discount` —
//! and only the fee/discount sub-steps vary by order kind. New variants
//! (e.g. a loyalty discount) plug in new function slots without touching
//! the formula.

use crate::order::{Order, OrderKind};

/// Flat delivery fees in smallest currency unit (cents).
pub const STANDARD_DELIVERY_FEE: u64 = 299;
pub const EXPRESS_DELIVERY_FEE: u64 = 599;

/// Sum of line-item prices, in cents.
pub fn base_price(order: &Order) -> u64 {
    order.items().iter().map(|i| i.price()).sum()
}

/// Kind-specific pricing: a pair of function slots feeding the shared
/// total formula.
#[derive(Debug, Clone, Copy)]
pub struct OrderPricer {
    delivery_fee: fn(&Order) -> u64,
    discount: fn(&Order) -> u64,
}

impl OrderPricer {
    /// Build a custom pricing variant from its fee and discount slots.
    pub fn new(delivery_fee: fn(&Order) -> u64, discount: fn(&Order) -> u64) -> Self {
        Self {
            delivery_fee,
            discount,
        }
    }

    /// The shipped variant for the given order kind: a flat delivery fee
    /// and no discount.
    pub fn for_kind(kind: OrderKind) -> Self {
        match kind {
            OrderKind::Standard => Self::new(|_| STANDARD_DELIVERY_FEE, no_discount),
            OrderKind::Express => Self::new(|_| EXPRESS_DELIVERY_FEE, no_discount),
        }
    }

    /// Total in cents: `base_price + delivery_fee - discount`, saturating
    /// at zero so an aggressive discount never underflows.
    pub fn total(&self, order: &Order) -> u64 {
        let base = base_price(order);
        let fee = (self.delivery_fee)(order);
        let discount = (self.discount)(order);
        (base + fee).saturating_sub(discount)
    }
}

fn no_discount(_order: &Order) -> u64 {
    0
}
