use rust_decimal::Decimal;

use crate::models::ProductItem;

/// Threshold discount applied to an order subtotal.
///
/// The discount only kicks in when the subtotal is strictly greater than
/// `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub discount_rate: Decimal,
    pub threshold: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            discount_rate: Decimal::new(10, 2),
            threshold: Decimal::new(500, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl PricingPolicy {
    pub fn new(discount_rate: Decimal, threshold: Decimal) -> Self {
        Self {
            discount_rate,
            threshold,
        }
    }

    /// Returns `None` when an amount leaves the range `Decimal` can hold.
    pub fn quote(&self, items: &[ProductItem]) -> Option<Quote> {
        let subtotal = items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.cost))?;
        let discount = if subtotal > self.threshold {
            subtotal.checked_mul(self.discount_rate)?
        } else {
            Decimal::ZERO
        };

        Some(Quote {
            subtotal,
            discount,
            total: subtotal.checked_sub(discount)?,
        })
    }
}
