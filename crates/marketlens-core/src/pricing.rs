use serde::Serialize;

use crate::domain::Item;

/// Direction of an item's effective price relative to its high. Drives the
/// presentation layer's color coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Down,
    Neutral,
    Up,
}

impl PriceTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Neutral => "neutral",
            Self::Up => "up",
        }
    }
}

/// Previous traded price scaled by the lot multiplier.
pub fn effective_price(item: &Item) -> f64 {
    item.price.last_traded_previous * item.lot_size.multiplier()
}

/// Classify an effective price against the item's high.
pub fn classify(effective: f64, high: f64) -> PriceTrend {
    if effective < high {
        PriceTrend::Down
    } else if effective == high {
        PriceTrend::Neutral
    } else {
        PriceTrend::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, LotSize, Market, PriceRange, Venue};

    #[test]
    fn classifies_against_high() {
        assert_eq!(classify(90.0, 100.0), PriceTrend::Down);
        assert_eq!(classify(100.0, 100.0), PriceTrend::Neutral);
        assert_eq!(classify(110.0, 100.0), PriceTrend::Up);
    }

    #[test]
    fn effective_price_applies_lot_multiplier() {
        let item = Item::new(
            1,
            Venue::Onchain,
            PriceRange::new(100.0, 1.0, 9.5, 9.6).expect("price"),
            LotSize::Hundred,
            "USD",
            "Gold",
            Market::Us,
        )
        .expect("item");

        assert_eq!(effective_price(&item), 950.0);
    }
}
