use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Trading venue an item is listed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Venue {
    Private,
    Offchain,
    Onchain,
}

impl Venue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "PRIVATE",
            Self::Offchain => "OFFCHAIN",
            Self::Onchain => "ONCHAIN",
        }
    }
}

/// Market an item trades in. Ranking compares the two-letter codes as plain
/// string ordering, so `as_str` is the comparison key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Market {
    Ch,
    Eu,
    In,
    Us,
}

impl Market {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ch => "CH",
            Self::Eu => "EU",
            Self::In => "IN",
            Self::Us => "US",
        }
    }
}

/// Quantity multiplier, string-encoded in the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LotSize {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "100")]
    Hundred,
}

impl LotSize {
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::One => 1.0,
            Self::Ten => 10.0,
            Self::Hundred => 100.0,
        }
    }
}

/// Price fields for one item. `low <= high` is the one ordering convention
/// the catalog enforces; the last-traded fields may fall anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub high: f64,
    pub low: f64,
    pub last_traded_previous: f64,
    pub last_traded: f64,
}

impl PriceRange {
    pub fn new(
        high: f64,
        low: f64,
        last_traded_previous: f64,
        last_traded: f64,
    ) -> Result<Self, ValidationError> {
        let range = Self {
            high,
            low,
            last_traded_previous,
            last_traded,
        };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_non_negative("high", self.high)?;
        validate_non_negative("low", self.low)?;
        validate_non_negative("lastTradedPrevious", self.last_traded_previous)?;
        validate_non_negative("lastTraded", self.last_traded)?;

        if self.low > self.high {
            return Err(ValidationError::InvalidPriceRange);
        }

        Ok(())
    }
}

/// One tradable instrument in the catalog. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    #[serde(rename = "type")]
    pub venue: Venue,
    pub price: PriceRange,
    pub lot_size: LotSize,
    pub currency: String,
    pub name: String,
    pub market: Market,
}

impl Item {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        venue: Venue,
        price: PriceRange,
        lot_size: LotSize,
        currency: impl Into<String>,
        name: impl Into<String>,
        market: Market,
    ) -> Result<Self, ValidationError> {
        let item = Self {
            id,
            venue,
            price,
            lot_size,
            currency: currency.into(),
            name: name.into(),
            market,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        self.price.validate()
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_price_range() {
        let err = PriceRange::new(90.0, 100.0, 95.0, 95.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidPriceRange));
    }

    #[test]
    fn rejects_negative_price() {
        let err = PriceRange::new(100.0, -1.0, 95.0, 95.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::NegativeValue { field: "low" }));
    }

    #[test]
    fn lot_size_round_trips_as_string() {
        let json = serde_json::to_string(&LotSize::Hundred).expect("serialize");
        assert_eq!(json, "\"100\"");

        let parsed: LotSize = serde_json::from_str("\"10\"").expect("deserialize");
        assert_eq!(parsed, LotSize::Ten);
    }

    #[test]
    fn item_serializes_with_wire_field_names() {
        let item = Item::new(
            7,
            Venue::Onchain,
            PriceRange::new(100.0, 90.0, 95.0, 96.0).expect("price"),
            LotSize::Ten,
            "USD",
            "Gold",
            Market::Us,
        )
        .expect("item");

        let value = serde_json::to_value(&item).expect("serialize");
        assert_eq!(value["type"], "ONCHAIN");
        assert_eq!(value["lotSize"], "10");
        assert_eq!(value["price"]["lastTradedPrevious"], 95.0);
        assert_eq!(value["market"], "US");
    }
}
