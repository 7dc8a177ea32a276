//! Item Entity
//!
//! One shopping list entry and its price classification.

/// Prices below this are `Low`
pub const MEDIUM_TIER_MIN: f64 = 10.0;
/// Prices above this are `High`
pub const MEDIUM_TIER_MAX: f64 = 50.0;

/// Unique item identifier, never reused within a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cosmetic price band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    Low,
    Medium,
    High,
}

impl PriceTier {
    /// Classify a price: `< 10` low, `10..=50` medium, `> 50` high
    pub fn of(price: f64) -> Self {
        if price > MEDIUM_TIER_MAX {
            PriceTier::High
        } else if price >= MEDIUM_TIER_MIN {
            PriceTier::Medium
        } else {
            PriceTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Low => "low",
            PriceTier::Medium => "medium",
            PriceTier::High => "high",
        }
    }

    /// CSS class for the price badge
    pub fn css_class(&self) -> &'static str {
        match self {
            PriceTier::Low => "price-low",
            PriceTier::Medium => "price-medium",
            PriceTier::High => "price-high",
        }
    }
}

/// A shopping list entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    /// Trimmed, non-empty
    pub name: String,
    /// Finite and > 0
    pub price: f64,
}

impl Item {
    pub fn new(id: ItemId, name: String, price: f64) -> Self {
        Self { id, name, price }
    }

    pub fn tier(&self) -> PriceTier {
        PriceTier::of(self.price)
    }

    /// Case-insensitive name comparison used for duplicate checks
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
