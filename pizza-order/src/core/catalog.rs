//! Static pricing tables: flavor base prices and size multipliers.
//!
//! Flavors are keyed by a stable id. Display names ride along for rendering
//! only and never take part in price lookup.

use serde::{Deserialize, Serialize};

use crate::core::error::OrderError;
use crate::core::types::PizzaSize;

/// Fee added when the pickup date is the soonest offered date, in minor units.
pub const SAME_DAY_SURCHARGE: u64 = 150;

/// Suffix appended to formatted prices.
pub const DEFAULT_CURRENCY_SUFFIX: &str = "\u{20BD}";

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flavor {
    /// Stable identifier used for lookups (`margarita`, `bbq`, ...).
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Base price of a 25 cm pizza in minor units.
    pub price: u64,
}

impl Flavor {
    pub fn new(id: &str, name: &str, price: u64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
        }
    }
}

/// Price multiplier per pizza size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeMultipliers {
    pub cm25: f64,
    pub cm32: f64,
    pub cm40: f64,
}

impl Default for SizeMultipliers {
    fn default() -> Self {
        Self {
            cm25: 1.0,
            cm32: 1.3,
            cm40: 1.8,
        }
    }
}

impl SizeMultipliers {
    pub fn for_size(&self, size: PizzaSize) -> f64 {
        match size {
            PizzaSize::Cm25 => self.cm25,
            PizzaSize::Cm32 => self.cm32,
            PizzaSize::Cm40 => self.cm40,
        }
    }
}

/// The storefront's menu.
pub fn default_flavors() -> Vec<Flavor> {
    vec![
        Flavor::new("margarita", "Margarita", 500),
        Flavor::new("pepperoni", "Pepperoni", 500),
        Flavor::new("cheeseburger", "Cheeseburger", 550),
        Flavor::new("meat", "Meat", 550),
        Flavor::new("fourcheese", "Four Cheese", 600),
        Flavor::new("hunter", "Hunter", 600),
        Flavor::new("bbq", "BBQ", 650),
        Flavor::new("summermood", "Summer Mood", 650),
        Flavor::new("spicy", "Spicy", 700),
        Flavor::new("havayi", "Hawaiian", 700),
    ]
}

/// Read-only pricing rules, built once and shared by handle.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCatalog {
    flavors: Vec<Flavor>,
    multipliers: SizeMultipliers,
    same_day_surcharge: u64,
    currency_suffix: String,
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self::new(
            default_flavors(),
            SizeMultipliers::default(),
            SAME_DAY_SURCHARGE,
            DEFAULT_CURRENCY_SUFFIX,
        )
    }
}

impl PriceCatalog {
    /// Build a catalog. Use [`crate::core::invariants::validate_catalog`] to
    /// check entries that come from outside the program.
    pub fn new(
        flavors: Vec<Flavor>,
        multipliers: SizeMultipliers,
        same_day_surcharge: u64,
        currency_suffix: &str,
    ) -> Self {
        Self {
            flavors,
            multipliers,
            same_day_surcharge,
            currency_suffix: currency_suffix.to_string(),
        }
    }

    /// Flavors in menu order.
    pub fn flavors(&self) -> &[Flavor] {
        &self.flavors
    }

    pub fn flavor(&self, id: &str) -> Option<&Flavor> {
        self.flavors.iter().find(|flavor| flavor.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.flavor(id).is_some()
    }

    /// Base price for a known flavor id.
    pub fn base_price(&self, id: &str) -> Result<u64, OrderError> {
        self.flavor(id)
            .map(|flavor| flavor.price)
            .ok_or_else(|| OrderError::UnknownFlavor(id.to_string()))
    }

    /// Multiplier for a raw diameter in centimetres.
    pub fn size_multiplier(&self, size_cm: u32) -> Result<f64, OrderError> {
        PizzaSize::try_from(size_cm).map(|size| self.multiplier(size))
    }

    pub fn multiplier(&self, size: PizzaSize) -> f64 {
        self.multipliers.for_size(size)
    }

    pub fn multipliers(&self) -> &SizeMultipliers {
        &self.multipliers
    }

    pub fn same_day_surcharge(&self) -> u64 {
        self.same_day_surcharge
    }

    pub fn currency_suffix(&self) -> &str {
        &self.currency_suffix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_price_looks_up_by_stable_id() {
        let catalog = PriceCatalog::default();
        assert_eq!(catalog.base_price("margarita"), Ok(500));
        assert_eq!(catalog.base_price("havayi"), Ok(700));
    }

    #[test]
    fn base_price_rejects_display_names_and_unknown_ids() {
        let catalog = PriceCatalog::default();
        assert_eq!(
            catalog.base_price("Four Cheese"),
            Err(OrderError::UnknownFlavor("Four Cheese".to_string()))
        );
        assert!(catalog.base_price("anchovy").is_err());
        assert!(!catalog.contains(""));
    }

    #[test]
    fn size_multiplier_covers_offered_sizes_only() {
        let catalog = PriceCatalog::default();
        assert_eq!(catalog.size_multiplier(25), Ok(1.0));
        assert_eq!(catalog.size_multiplier(32), Ok(1.3));
        assert_eq!(catalog.size_multiplier(40), Ok(1.8));
        assert_eq!(
            catalog.size_multiplier(99),
            Err(OrderError::UnknownSize("99".to_string()))
        );
    }

    #[test]
    fn default_menu_keeps_declaration_order() {
        let catalog = PriceCatalog::default();
        let ids: Vec<&str> = catalog.flavors().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(ids[0], "margarita");
        assert_eq!(ids[9], "havayi");
        assert_eq!(catalog.same_day_surcharge(), 150);
        assert_eq!(catalog.currency_suffix(), "₽");
    }
}
