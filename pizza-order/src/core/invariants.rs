//! Semantic checks for catalogs loaded from configuration.

use std::collections::HashSet;

use crate::core::catalog::{Flavor, SizeMultipliers};
use crate::core::types::PizzaSize;

/// Largest accepted flavor price or surcharge, in minor units.
pub const MAX_PRICE: u64 = 1_000_000_000;
/// Largest accepted size multiplier.
pub const MAX_MULTIPLIER: f64 = 100.0;

/// Check catalog invariants:
/// - At least one flavor
/// - Flavor ids non-empty, free of whitespace, and unique
/// - Flavor prices at most `MAX_PRICE`
/// - Multipliers finite, > 0 and at most `MAX_MULTIPLIER`
/// - Currency suffix non-empty
pub fn validate_catalog(
    flavors: &[Flavor],
    multipliers: &SizeMultipliers,
    currency_suffix: &str,
) -> Vec<String> {
    let mut errors = Vec::new();
    if flavors.is_empty() {
        errors.push("catalog must list at least one flavor".to_string());
    }

    let mut seen = HashSet::new();
    for (index, flavor) in flavors.iter().enumerate() {
        if flavor.id.trim().is_empty() {
            errors.push(format!("flavors[{}]: id must be non-empty", index));
        } else if flavor.id.chars().any(char::is_whitespace) {
            errors.push(format!(
                "flavors[{}]: id '{}' must not contain whitespace",
                index, flavor.id
            ));
        }
        if flavor.price > MAX_PRICE {
            errors.push(format!(
                "flavor '{}': price {} exceeds {}",
                flavor.id, flavor.price, MAX_PRICE
            ));
        }
        if !seen.insert(flavor.id.as_str()) {
            errors.push(format!("duplicate flavor id '{}'", flavor.id));
        }
    }

    for size in PizzaSize::ALL {
        let value = multipliers.for_size(size);
        if !value.is_finite() || value <= 0.0 {
            errors.push(format!("multiplier for {} cm must be > 0, got {}", size, value));
        } else if value > MAX_MULTIPLIER {
            errors.push(format!(
                "multiplier for {} cm exceeds {}, got {}",
                size, MAX_MULTIPLIER, value
            ));
        }
    }

    if currency_suffix.trim().is_empty() {
        errors.push("currency suffix must be non-empty".to_string());
    }

    errors
}
