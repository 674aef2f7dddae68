//! Order price computation.

use serde::Serialize;

use crate::core::catalog::PriceCatalog;
use crate::core::error::OrderError;
use crate::core::types::{PizzaSize, Quantity};

/// Inputs the price depends on, borrowed from an order.
#[derive(Debug, Clone, Copy)]
pub struct PriceInputs<'a> {
    pub flavor: Option<&'a str>,
    pub size: PizzaSize,
    pub quantity: Quantity,
    pub pickup_date: Option<&'a str>,
    pub pickup_options: &'a [String],
}

/// Intermediate values of one price computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub base: u64,
    pub multiplier: f64,
    /// `round(quantity * base * multiplier)`.
    pub subtotal: u64,
    pub surcharge: u64,
    pub total: u64,
}

/// Compute the order total in minor units.
///
/// An unset flavor prices at zero; a set flavor must exist in the catalog.
/// The same-day surcharge applies iff the pickup date equals the first
/// offered option. An unset pickup date never matches.
pub fn compute_price(
    catalog: &PriceCatalog,
    inputs: &PriceInputs<'_>,
) -> Result<PriceBreakdown, OrderError> {
    let base = match inputs.flavor {
        Some(id) => catalog.base_price(id)?,
        None => 0,
    };
    let multiplier = catalog.multiplier(inputs.size);
    let raw = f64::from(inputs.quantity.get()) * base as f64 * multiplier;
    // Float-to-int casts saturate; validated catalogs stay far below the limit.
    let subtotal = raw.round() as u64;

    let surcharge = if is_same_day(inputs.pickup_date, inputs.pickup_options) {
        catalog.same_day_surcharge()
    } else {
        0
    };

    Ok(PriceBreakdown {
        base,
        multiplier,
        subtotal,
        surcharge,
        total: subtotal.saturating_add(surcharge),
    })
}

/// True if `pickup_date` is the soonest offered option.
pub fn is_same_day(pickup_date: Option<&str>, pickup_options: &[String]) -> bool {
    match (pickup_date, pickup_options.first()) {
        (Some(date), Some(first)) => date == first,
        _ => false,
    }
}

/// Render an amount as `<amount> <suffix>`.
pub fn format_price(amount: u64, currency_suffix: &str) -> String {
    format!("{} {}", amount, currency_suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{Flavor, SAME_DAY_SURCHARGE, SizeMultipliers};

    fn options() -> Vec<String> {
        ["mon", "tue", "wed", "thu"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn quantity(n: u32) -> Quantity {
        Quantity::try_from(n).expect("quantity")
    }

    #[test]
    fn same_day_pickup_adds_surcharge_to_rounded_subtotal() {
        let catalog = PriceCatalog::default();
        let options = options();
        let breakdown = compute_price(
            &catalog,
            &PriceInputs {
                flavor: Some("margarita"),
                size: PizzaSize::Cm32,
                quantity: quantity(2),
                pickup_date: Some("mon"),
                pickup_options: &options,
            },
        )
        .expect("price");

        assert_eq!(breakdown.base, 500);
        assert_eq!(breakdown.subtotal, 1300);
        assert_eq!(breakdown.surcharge, 150);
        assert_eq!(breakdown.total, 1450);
        assert_eq!(format_price(breakdown.total, "₽"), "1450 ₽");
    }

    #[test]
    fn unset_flavor_prices_at_zero() {
        let catalog = PriceCatalog::default();
        let options = options();
        let breakdown = compute_price(
            &catalog,
            &PriceInputs {
                flavor: None,
                size: PizzaSize::Cm25,
                quantity: quantity(1),
                pickup_date: None,
                pickup_options: &options,
            },
        )
        .expect("price");
        assert_eq!(breakdown.total, 0);
        assert_eq!(breakdown.surcharge, 0);
    }

    #[test]
    fn later_pickup_has_no_surcharge() {
        let catalog = PriceCatalog::default();
        let options = options();
        let breakdown = compute_price(
            &catalog,
            &PriceInputs {
                flavor: Some("havayi"),
                size: PizzaSize::Cm40,
                quantity: quantity(3),
                pickup_date: Some("thu"),
                pickup_options: &options,
            },
        )
        .expect("price");
        assert_eq!(breakdown.subtotal, 3780);
        assert_eq!(breakdown.total, 3780);
    }

    #[test]
    fn unknown_flavor_is_an_error() {
        let catalog = PriceCatalog::default();
        let err = compute_price(
            &catalog,
            &PriceInputs {
                flavor: Some("anchovy"),
                size: PizzaSize::Cm25,
                quantity: quantity(1),
                pickup_date: None,
                pickup_options: &[],
            },
        )
        .expect_err("unknown flavor");
        assert_eq!(err, OrderError::UnknownFlavor("anchovy".to_string()));
    }

    #[test]
    fn subtotal_rounds_to_nearest_unit() {
        let catalog = PriceCatalog::new(
            vec![Flavor::new("odd", "Odd", 333)],
            SizeMultipliers::default(),
            0,
            "₽",
        );
        let inputs = PriceInputs {
            flavor: Some("odd"),
            size: PizzaSize::Cm32,
            quantity: quantity(1),
            pickup_date: None,
            pickup_options: &[],
        };
        // 333 * 1.3 = 432.9
        let first = compute_price(&catalog, &inputs).expect("price");
        let second = compute_price(&catalog, &inputs).expect("price");
        assert_eq!(first.total, 433);
        assert_eq!(first, second);
    }

    #[test]
    fn unvalidated_huge_price_saturates_instead_of_overflowing() {
        let catalog = PriceCatalog::new(
            vec![Flavor::new("big", "Big", i64::MAX as u64)],
            SizeMultipliers::default(),
            SAME_DAY_SURCHARGE,
            "₽",
        );
        let options = options();
        let breakdown = compute_price(
            &catalog,
            &PriceInputs {
                flavor: Some("big"),
                size: PizzaSize::Cm40,
                quantity: quantity(3),
                pickup_date: Some("mon"),
                pickup_options: &options,
            },
        )
        .expect("price");
        assert_eq!(breakdown.subtotal, u64::MAX);
        assert_eq!(breakdown.total, u64::MAX);
    }

    #[test]
    fn same_day_check_ignores_missing_values() {
        let options = options();
        assert!(is_same_day(Some("mon"), &options));
        assert!(!is_same_day(Some("tue"), &options));
        assert!(!is_same_day(None, &options));
        assert!(!is_same_day(Some("mon"), &[]));
    }
}
