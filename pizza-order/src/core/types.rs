//! Shared deterministic types for the order core.
//!
//! `PizzaSize` and `Quantity` can only hold members of their fixed sets, so
//! every value that reaches the pricing code is already valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::OrderError;

/// Pizza diameter offered by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PizzaSize {
    #[default]
    Cm25,
    Cm32,
    Cm40,
}

impl PizzaSize {
    /// All sizes in the order they are offered.
    pub const ALL: [PizzaSize; 3] = [PizzaSize::Cm25, PizzaSize::Cm32, PizzaSize::Cm40];

    pub fn cm(self) -> u32 {
        match self {
            PizzaSize::Cm25 => 25,
            PizzaSize::Cm32 => 32,
            PizzaSize::Cm40 => 40,
        }
    }
}

impl TryFrom<u32> for PizzaSize {
    type Error = OrderError;

    fn try_from(cm: u32) -> Result<Self, Self::Error> {
        match cm {
            25 => Ok(PizzaSize::Cm25),
            32 => Ok(PizzaSize::Cm32),
            40 => Ok(PizzaSize::Cm40),
            other => Err(OrderError::UnknownSize(other.to_string())),
        }
    }
}

impl From<PizzaSize> for u32 {
    fn from(size: PizzaSize) -> Self {
        size.cm()
    }
}

impl FromStr for PizzaSize {
    type Err = OrderError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let cm: u32 = input
            .trim()
            .parse()
            .map_err(|_| OrderError::UnknownSize(input.to_string()))?;
        PizzaSize::try_from(cm).map_err(|_| OrderError::UnknownSize(input.to_string()))
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cm())
    }
}

/// Number of pizzas in the order, 1 through 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub fn get(self) -> u8 {
        self.0
    }

    /// All quantities in the order they are offered.
    pub fn all() -> impl Iterator<Item = Quantity> {
        (Self::MIN..=Self::MAX).map(Quantity)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity(Self::MIN)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = OrderError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(n) if (Self::MIN..=Self::MAX).contains(&n) => Ok(Quantity(n)),
            _ => Err(OrderError::UnknownQuantity(value.to_string())),
        }
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        u32::from(quantity.0)
    }
}

impl FromStr for Quantity {
    type Err = OrderError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value: u32 = input
            .trim()
            .parse()
            .map_err(|_| OrderError::UnknownQuantity(input.to_string()))?;
        Quantity::try_from(value).map_err(|_| OrderError::UnknownQuantity(input.to_string()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of one checkout session.
///
/// `price` and `price_minor` are derived by the order state on every
/// mutation; callers only ever see them through a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    /// Stable catalog id of the chosen flavor, unset until chosen.
    pub flavor: Option<String>,
    pub size_cm: PizzaSize,
    pub quantity: Quantity,
    /// Label taken from `pickup_options`, unset until chosen.
    pub pickup_date: Option<String>,
    /// Currency-formatted total, e.g. `1450 ₽`.
    pub price: String,
    /// Total in minor currency units.
    pub price_minor: u64,
    /// Pickup labels offered for this session, soonest first.
    pub pickup_options: Vec<String>,
}
