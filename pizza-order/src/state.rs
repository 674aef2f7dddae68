//! The live order for one checkout session.
//!
//! `OrderState` is the only mutable piece of the core. Every setter validates
//! its input first, applies the change to a copy, reprices the copy, and only
//! then commits and publishes it. A rejected input leaves the order untouched
//! and notifies nobody.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, warn};

use crate::core::calendar::PickupCalendar;
use crate::core::catalog::PriceCatalog;
use crate::core::error::OrderError;
use crate::core::pricing::{PriceBreakdown, PriceInputs, compute_price, format_price};
use crate::core::types::{Order, PizzaSize, Quantity};
use crate::io::clock::Clock;

/// Owner of the session's `Order`.
pub struct OrderState {
    catalog: Arc<PriceCatalog>,
    calendar: PickupCalendar,
    clock: Box<dyn Clock>,
    order: Order,
    subscribers: Vec<Sender<Order>>,
}

impl OrderState {
    /// Start a session with default selections and fresh pickup options.
    pub fn new(catalog: Arc<PriceCatalog>, calendar: PickupCalendar, clock: Box<dyn Clock>) -> Self {
        let order = fresh_order(&catalog, &calendar, clock.as_ref());
        debug!(pickup_options = ?order.pickup_options, "order session started");
        Self {
            catalog,
            calendar,
            clock,
            order,
            subscribers: Vec::new(),
        }
    }

    /// Current state, for rendering.
    pub fn snapshot(&self) -> &Order {
        &self.order
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    /// Receive a copy of the order after every completed mutation.
    ///
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<Order> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn set_flavor(&mut self, flavor: &str) -> Result<&Order, OrderError> {
        if !self.catalog.contains(flavor) {
            return Err(rejected(OrderError::UnknownFlavor(flavor.to_string())));
        }
        debug!(flavor, "set flavor");
        self.apply(|order| order.flavor = Some(flavor.to_string()))
    }

    /// Parse and apply a diameter such as `"32"`.
    pub fn set_size(&mut self, input: &str) -> Result<&Order, OrderError> {
        let size: PizzaSize = input.parse().map_err(rejected)?;
        debug!(size_cm = size.cm(), "set size");
        self.apply(|order| order.size_cm = size)
    }

    /// Parse and apply a pizza count such as `"2"`.
    pub fn set_quantity(&mut self, input: &str) -> Result<&Order, OrderError> {
        let quantity: Quantity = input.parse().map_err(rejected)?;
        debug!(quantity = quantity.get(), "set quantity");
        self.apply(|order| order.quantity = quantity)
    }

    /// Select one of the offered pickup labels.
    pub fn set_pickup_date(&mut self, label: &str) -> Result<&Order, OrderError> {
        if !self.order.pickup_options.iter().any(|option| option == label) {
            return Err(rejected(OrderError::InvalidPickupDate(label.to_string())));
        }
        debug!(pickup_date = label, "set pickup date");
        self.apply(|order| order.pickup_date = Some(label.to_string()))
    }

    /// Select a pickup date by its position in `pickup_options` (0 = soonest).
    pub fn set_pickup_index(&mut self, index: usize) -> Result<&Order, OrderError> {
        let label = match self.order.pickup_options.get(index) {
            Some(label) => label.clone(),
            None => {
                return Err(rejected(OrderError::InvalidPickupDate(format!(
                    "#{}",
                    index
                ))));
            }
        };
        self.set_pickup_date(&label)
    }

    /// Discard every selection and regenerate pickup options from the clock.
    pub fn reset(&mut self) -> &Order {
        self.order = fresh_order(&self.catalog, &self.calendar, self.clock.as_ref());
        debug!(pickup_options = ?self.order.pickup_options, "order reset");
        self.publish();
        &self.order
    }

    /// Intermediate values behind the current price.
    pub fn price_breakdown(&self) -> Result<PriceBreakdown, OrderError> {
        compute_price(&self.catalog, &price_inputs(&self.order))
    }

    fn apply(&mut self, change: impl FnOnce(&mut Order)) -> Result<&Order, OrderError> {
        let mut next = self.order.clone();
        change(&mut next);
        reprice(&self.catalog, &mut next)?;
        debug!(price = %next.price, "order repriced");
        self.order = next;
        self.publish();
        Ok(&self.order)
    }

    fn publish(&mut self) {
        let order = &self.order;
        self.subscribers.retain(|tx| tx.send(order.clone()).is_ok());
    }
}

fn rejected(err: OrderError) -> OrderError {
    warn!(error = %err, "selection rejected");
    err
}

fn price_inputs(order: &Order) -> PriceInputs<'_> {
    PriceInputs {
        flavor: order.flavor.as_deref(),
        size: order.size_cm,
        quantity: order.quantity,
        pickup_date: order.pickup_date.as_deref(),
        pickup_options: &order.pickup_options,
    }
}

fn reprice(catalog: &PriceCatalog, order: &mut Order) -> Result<(), OrderError> {
    let breakdown = compute_price(catalog, &price_inputs(order))?;
    order.price_minor = breakdown.total;
    order.price = format_price(breakdown.total, catalog.currency_suffix());
    Ok(())
}

fn fresh_order(catalog: &PriceCatalog, calendar: &PickupCalendar, clock: &dyn Clock) -> Order {
    let pickup_options = calendar.generate_options(clock.today());
    // No flavor and no pickup date: nothing to look up, the price is zero.
    Order {
        flavor: None,
        size_cm: PizzaSize::default(),
        quantity: Quantity::default(),
        pickup_date: None,
        price: format_price(0, catalog.currency_suffix()),
        price_minor: 0,
        pickup_options,
    }
}
