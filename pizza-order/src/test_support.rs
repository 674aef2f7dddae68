//! Test-only helpers for building deterministic order sessions.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tempfile::TempDir;

use crate::core::calendar::{DEFAULT_DATE_FORMAT, PickupCalendar};
use crate::core::catalog::{Flavor, PriceCatalog, SAME_DAY_SURCHARGE, SizeMultipliers};
use crate::io::clock::Clock;
use crate::state::OrderState;

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Clock whose date can be moved after it has been handed to an `OrderState`.
#[derive(Debug, Clone)]
pub struct SharedClock(Rc<Cell<NaiveDate>>);

impl SharedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(Rc::new(Cell::new(today)))
    }

    pub fn set(&self, today: NaiveDate) {
        self.0.set(today);
    }
}

impl Clock for SharedClock {
    fn today(&self) -> NaiveDate {
        self.0.get()
    }
}

/// Small catalog with one flavor that the default menu does not carry.
pub fn fake_catalog() -> PriceCatalog {
    PriceCatalog::new(
        vec![
            Flavor::new("margarita", "Margarita", 500),
            Flavor::new("pepperoni", "Pepperoni", 500),
            Flavor::new("bbq", "BBQ", 650),
            Flavor::new("spicy", "Spicy", 700),
            Flavor::new("test-flavor", "Test Flavor", 1000),
        ],
        SizeMultipliers::default(),
        SAME_DAY_SURCHARGE,
        "\u{20BD}",
    )
}

/// Four-day calendar with English labels (`Friday, 16 October`).
pub fn en_calendar() -> PickupCalendar {
    PickupCalendar::new(4, "en_US", DEFAULT_DATE_FORMAT).expect("en_US calendar")
}

/// Session over [`fake_catalog`] and [`en_calendar`] pinned to `today`.
pub fn order_state(today: NaiveDate) -> OrderState {
    OrderState::new(
        Arc::new(fake_catalog()),
        en_calendar(),
        Box::new(FixedClock(today)),
    )
}

/// Temporary directory holding a config file.
pub struct TestConfig {
    dir: TempDir,
}

impl TestConfig {
    pub fn new(contents: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        std::fs::write(dir.path().join("pizza-order.toml"), contents).context("write config")?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("pizza-order.toml")
    }
}
