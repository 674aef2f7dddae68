//! Session helpers shared by the CLI commands.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::error::OrderError;
use crate::io::clock::Clock;
use crate::io::config::{OrderConfig, load_config};
use crate::state::OrderState;
use crate::summary::{ShareMessage, ShareTemplates};

/// Pickup choice, either by label or by position among the offered dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickupChoice {
    Label(String),
    Index(usize),
}

/// Selections to replay against a fresh session, in checkout order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub flavor: Option<String>,
    pub size: Option<String>,
    pub quantity: Option<String>,
    pub pickup: Option<PickupChoice>,
}

/// A session together with the share templates from the same config.
pub struct Checkout {
    pub state: OrderState,
    pub templates: ShareTemplates,
}

impl Checkout {
    /// Start a session from an already validated config.
    pub fn from_config(cfg: &OrderConfig, clock: Box<dyn Clock>) -> Result<Self> {
        let catalog = Arc::new(cfg.catalog());
        let calendar = cfg.calendar()?;
        let templates = cfg.share_templates()?;
        Ok(Self {
            state: OrderState::new(catalog, calendar, clock),
            templates,
        })
    }

    /// Load config from `path` (defaults when missing) and start a session.
    pub fn open(path: &Path, clock: Box<dyn Clock>) -> Result<Self> {
        let cfg = load_config(path).with_context(|| "load config for checkout")?;
        Self::from_config(&cfg, clock)
    }

    /// Apply each present selection the way the storefront flow does:
    /// flavor, size, quantity, then pickup date. Stops at the first rejection.
    pub fn apply(&mut self, selection: &Selection) -> Result<(), OrderError> {
        if let Some(flavor) = &selection.flavor {
            self.state.set_flavor(flavor)?;
        }
        if let Some(size) = &selection.size {
            self.state.set_size(size)?;
        }
        if let Some(quantity) = &selection.quantity {
            self.state.set_quantity(quantity)?;
        }
        match &selection.pickup {
            Some(PickupChoice::Label(label)) => {
                self.state.set_pickup_date(label)?;
            }
            Some(PickupChoice::Index(index)) => {
                self.state.set_pickup_index(*index)?;
            }
            None => {}
        }
        debug!(price = %self.state.snapshot().price, "selection applied");
        Ok(())
    }

    pub fn share(&self) -> Result<ShareMessage> {
        self.templates
            .render(self.state.snapshot(), self.state.catalog())
    }
}
