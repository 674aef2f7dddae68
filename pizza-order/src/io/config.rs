//! Storefront configuration stored in `pizza-order.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::calendar::{DEFAULT_DATE_FORMAT, DEFAULT_LOCALE, DEFAULT_PICKUP_DAYS, PickupCalendar};
use crate::core::catalog::{
    DEFAULT_CURRENCY_SUFFIX, Flavor, PriceCatalog, SAME_DAY_SURCHARGE, SizeMultipliers,
    default_flavors,
};
use crate::core::invariants::{MAX_PRICE, validate_catalog};
use crate::summary::{DEFAULT_BODY_TEMPLATE, DEFAULT_SUBJECT_TEMPLATE, ShareTemplates};

/// Storefront configuration (TOML).
///
/// Every section is optional. Missing fields fall back to the storefront's
/// built-in menu, Russian pickup labels, and English share text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct OrderConfig {
    pub catalog: CatalogConfig,
    pub calendar: CalendarConfig,
    pub share: ShareConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Added when the soonest pickup date is chosen, in minor units.
    pub same_day_surcharge: u64,

    /// Appended to every formatted price.
    pub currency_suffix: String,

    pub multipliers: SizeMultipliers,

    /// Menu in display order.
    pub flavors: Vec<Flavor>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            same_day_surcharge: SAME_DAY_SURCHARGE,
            currency_suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
            multipliers: SizeMultipliers::default(),
            flavors: default_flavors(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CalendarConfig {
    /// Number of pickup dates offered, starting today.
    pub days: usize,

    /// Locale for weekday and month names (e.g. `ru_RU`, `en_US`).
    pub locale: String,

    /// chrono `strftime` pattern for each label.
    pub format: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_PICKUP_DAYS,
            locale: DEFAULT_LOCALE.to_string(),
            format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// minijinja templates for the share message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShareConfig {
    pub subject: String,
    pub body: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT_TEMPLATE.to_string(),
            body: DEFAULT_BODY_TEMPLATE.to_string(),
        }
    }
}

impl OrderConfig {
    pub fn validate(&self) -> Result<()> {
        let mut errors = validate_catalog(
            &self.catalog.flavors,
            &self.catalog.multipliers,
            &self.catalog.currency_suffix,
        );
        if self.catalog.same_day_surcharge > MAX_PRICE {
            errors.push(format!(
                "same_day_surcharge {} exceeds {}",
                self.catalog.same_day_surcharge, MAX_PRICE
            ));
        }
        if !errors.is_empty() {
            return Err(anyhow!("invalid catalog:\n- {}", errors.join("\n- ")));
        }
        self.calendar()?;
        self.share_templates()?;
        Ok(())
    }

    pub fn catalog(&self) -> PriceCatalog {
        PriceCatalog::new(
            self.catalog.flavors.clone(),
            self.catalog.multipliers,
            self.catalog.same_day_surcharge,
            &self.catalog.currency_suffix,
        )
    }

    pub fn calendar(&self) -> Result<PickupCalendar> {
        PickupCalendar::new(
            self.calendar.days,
            &self.calendar.locale,
            &self.calendar.format,
        )
        .map_err(|err| anyhow!("invalid calendar: {}", err))
    }

    pub fn share_templates(&self) -> Result<ShareTemplates> {
        ShareTemplates::new(&self.share.subject, &self.share.body).context("invalid share templates")
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `OrderConfig::default()`.
pub fn load_config(path: &Path) -> Result<OrderConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = OrderConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: OrderConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(
        path = %path.display(),
        flavors = cfg.catalog.flavors.len(),
        locale = %cfg.calendar.locale,
        "config loaded"
    );
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &OrderConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
