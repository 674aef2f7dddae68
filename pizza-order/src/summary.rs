//! Share text for a finished order.
//!
//! Produces the subject and body a front end hands to its platform share
//! mechanism. Templates are minijinja sources, usually taken from config.

use anyhow::{Context, Result};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::core::catalog::PriceCatalog;
use crate::core::types::Order;

pub const DEFAULT_SUBJECT_TEMPLATE: &str = "New pizza order";
pub const DEFAULT_BODY_TEMPLATE: &str = "Flavor: {{ flavor }}
Size: {{ size_cm }} cm
Quantity: {{ quantity }}
Pickup date: {{ pickup_date }}
Total: {{ price }}";

/// Subject and body ready for sharing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareMessage {
    pub subject: String,
    pub body: String,
}

/// Values exposed to the templates.
///
/// Unset selections render as empty strings.
#[derive(Debug, Serialize)]
struct ShareContext<'a> {
    flavor: &'a str,
    flavor_id: &'a str,
    size_cm: u32,
    quantity: u8,
    pickup_date: &'a str,
    price: &'a str,
    price_minor: u64,
}

impl<'a> ShareContext<'a> {
    fn new(order: &'a Order, catalog: &'a PriceCatalog) -> Self {
        let flavor_id = order.flavor.as_deref().unwrap_or("");
        let flavor = catalog
            .flavor(flavor_id)
            .map(|flavor| flavor.name.as_str())
            .unwrap_or(flavor_id);
        Self {
            flavor,
            flavor_id,
            size_cm: order.size_cm.cm(),
            quantity: order.quantity.get(),
            pickup_date: order.pickup_date.as_deref().unwrap_or(""),
            price: &order.price,
            price_minor: order.price_minor,
        }
    }
}

/// Template engine wrapper around minijinja.
#[derive(Debug)]
pub struct ShareTemplates {
    env: Environment<'static>,
    subject: String,
    body: String,
}

impl Default for ShareTemplates {
    fn default() -> Self {
        Self {
            env: strict_env(),
            subject: DEFAULT_SUBJECT_TEMPLATE.to_string(),
            body: DEFAULT_BODY_TEMPLATE.to_string(),
        }
    }
}

impl ShareTemplates {
    /// Compile both templates up front so syntax errors surface at load time.
    pub fn new(subject: &str, body: &str) -> Result<Self> {
        let check = strict_env();
        check
            .template_from_str(subject)
            .context("compile subject template")?;
        check
            .template_from_str(body)
            .context("compile body template")?;
        Ok(Self {
            env: strict_env(),
            subject: subject.to_string(),
            body: body.to_string(),
        })
    }

    pub fn render(&self, order: &Order, catalog: &PriceCatalog) -> Result<ShareMessage> {
        let ctx = ShareContext::new(order, catalog);
        let subject = self
            .env
            .render_str(&self.subject, &ctx)
            .context("render subject template")?;
        let body = self
            .env
            .render_str(&self.body, &ctx)
            .context("render body template")?;
        Ok(ShareMessage {
            subject: subject.trim().to_string(),
            body,
        })
    }
}

fn strict_env<'a>() -> Environment<'a> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::order_state;
    use chrono::NaiveDate;

    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).expect("date")
    }

    #[test]
    fn default_body_lists_each_field_on_its_own_line() {
        let mut state = order_state(friday());
        state.set_flavor("bbq").expect("flavor");
        state.set_size("32").expect("size");
        state.set_quantity("2").expect("quantity");
        state.set_pickup_index(1).expect("pickup");

        let message = ShareTemplates::default()
            .render(state.snapshot(), state.catalog())
            .expect("render");
        assert_eq!(message.subject, "New pizza order");
        assert_eq!(
            message.body,
            "Flavor: BBQ\nSize: 32 cm\nQuantity: 2\nPickup date: Saturday, 17 October\nTotal: 1690 ₽"
        );
    }

    #[test]
    fn unset_selections_render_empty() {
        let state = order_state(friday());
        let templates = ShareTemplates::new("Order {{ flavor_id }}", "[{{ flavor }}|{{ pickup_date }}]")
            .expect("templates");
        let message = templates
            .render(state.snapshot(), state.catalog())
            .expect("render");
        assert_eq!(message.subject, "Order");
        assert_eq!(message.body, "[|]");
    }

    #[test]
    fn unknown_variables_fail_to_render() {
        let state = order_state(friday());
        let templates = ShareTemplates::new("x", "{{ topping }}").expect("templates");
        let err = templates
            .render(state.snapshot(), state.catalog())
            .expect_err("strict undefined");
        assert!(format!("{err:#}").contains("render body template"));
    }

    #[test]
    fn syntax_errors_fail_at_construction() {
        assert!(ShareTemplates::new("{% if %}", "ok").is_err());
        assert!(ShareTemplates::new("ok", "{{ price ").is_err());
    }
}
