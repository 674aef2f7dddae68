//! Pickup-date option generation.
//!
//! Labels are a pure function of the starting date, the day count, the locale
//! and the format string. The caller supplies "today".

use chrono::format::{Item, StrftimeItems};
use chrono::{Locale, NaiveDate, NaiveTime};

/// Number of pickup dates offered per session.
pub const DEFAULT_PICKUP_DAYS: usize = 4;
/// Weekday, day of month, month name.
pub const DEFAULT_DATE_FORMAT: &str = "%A, %-d %B";
pub const DEFAULT_LOCALE: &str = "ru_RU";

/// Locale names accepted in configuration.
pub const SUPPORTED_LOCALES: &[&str] = &["ru_RU", "en_US", "en_GB", "de_DE", "fr_FR", "POSIX"];

pub fn parse_locale(name: &str) -> Option<Locale> {
    match name {
        "ru_RU" => Some(Locale::ru_RU),
        "en_US" => Some(Locale::en_US),
        "en_GB" => Some(Locale::en_GB),
        "de_DE" => Some(Locale::de_DE),
        "fr_FR" => Some(Locale::fr_FR),
        "POSIX" => Some(Locale::POSIX),
        _ => None,
    }
}

/// Generates the ordered pickup labels for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupCalendar {
    days: usize,
    locale: Locale,
    format: String,
}

impl Default for PickupCalendar {
    fn default() -> Self {
        Self {
            days: DEFAULT_PICKUP_DAYS,
            locale: Locale::ru_RU,
            format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl PickupCalendar {
    /// Build a calendar, rejecting unknown locales, a zero day count, and
    /// format strings chrono cannot render.
    pub fn new(days: usize, locale: &str, format: &str) -> Result<Self, String> {
        if days == 0 {
            return Err("pickup day count must be > 0".to_string());
        }
        let locale = parse_locale(locale).ok_or_else(|| {
            format!(
                "unsupported locale '{}' (expected one of {})",
                locale,
                SUPPORTED_LOCALES.join(", ")
            )
        })?;
        if format.trim().is_empty()
            || StrftimeItems::new_with_locale(format, locale).any(|item| matches!(item, Item::Error))
        {
            return Err(format!("invalid date format '{}'", format));
        }
        Ok(Self {
            days,
            locale,
            format: format.to_string(),
        })
    }

    pub fn days(&self) -> usize {
        self.days
    }

    /// Labels for `days` consecutive dates starting at `today`, inclusive.
    pub fn generate_options(&self, today: NaiveDate) -> Vec<String> {
        generate_options(today, self.days, self.locale, &self.format)
    }
}

/// Labels for `count` consecutive calendar dates starting at `today`.
///
/// Returns exactly `count` labels unless the range reaches
/// `NaiveDate::MAX`, where chrono's day iterator ends early and fewer
/// labels come back.
pub fn generate_options(today: NaiveDate, count: usize, locale: Locale, format: &str) -> Vec<String> {
    today
        .iter_days()
        .take(count)
        .map(|date| {
            date.and_time(NaiveTime::MIN)
                .and_utc()
                .format_localized(format, locale)
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).expect("date")
    }

    #[test]
    fn generates_consecutive_days_from_today() {
        let calendar = PickupCalendar::new(4, "en_US", DEFAULT_DATE_FORMAT).expect("calendar");
        assert_eq!(
            calendar.generate_options(friday()),
            vec![
                "Friday, 16 October",
                "Saturday, 17 October",
                "Sunday, 18 October",
                "Monday, 19 October",
            ]
        );
    }

    #[test]
    fn crosses_month_boundaries() {
        let end_of_month = NaiveDate::from_ymd_opt(2026, 10, 30).expect("date");
        let options = generate_options(end_of_month, 4, Locale::en_US, "%Y-%m-%d");
        assert_eq!(
            options,
            vec!["2026-10-30", "2026-10-31", "2026-11-01", "2026-11-02"]
        );
    }

    #[test]
    fn generation_is_idempotent() {
        let calendar = PickupCalendar::default();
        assert_eq!(
            calendar.generate_options(friday()),
            calendar.generate_options(friday())
        );
        assert_eq!(calendar.generate_options(friday()).len(), DEFAULT_PICKUP_DAYS);
    }

    #[test]
    fn default_locale_is_russian() {
        let options = PickupCalendar::default().generate_options(friday());
        assert_eq!(options[0], "Пятница, 16 октября");
    }

    #[test]
    fn returns_fewer_labels_at_end_of_calendar() {
        let last = NaiveDate::MAX.pred_opt().expect("previous day");
        let options = generate_options(last, 4, Locale::en_US, "%Y-%m-%d");
        assert!((1..4).contains(&options.len()), "{options:?}");
    }

    #[test]
    fn rejects_bad_settings() {
        assert!(PickupCalendar::new(0, "en_US", DEFAULT_DATE_FORMAT).is_err());
        assert!(PickupCalendar::new(4, "xx_XX", DEFAULT_DATE_FORMAT).is_err());
        assert!(PickupCalendar::new(4, "en_US", "%Q").is_err());
        assert!(PickupCalendar::new(4, "en_US", "  ").is_err());
    }
}
