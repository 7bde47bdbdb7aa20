//! Display names for catalog entries in the active language.

use super::locale::{Locale, LocaleConfig};
use super::messages::t;
use stargaze_catalog::{Asterism, City, Star};

pub fn star_name(locale: Locale, star: &Star) -> String {
    match locale {
        Locale::Zh => star.zh.to_string(),
        Locale::En => star.display_name(),
    }
}

pub fn asterism_name(locale: Locale, asterism: &Asterism) -> String {
    match locale {
        Locale::Zh => asterism.zh.to_string(),
        Locale::En => asterism.display_name(),
    }
}

/// Chinese names come from the first non-ASCII alias; cities without one
/// keep their English name.
pub fn city_name(locale: Locale, city: &City) -> &'static str {
    match locale {
        Locale::Zh => city
            .aliases
            .iter()
            .copied()
            .find(|alias| !alias.is_ascii())
            .unwrap_or(city.name),
        Locale::En => city.name,
    }
}

/// Localized eight-point compass label, e.g. `"NE"` → `"东北"`.
pub fn direction_name(config: &LocaleConfig, cardinal: &str) -> String {
    let key = format!("dir.{cardinal}");
    let text = t(config, &key);
    if text == key {
        cardinal.to_string()
    } else {
        text.to_string()
    }
}
