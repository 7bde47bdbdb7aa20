//! Localized text without global mutable state.
//!
//! The active language is an explicit [`LocaleConfig`] value passed to every
//! lookup. Message tables are embedded JSON files parsed once on first use.

pub mod locale;
pub mod messages;
pub mod names;

pub use locale::{system_locale_tag, Locale, LocaleConfig};
pub use messages::{t, t_args, Messages};
pub use names::{asterism_name, city_name, direction_name, star_name};
