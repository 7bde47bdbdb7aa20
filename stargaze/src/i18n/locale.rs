use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Parses a language tag, looking only at the primary subtag.
    ///
    /// Accepts BCP 47 (`zh-CN`, `en-US`) and POSIX (`zh_CN.UTF-8`,
    /// `en_GB@euro`) forms. Returns `None` for languages without messages.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s).ok_or_else(|| Error::UnknownLocale(s.trim().to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Active language plus the language used when a message is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub current: Locale,
    pub fallback: Locale,
}

impl LocaleConfig {
    pub const FALLBACK: Locale = Locale::En;

    pub const fn new(current: Locale) -> Self {
        Self {
            current,
            fallback: Self::FALLBACK,
        }
    }

    /// Startup choice: a persisted preference wins, then the system tag,
    /// then the fallback language. Unsupported system tags are skipped.
    pub fn resolve(persisted: Option<Locale>, system: Option<&str>) -> Self {
        let current = persisted
            .or_else(|| system.and_then(Locale::from_tag))
            .unwrap_or(Self::FALLBACK);
        Self::new(current)
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::new(Self::FALLBACK)
    }
}

/// The first non-empty of `LC_ALL`, `LC_MESSAGES` and `LANG`.
pub fn system_locale_tag() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("zh"), Some(Locale::Zh));
        assert_eq!(Locale::from_tag("zh-CN"), Some(Locale::Zh));
        assert_eq!(Locale::from_tag("zh_TW.UTF-8"), Some(Locale::Zh));
        assert_eq!(Locale::from_tag("EN-us"), Some(Locale::En));
        assert_eq!(Locale::from_tag("en_GB@euro"), Some(Locale::En));
        assert_eq!(Locale::from_tag("fr-FR"), None);
        assert_eq!(Locale::from_tag("C.UTF-8"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "de".parse::<Locale>().unwrap_err();
        assert!(matches!(err, Error::UnknownLocale(ref tag) if tag == "de"));
        assert_eq!(" zh ".parse::<Locale>().unwrap(), Locale::Zh);
    }

    #[test]
    fn test_resolve_order() {
        assert_eq!(
            LocaleConfig::resolve(Some(Locale::En), Some("zh_CN.UTF-8")).current,
            Locale::En
        );
        assert_eq!(
            LocaleConfig::resolve(None, Some("zh_CN.UTF-8")).current,
            Locale::Zh
        );
        assert_eq!(LocaleConfig::resolve(None, Some("POSIX")).current, Locale::En);
        assert_eq!(LocaleConfig::resolve(None, None), LocaleConfig::default());
    }

    #[test]
    fn test_fallback_is_english() {
        let config = LocaleConfig::new(Locale::Zh);
        assert_eq!(config.fallback, Locale::En);
    }

    #[test]
    fn test_serde_tag() {
        assert_eq!(serde_json::to_string(&Locale::Zh).unwrap(), "\"zh\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
