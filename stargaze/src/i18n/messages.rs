use super::locale::{Locale, LocaleConfig};
use crate::Result;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::Display;

const EN_JSON: &str = include_str!("../../locales/en.json");
const ZH_JSON: &str = include_str!("../../locales/zh.json");

static EMBEDDED: Lazy<Messages> = Lazy::new(Messages::embedded);

/// Per-locale key → text tables.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl Messages {
    /// The tables compiled into the binary, parsed on first access.
    pub fn global() -> &'static Messages {
        &EMBEDDED
    }

    /// Builds tables from flat JSON objects of string values.
    pub fn from_json(sources: &[(Locale, &str)]) -> Result<Self> {
        let mut tables = HashMap::with_capacity(sources.len());
        for &(locale, json) in sources {
            let table: HashMap<String, String> = serde_json::from_str(json)?;
            tables.insert(locale, table);
        }
        Ok(Self { tables })
    }

    fn embedded() -> Self {
        let mut messages = Self::default();
        for (locale, json) in [(Locale::En, EN_JSON), (Locale::Zh, ZH_JSON)] {
            match Self::from_json(&[(locale, json)]) {
                Ok(parsed) => messages.tables.extend(parsed.tables),
                Err(err) => tracing::warn!(%locale, %err, "failed to parse embedded messages"),
            }
        }
        messages
    }

    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables.get(&locale)?.get(key).map(String::as_str)
    }

    pub fn has_locale(&self, locale: Locale) -> bool {
        self.tables.contains_key(&locale)
    }

    /// Text for `key` in the current language, else the fallback language,
    /// else the key itself.
    pub fn t<'a>(&'a self, config: &LocaleConfig, key: &'a str) -> &'a str {
        self.lookup(config.current, key)
            .or_else(|| self.lookup(config.fallback, key))
            .unwrap_or(key)
    }

    /// [`t`](Self::t) with `{name}` placeholders replaced by `args`.
    /// Placeholders without a matching argument are left as they are.
    pub fn t_args(&self, config: &LocaleConfig, key: &str, args: &[(&str, &dyn Display)]) -> String {
        let mut text = self.t(config, key).to_string();
        for (name, value) in args {
            let placeholder = format!("{{{name}}}");
            if text.contains(&placeholder) {
                text = text.replace(&placeholder, &value.to_string());
            }
        }
        text
    }

    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> {
        self.tables
            .get(&locale)
            .into_iter()
            .flat_map(|table| table.keys().map(String::as_str))
    }
}

/// [`Messages::t`] against the embedded tables.
pub fn t<'a>(config: &LocaleConfig, key: &'a str) -> &'a str {
    Messages::global().t(config, key)
}

/// [`Messages::t_args`] against the embedded tables.
pub fn t_args(config: &LocaleConfig, key: &str, args: &[(&str, &dyn Display)]) -> String {
    Messages::global().t_args(config, key, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: LocaleConfig = LocaleConfig::new(Locale::En);
    const ZH: LocaleConfig = LocaleConfig::new(Locale::Zh);

    #[test]
    fn test_embedded_tables_parse() {
        let messages = Messages::global();
        for locale in Locale::ALL {
            assert!(messages.has_locale(locale), "{locale}");
        }
    }

    #[test]
    fn test_embedded_tables_share_keys() {
        let messages = Messages::global();
        let mut en: Vec<_> = messages.keys(Locale::En).collect();
        let mut zh: Vec<_> = messages.keys(Locale::Zh).collect();
        en.sort_unstable();
        zh.sort_unstable();
        assert_eq!(en, zh);
    }

    #[test]
    fn test_translate() {
        assert_eq!(t(&EN, "field.altitude"), "Altitude");
        assert_eq!(t(&ZH, "field.altitude"), "高度角");
    }

    #[test]
    fn test_fallback_chain() {
        let messages = Messages::from_json(&[
            (Locale::En, r#"{"greeting": "hello", "farewell": "bye"}"#),
            (Locale::Zh, r#"{"greeting": "你好"}"#),
        ])
        .unwrap();
        assert_eq!(messages.t(&ZH, "greeting"), "你好");
        assert_eq!(messages.t(&ZH, "farewell"), "bye");
        assert_eq!(messages.t(&ZH, "missing.key"), "missing.key");
    }

    #[test]
    fn test_placeholders() {
        let text = t_args(&EN, "lang.current", &[("locale", &Locale::Zh)]);
        assert_eq!(text, "Language: zh");

        let messages = Messages::from_json(&[(Locale::En, r#"{"k": "{a} and {b} and {a}"}"#)]).unwrap();
        let text = messages.t_args(&EN, "k", &[("a", &1), ("c", &3)]);
        assert_eq!(text, "1 and {b} and 1");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = Messages::from_json(&[(Locale::En, "{not json")]).unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }
}
