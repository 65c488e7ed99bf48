//! Label localization.
//!
//! Enumeration labels ("Open", "Urgent", "Portal", ...) are English keys.
//! A [`Translate`] implementation maps them to the text for a locale and
//! falls back to the key itself when it has no entry.

use std::collections::HashMap;

use crate::error::FreshserviceError;

/// Label tables shipped with the crate, keyed by language code.
///
/// English needs no table since the label keys are English.
const BUNDLED: &[(&str, &[(&str, &str)])] = &[
    (
        "de",
        &[
            ("Open", "Offen"),
            ("Pending", "Ausstehend"),
            ("Resolved", "Gelöst"),
            ("Closed", "Geschlossen"),
            ("Low", "Niedrig"),
            ("Medium", "Mittel"),
            ("High", "Hoch"),
            ("Urgent", "Dringend"),
            ("Email", "E-Mail"),
            ("Portal", "Portal"),
            ("Phone", "Telefon"),
            ("Chat", "Chat"),
            ("Feedback widget", "Feedback-Widget"),
            ("Walkup", "Persönlich"),
        ],
    ),
    (
        "ru",
        &[
            ("Open", "Открыт"),
            ("Pending", "В ожидании"),
            ("Resolved", "Решён"),
            ("Closed", "Закрыт"),
            ("Low", "Низкий"),
            ("Medium", "Средний"),
            ("High", "Высокий"),
            ("Urgent", "Срочный"),
            ("Email", "Эл. почта"),
            ("Portal", "Портал"),
            ("Phone", "Телефон"),
            ("Chat", "Чат"),
            ("Feedback widget", "Виджет обратной связи"),
            ("Walkup", "Лично"),
        ],
    ),
];

/// Looks up the display text for a label key.
pub trait Translate {
    /// Returns the translated text, or `key` unchanged when none exists.
    fn translate(&self, key: &str) -> String;
}

/// Translator that returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translate for Identity {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Adapts a lookup function into a translator.
///
/// The function returns `None` for keys it does not know.
#[derive(Debug, Clone, Copy)]
pub struct Lookup<F>(pub F);

impl<F> Translate for Lookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn translate(&self, key: &str) -> String {
        (self.0)(key).unwrap_or_else(|| key.to_string())
    }
}

/// In-memory translation table for one locale.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    locale: String,
    entries: HashMap<String, String>,
}

impl Translations {
    /// Creates an empty table for `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    /// Returns the bundled table for `locale`.
    ///
    /// Region suffixes are ignored (`de_DE` and `de-AT` both use `de`). An
    /// unknown locale gets an empty table, so labels stay in English.
    pub fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        let entries = BUNDLED
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(_, table)| {
                table
                    .iter()
                    .map(|(key, text)| (key.to_string(), text.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            locale: locale.to_string(),
            entries,
        }
    }

    /// Loads a table from a flat JSON object of key → text.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::Serialization` if `json` is not an
    /// object of strings.
    pub fn from_json(locale: impl Into<String>, json: &str) -> Result<Self, FreshserviceError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self {
            locale: locale.into(),
            entries,
        })
    }

    /// Adds or replaces one entry.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }

    /// The locale this table belongs to.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for Translations {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_returns_key() {
        assert_eq!(Identity.translate("Open"), "Open");
    }

    #[test]
    fn test_table_falls_back_to_key() {
        let table = Translations::new("de").with_entry("Open", "Offen");
        assert_eq!(table.translate("Open"), "Offen");
        assert_eq!(table.translate("Closed"), "Closed");
        assert_eq!(table.locale(), "de");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_bundled_locale() {
        let table = Translations::for_locale("de");
        assert_eq!(table.translate("Open"), "Offen");
        assert_eq!(table.translate("AWS Cloudwatch"), "AWS Cloudwatch");

        let table = Translations::for_locale("ru_RU");
        assert_eq!(table.locale(), "ru_RU");
        assert_eq!(table.translate("Urgent"), "Срочный");
    }

    #[test]
    fn test_unknown_locale_keeps_english() {
        let table = Translations::for_locale("en");
        assert!(table.is_empty());
        assert_eq!(table.translate("Pending"), "Pending");
        assert!(Translations::for_locale("xx").is_empty());
    }

    #[test]
    fn test_from_json() {
        let table = Translations::from_json("ru", r#"{"Low": "Низкий", "High": "Высокий"}"#).unwrap();
        assert_eq!(table.translate("Low"), "Низкий");
        assert_eq!(table.translate("Urgent"), "Urgent");
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Translations::from_json("ru", "[1, 2]").unwrap_err();
        assert!(matches!(err, FreshserviceError::Serialization(_)));
    }

    #[test]
    fn test_closure_translator() {
        let lookup = Lookup(|key: &str| (key == "Email").then(|| "E-Mail".to_string()));
        assert_eq!(lookup.translate("Email"), "E-Mail");
        assert_eq!(lookup.translate("Phone"), "Phone");
    }
}
