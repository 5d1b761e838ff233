//! Localized country names and search aliases.
//!
//! Each locale is a TOML table keyed by canonical country name:
//!
//! ```toml
//! locale = "de"
//!
//! [countries]
//! "Germany" = { display = "Deutschland", aliases = ["BRD", "DE"] }
//! "United Kingdom" = { display = "Vereinigtes Königreich", aliases = ["UK"] }
//! ```
//!
//! A table is validated against the [`Catalog`] when it is loaded: every
//! catalog country needs an entry and every key must name a catalog country.
//! Missing entries fail the load instead of silently falling back to English
//! at render time.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::catalog::Catalog;

/// Locale tags with a table compiled into the crate.
pub const BUILTIN_LOCALES: &[&str] = &["en", "de"];

const EN_TOML: &str = include_str!("../../data/locales/en.toml");
const DE_TOML: &str = include_str!("../../data/locales/de.toml");

/// Errors that can occur when loading a locale table.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// No built-in table exists for the requested tag.
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// The TOML text could not be parsed.
    #[error("failed to parse locale table: {0}")]
    Parse(#[from] toml::de::Error),

    /// A catalog country has no entry in the table.
    #[error("locale {locale} has no entry for {country}")]
    MissingEntry { locale: String, country: String },

    /// The table names a country the catalog does not know.
    #[error("locale {locale} has an entry for unknown country {country}")]
    UnknownCountry { locale: String, country: String },

    /// Two keys name the same country, e.g. differing only in case.
    #[error("locale {locale} has more than one entry for {country}")]
    DuplicateEntry { locale: String, country: String },

    /// An entry has a blank display name.
    #[error("locale {locale} has an empty display name for {country}")]
    EmptyDisplay { locale: String, country: String },
}

/// Display name and search aliases of one country in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryLocale {
    /// Name shown to the player.
    pub display: String,
    /// Abbreviations and alternative names accepted by search.
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LocaleFile {
    locale: String,
    countries: BTreeMap<String, CountryLocale>,
}

/// Validated mapping from canonical country name to its [`CountryLocale`].
#[derive(Debug, Clone)]
pub struct LocaleTable {
    locale: String,
    entries: HashMap<String, CountryLocale>,
}

impl LocaleTable {
    /// Loads one of the [`BUILTIN_LOCALES`].
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::UnsupportedLocale`] for an unknown tag, or any
    /// validation error from [`LocaleTable::from_toml`].
    pub fn builtin(tag: &str, catalog: &Catalog) -> Result<Self, LocaleError> {
        let text = match tag.to_ascii_lowercase().as_str() {
            "en" => EN_TOML,
            "de" => DE_TOML,
            _ => return Err(LocaleError::UnsupportedLocale(tag.to_string())),
        };
        Self::from_toml(text, catalog)
    }

    /// Parses and validates a locale table.
    ///
    /// Keys are matched to catalog names case-insensitively and stored under
    /// the canonical spelling.
    ///
    /// # Errors
    ///
    /// - [`LocaleError::Parse`] for malformed TOML.
    /// - [`LocaleError::UnknownCountry`] for a key the catalog does not know.
    /// - [`LocaleError::DuplicateEntry`] for two keys naming one country.
    /// - [`LocaleError::EmptyDisplay`] for a blank display name.
    /// - [`LocaleError::MissingEntry`] for a catalog country with no entry.
    pub fn from_toml(text: &str, catalog: &Catalog) -> Result<Self, LocaleError> {
        let file: LocaleFile = toml::from_str(text)?;
        let locale = file.locale;

        let mut entries = HashMap::with_capacity(file.countries.len());
        for (key, record) in file.countries {
            let Some(canonical) = catalog.canonical_name(&key) else {
                return Err(LocaleError::UnknownCountry {
                    locale,
                    country: key,
                });
            };
            if record.display.trim().is_empty() {
                return Err(LocaleError::EmptyDisplay {
                    locale,
                    country: canonical.to_string(),
                });
            }
            if entries.insert(canonical.to_string(), record).is_some() {
                return Err(LocaleError::DuplicateEntry {
                    locale,
                    country: canonical.to_string(),
                });
            }
        }

        if let Some(missing) = catalog
            .countries()
            .iter()
            .find(|c| !entries.contains_key(&c.name))
        {
            return Err(LocaleError::MissingEntry {
                locale,
                country: missing.name.clone(),
            });
        }

        debug!("loaded locale {locale} with {} entries", entries.len());
        Ok(Self { locale, entries })
    }

    /// The locale tag, e.g. `"en"`.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The record for a canonical country name.
    pub fn get(&self, canonical: &str) -> Option<&CountryLocale> {
        self.entries.get(canonical)
    }

    /// Display name for `canonical`, or `canonical` itself if untranslated.
    ///
    /// A validated table covers the whole catalog, so the fallback only
    /// applies to names from outside it (e.g. free-text wrong guesses).
    pub fn display_name<'a>(&'a self, canonical: &'a str) -> &'a str {
        self.entries
            .get(canonical)
            .map_or(canonical, |e| e.display.as_str())
    }

    /// Search aliases for `canonical` (empty if none).
    pub fn aliases(&self, canonical: &str) -> &[String] {
        self.entries
            .get(canonical)
            .map_or(&[][..], |e| e.aliases.as_slice())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_catalog() -> Catalog {
        Catalog::from_entries(vec![
            ("Germany".to_string(), vec!["Austria".to_string()]),
            ("Austria".to_string(), vec!["Germany".to_string()]),
        ])
        .unwrap()
    }

    #[test]
    fn test_builtin_locales_cover_the_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        for tag in BUILTIN_LOCALES {
            let table = LocaleTable::builtin(tag, &catalog)
                .unwrap_or_else(|e| panic!("locale {tag} must load: {e}"));
            assert_eq!(table.locale(), *tag);
        }
    }

    #[test]
    fn test_builtin_rejects_unknown_tag() {
        let catalog = Catalog::builtin().unwrap();
        let err = LocaleTable::builtin("xx", &catalog).unwrap_err();
        assert!(matches!(err, LocaleError::UnsupportedLocale(tag) if tag == "xx"));
    }

    #[test]
    fn test_builtin_german_display_names() {
        let catalog = Catalog::builtin().unwrap();
        let de = LocaleTable::builtin("de", &catalog).unwrap();
        assert_eq!(de.display_name("Germany"), "Deutschland");
        assert_eq!(de.display_name("Spain"), "Spanien");
    }

    #[test]
    fn test_builtin_english_aliases_include_initialisms() {
        let catalog = Catalog::builtin().unwrap();
        let en = LocaleTable::builtin("en", &catalog).unwrap();
        assert!(en.aliases("United Kingdom").iter().any(|a| a == "UK"));
        assert!(en.aliases("United States").iter().any(|a| a == "US"));
        assert!(en.aliases("Chad").is_empty());
    }

    #[test]
    fn test_from_toml_fails_fast_on_missing_entry() {
        let text = r#"
locale = "en"
[countries]
"Germany" = { display = "Germany" }
"#;
        let err = LocaleTable::from_toml(text, &tiny_catalog()).unwrap_err();
        assert!(matches!(
            err,
            LocaleError::MissingEntry { ref country, .. } if country == "Austria"
        ));
    }

    #[test]
    fn test_from_toml_rejects_unknown_country() {
        let text = r#"
locale = "en"
[countries]
"Germany" = { display = "Germany" }
"Austria" = { display = "Austria" }
"Atlantis" = { display = "Atlantis" }
"#;
        let err = LocaleTable::from_toml(text, &tiny_catalog()).unwrap_err();
        assert!(matches!(err, LocaleError::UnknownCountry { .. }));
    }

    #[test]
    fn test_from_toml_rejects_blank_display_name() {
        let text = r#"
locale = "en"
[countries]
"Germany" = { display = "  " }
"Austria" = { display = "Austria" }
"#;
        let err = LocaleTable::from_toml(text, &tiny_catalog()).unwrap_err();
        assert!(matches!(err, LocaleError::EmptyDisplay { .. }));
    }

    #[test]
    fn test_from_toml_rejects_keys_differing_only_in_case() {
        let text = r#"
locale = "en"
[countries]
"germany" = { display = "Germany" }
"Germany" = { display = "Deutschland" }
"Austria" = { display = "Austria" }
"#;
        let err = LocaleTable::from_toml(text, &tiny_catalog()).unwrap_err();
        assert!(matches!(
            err,
            LocaleError::DuplicateEntry { ref country, .. } if country == "Germany"
        ));
    }

    #[test]
    fn test_from_toml_resolves_keys_case_insensitively() {
        let text = r#"
locale = "fr"
[countries]
"germany" = { display = "Allemagne" }
"AUSTRIA" = { display = "Autriche", aliases = ["AT"] }
"#;
        let table = LocaleTable::from_toml(text, &tiny_catalog()).unwrap();
        assert_eq!(table.display_name("Germany"), "Allemagne");
        assert_eq!(table.aliases("Austria"), ["AT".to_string()]);
    }

    #[test]
    fn test_from_toml_reports_parse_errors() {
        let err = LocaleTable::from_toml("[[[ nope", &tiny_catalog()).unwrap_err();
        assert!(matches!(err, LocaleError::Parse(_)));
    }

    #[test]
    fn test_display_name_falls_back_for_names_outside_the_table() {
        let catalog = tiny_catalog();
        let text = r#"
locale = "en"
[countries]
"Germany" = { display = "Germany" }
"Austria" = { display = "Austria" }
"#;
        let table = LocaleTable::from_toml(text, &catalog).unwrap();
        assert_eq!(table.display_name("Narnia"), "Narnia");
        assert!(table.aliases("Narnia").is_empty());
    }
}
