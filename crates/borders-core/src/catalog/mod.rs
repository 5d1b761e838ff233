//! Country catalog: the static border graph the quiz is played on.
//!
//! The catalog maps each canonical country name to the ordered list of
//! countries it shares a land border with.  It is built once at startup and
//! never mutated afterwards.
//!
//! # Directed adjacency
//!
//! Borders are stored exactly as listed: "A lists B" does not imply "B lists
//! A".  Construction rejects border names that do not resolve to a catalog
//! country, and [`Catalog::one_directional_borders`] reports edges whose
//! reverse is missing so they can be logged.  A round's target list is the
//! authority for that round; the catalog never rewrites it.

mod data;

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

/// Errors that can occur when building a [`Catalog`].
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// The catalog contains no countries at all.
    #[error("catalog is empty")]
    Empty,

    /// Two entries share a name (compared case-insensitively).
    #[error("duplicate country in catalog: {0}")]
    DuplicateCountry(String),

    /// A border list names a country that is not in the catalog.
    #[error("{country} lists unknown border {border}")]
    UnknownBorder { country: String, border: String },

    /// No country has enough borders to be played.
    #[error("no country has at least {min_borders} borders")]
    NoEligibleTargets { min_borders: usize },
}

/// A country and its land neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// Unique canonical (English) name.
    pub name: String,
    /// Bordering countries in catalog order.
    pub borders: Vec<String>,
}

impl Country {
    /// Returns `true` if `name` is one of this country's borders (any case).
    pub fn borders_on(&self, name: &str) -> bool {
        self.borders.iter().any(|b| same_name(b, name))
    }

    /// Returns `true` if `name` is this country's own name (any case).
    pub fn is_named(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }
}

/// Case-insensitive name equality used throughout the game.
pub fn same_name(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Lookup key for case-insensitive indexing.
fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The immutable country/border graph.
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<Country>,
    /// Lower-cased name → index into `countries`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds the catalog shipped with the game.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogError`] if the built-in table is inconsistent.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_entries(data::COUNTRIES.iter().map(|(name, borders)| {
            (
                (*name).to_string(),
                borders.iter().map(|b| (*b).to_string()).collect::<Vec<_>>(),
            )
        }))
    }

    /// Builds a catalog from `(name, borders)` pairs, preserving their order.
    ///
    /// One-directional borders are accepted and logged at `warn` level.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Empty`] if no entries are given.
    /// - [`CatalogError::DuplicateCountry`] if a name appears twice.
    /// - [`CatalogError::UnknownBorder`] if a border does not resolve.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut countries = Vec::new();
        let mut index = HashMap::new();

        for (name, borders) in entries {
            let key = name_key(&name);
            if index.insert(key, countries.len()).is_some() {
                return Err(CatalogError::DuplicateCountry(name));
            }
            countries.push(Country { name, borders });
        }

        if countries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let catalog = Self { countries, index };
        for country in &catalog.countries {
            if let Some(border) = country.borders.iter().find(|b| catalog.get(b).is_none()) {
                return Err(CatalogError::UnknownBorder {
                    country: country.name.clone(),
                    border: border.clone(),
                });
            }
        }

        for (from, to) in catalog.one_directional_borders() {
            warn!("one-directional border: {from} lists {to} but {to} does not list {from}");
        }

        Ok(catalog)
    }

    /// Looks up a country by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&Country> {
        self.index
            .get(&name_key(name))
            .map(|&i| &self.countries[i])
    }

    /// Resolves any-case input to the canonical spelling.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.get(name).map(|c| c.name.as_str())
    }

    /// All countries in catalog order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Always `false` for a constructed catalog; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Countries with at least `min_borders` neighbours, in catalog order.
    pub fn eligible_targets(&self, min_borders: usize) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|c| c.borders.len() >= min_borders)
            .collect()
    }

    /// Every `(from, to)` edge whose reverse `(to, from)` is missing.
    pub fn one_directional_borders(&self) -> Vec<(String, String)> {
        let mut result = Vec::new();
        for country in &self.countries {
            for border in &country.borders {
                let reciprocal = self
                    .get(border)
                    .is_some_and(|other| other.borders_on(&country.name));
                if !reciprocal {
                    result.push((country.name.clone(), border.clone()));
                }
            }
        }
        result
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
