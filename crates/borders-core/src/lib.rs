//! # borders-core
//!
//! Domain library for the border quiz: a target country is picked at random
//! and the player names every country it shares a land border with before
//! running out of wrong attempts.
//!
//! This crate has no I/O of its own.  Everything that touches files, clocks
//! or terminals lives in `borders-app`.
//!
//! - **`catalog`** – The static country → borders graph.
//! - **`locale`** – Localized display names and aliases per country.
//! - **`search`** – Exact and fuzzy matching of typed text to countries.
//! - **`game`** – The round state machine, hints and target selection.
//! - **`geo`** – Atlas decoding, projection, viewport framing and SVG.

pub mod catalog;
pub mod game;
pub mod geo;
pub mod locale;
pub mod search;

pub use catalog::{same_name, Catalog, CatalogError, Country};
pub use game::{
    mask_name, GameRules, GameState, GameStatus, Guess, GuessOutcome, IgnoreReason, Lcg,
    RandomSource, TargetPool, MAX_NAMES_HINT_LEVEL, MIN_TARGET_BORDERS,
};
pub use geo::{Atlas, AtlasError, Projector, ShapeRole, ViewBox, Zoom, ZoomControl};
pub use locale::{LocaleError, LocaleTable, BUILTIN_LOCALES};
pub use search::CountryMatcher;
