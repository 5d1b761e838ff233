//! Session: the single entry point for every state change of a player's
//! session.
//!
//! ```text
//!   Session::new ──► (menu) ──start_game──► round in progress ──► won / lost
//!                      ▲                         │
//!                      └────────reset_game───────┘
//! ```
//!
//! A session owns the optional round (`None` while in the menu), the matcher
//! for the current display locale, and the map zoom.  Locale and session id
//! travel in an explicit [`SessionContext`]; nothing is global.

use std::sync::Arc;

use borders_core::{
    Atlas, Catalog, CatalogError, CountryMatcher, GameRules, GameState, GuessOutcome,
    LocaleError, LocaleTable, Projector, RandomSource, TargetPool, Zoom, ZoomControl,
};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use super::map_scene::{build_scene, MapScene};

/// Error type for session construction and locale changes.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Locale(#[from] LocaleError),
}

/// Who is playing and in which language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub locale: String,
    pub session_id: Uuid,
}

impl SessionContext {
    /// A fresh context with a random session id.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            session_id: Uuid::new_v4(),
        }
    }
}

/// One player's session.
pub struct Session {
    context: SessionContext,
    catalog: Arc<Catalog>,
    locale: LocaleTable,
    matcher: CountryMatcher,
    rules: GameRules,
    pool: TargetPool,
    rng: Box<dyn RandomSource + Send>,
    game: Option<GameState>,
    zoom: ZoomControl,
}

impl Session {
    /// Creates a session in the menu state.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Locale`] if `context.locale` is not a valid built-in locale.
    /// - [`SessionError::Catalog`] if no country satisfies `rules.min_borders`.
    pub fn new(
        context: SessionContext,
        catalog: Arc<Catalog>,
        rules: GameRules,
        rng: Box<dyn RandomSource + Send>,
    ) -> Result<Self, SessionError> {
        let locale = LocaleTable::builtin(&context.locale, &catalog)?;
        let matcher = CountryMatcher::new(&catalog, &locale);
        let pool = TargetPool::new(&catalog, rules.min_borders)?;
        info!(
            session_id = %context.session_id,
            locale = %context.locale,
            "session created with {} playable countries",
            pool.len()
        );
        Ok(Self {
            context,
            catalog,
            locale,
            matcher,
            rules,
            pool,
            rng,
            game: None,
            zoom: ZoomControl::default(),
        })
    }

    /// Sets the zoom rounds start at.
    pub fn with_home_zoom(mut self, home: Zoom) -> Self {
        self.zoom = ZoomControl::new(home);
        self
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    /// The running round, or `None` while in the menu.
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn locale(&self) -> &LocaleTable {
        &self.locale
    }

    /// Localized name for a canonical country name.
    pub fn display_name<'a>(&'a self, canonical: &'a str) -> &'a str {
        self.locale.display_name(canonical)
    }

    // ── Round lifecycle ───────────────────────────────────────────────────────

    /// Starts a new round, replacing any current one.
    pub fn start_game(&mut self) -> &GameState {
        let state = GameState::start(&self.pool, &self.rules, self.rng.as_mut());
        self.zoom.follow_target(Some(&state.current_country().name));
        self.game.insert(state)
    }

    /// Returns to the menu.
    pub fn reset_game(&mut self) {
        if self.game.take().is_some() {
            info!(session_id = %self.context.session_id, "round abandoned");
        }
        self.zoom.follow_target(None);
    }

    /// Submits a guess.  Returns `None` while in the menu.
    ///
    /// Text naming a country exactly in the current locale (display name or
    /// alias, any case) is resolved to its canonical name first; anything
    /// else is passed through as typed.
    pub fn make_guess(&mut self, name: &str) -> Option<GuessOutcome> {
        let game = self.game.as_mut()?;
        let resolved = self.matcher.resolve(name).unwrap_or(name);
        Some(game.make_guess(resolved))
    }

    /// Activates the outlines hint; `false` if nothing changed.
    pub fn show_outlines_hint(&mut self) -> bool {
        self.game
            .as_mut()
            .is_some_and(GameState::show_outlines_hint)
    }

    /// Reveals one more letter of each missing border; `false` if nothing changed.
    pub fn show_names_hint(&mut self) -> bool {
        self.game.as_mut().is_some_and(GameState::show_names_hint)
    }

    /// `(canonical, masked display name)` of each missing border.
    pub fn masked_missing_borders(&self) -> Vec<(String, String)> {
        self.game
            .as_ref()
            .map(|game| game.masked_missing_borders(&self.locale))
            .unwrap_or_default()
    }

    // ── Search ────────────────────────────────────────────────────────────────

    /// Candidates for `query`, excluding the target and everything guessed.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        let exclude: Vec<&str> = match &self.game {
            Some(game) => game
                .guesses()
                .iter()
                .map(|g| g.country_name.as_str())
                .chain(std::iter::once(game.current_country().name.as_str()))
                .collect(),
            None => Vec::new(),
        };
        self.matcher.search(query, &exclude)
    }

    /// Switches the display locale and rebuilds the matcher.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Locale`] and keeps the current locale if `tag`
    /// is not a built-in locale.
    pub fn set_locale(&mut self, tag: &str) -> Result<(), SessionError> {
        let locale = LocaleTable::builtin(tag, &self.catalog)?;
        self.matcher = CountryMatcher::new(&self.catalog, &locale);
        self.locale = locale;
        self.context.locale = tag.to_string();
        info!(session_id = %self.context.session_id, "locale switched to {tag}");
        Ok(())
    }

    // ── Map ───────────────────────────────────────────────────────────────────

    pub fn zoom(&self) -> Zoom {
        self.zoom.zoom()
    }

    pub fn zoom_in(&mut self) -> Zoom {
        self.zoom.zoom_in()
    }

    pub fn zoom_out(&mut self) -> Zoom {
        self.zoom.zoom_out()
    }

    /// The framed map for the current round, if anything can be drawn.
    pub fn map_scene(&self, atlas: &Atlas, projector: &Projector) -> Option<MapScene> {
        let game = self.game.as_ref()?;
        build_scene(game, &self.catalog, atlas, projector, self.zoom.zoom())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use borders_core::{GameStatus, IgnoreReason};

    /// Always picks the same index.
    struct FixedIndex(usize);

    impl RandomSource for FixedIndex {
        fn next_index(&mut self, len: usize) -> usize {
            self.0 % len
        }
    }

    fn session_with(locale: &str, index: usize) -> Session {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        Session::new(
            SessionContext::new(locale),
            catalog,
            GameRules::default(),
            Box::new(FixedIndex(index)),
        )
        .expect("valid session")
    }

    fn session() -> Session {
        session_with("en", 0)
    }

    #[test]
    fn test_new_session_starts_in_menu() {
        let s = session();
        assert!(s.game().is_none());
        assert_eq!(s.context().locale, "en");
    }

    #[test]
    fn test_new_session_rejects_unknown_locale() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let result = Session::new(
            SessionContext::new("xx"),
            catalog,
            GameRules::default(),
            Box::new(FixedIndex(0)),
        );
        assert!(matches!(result, Err(SessionError::Locale(_))));
    }

    #[test]
    fn test_new_session_rejects_impossible_rules() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let rules = GameRules {
            min_borders: 100,
            ..GameRules::default()
        };
        let result = Session::new(
            SessionContext::new("en"),
            catalog,
            rules,
            Box::new(FixedIndex(0)),
        );
        assert!(matches!(result, Err(SessionError::Catalog(_))));
    }

    #[test]
    fn test_menu_actions_are_no_ops() {
        let mut s = session();
        assert_eq!(s.make_guess("France"), None);
        assert!(!s.show_outlines_hint());
        assert!(!s.show_names_hint());
        assert!(s.masked_missing_borders().is_empty());
    }

    #[test]
    fn test_start_game_picks_from_the_pool() {
        let mut s = session();
        let target = s.start_game().current_country().clone();
        assert!(target.borders.len() >= 2);
        assert_eq!(s.game().unwrap().status(), GameStatus::InProgress);
    }

    #[test]
    fn test_guess_flows_through_to_the_round() {
        let mut s = session();
        let border = s.start_game().current_country().borders[0].clone();

        assert_eq!(s.make_guess(&border), Some(GuessOutcome::Correct));
        assert_eq!(
            s.make_guess(&border.to_uppercase()),
            Some(GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed))
        );
    }

    fn france_session(locale: &str) -> Session {
        let mut s = session_with(locale, 0);
        let france = s
            .pool
            .targets()
            .iter()
            .position(|c| c.name == "France")
            .unwrap();
        s.rng = Box::new(FixedIndex(france));
        assert_eq!(s.start_game().current_country().name, "France");
        s
    }

    #[test]
    fn test_localized_border_name_counts_as_correct() {
        let mut s = france_session("de");

        assert_eq!(s.make_guess("Spanien"), Some(GuessOutcome::Correct));
        assert_eq!(
            s.make_guess("Spain"),
            Some(GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed))
        );

        let game = s.game().unwrap();
        assert_eq!(game.wrong_guesses(), 0);
        assert!(!game.missing_borders().contains(&"Spain"));
    }

    #[test]
    fn test_localized_target_name_is_ignored() {
        let mut s = france_session("de");
        assert_eq!(
            s.make_guess("frankreich"),
            Some(GuessOutcome::Ignored(IgnoreReason::TargetCountry))
        );
    }

    #[test]
    fn test_alias_of_a_non_border_is_wrong_and_unknown_text_passes_through() {
        let mut s = france_session("en");

        assert_eq!(s.make_guess("UK"), Some(GuessOutcome::Wrong));
        assert_eq!(s.make_guess("Atlantis"), Some(GuessOutcome::Wrong));

        let wrong = s.game().unwrap().wrong_guess_names();
        assert_eq!(wrong, vec!["United Kingdom", "Atlantis"]);
    }

    #[test]
    fn test_reset_returns_to_menu() {
        let mut s = session();
        s.start_game();
        s.reset_game();
        assert!(s.game().is_none());
    }

    #[test]
    fn test_suggestions_exclude_target_and_guesses() {
        let mut s = session();
        let target = s.start_game().current_country().clone();
        let border = target.borders[0].clone();
        s.make_guess(&border);

        let for_target = s.suggestions(&target.name);
        let for_border = s.suggestions(&border);

        assert!(!for_target.contains(&target.name));
        assert!(!for_border.contains(&border));
    }

    #[test]
    fn test_suggestions_in_menu_are_unfiltered() {
        let s = session();
        assert_eq!(s.suggestions("France").first().map(String::as_str), Some("France"));
    }

    #[test]
    fn test_set_locale_rebuilds_matcher() {
        let mut s = session();
        assert!(s.suggestions("Deutschland").first().map(String::as_str) != Some("Germany"));

        s.set_locale("de").unwrap();

        assert_eq!(s.context().locale, "de");
        assert_eq!(s.display_name("Germany"), "Deutschland");
        assert_eq!(
            s.suggestions("Deutschland").first().map(String::as_str),
            Some("Germany")
        );
    }

    #[test]
    fn test_set_locale_failure_keeps_current_locale() {
        let mut s = session_with("de", 0);
        assert!(s.set_locale("fr").is_err());
        assert_eq!(s.locale().locale(), "de");
    }

    #[test]
    fn test_zoom_resets_when_target_changes() {
        let mut s = session_with("en", 0);
        s.start_game();
        s.zoom_in();
        s.zoom_in();
        assert_eq!(s.zoom().factor(), 8.0);

        s.reset_game();
        assert_eq!(s.zoom(), Zoom::DEFAULT);
    }

    #[test]
    fn test_home_zoom_applies_to_new_rounds() {
        let mut s = session().with_home_zoom(Zoom::MIN);
        s.start_game();
        assert_eq!(s.zoom(), Zoom::MIN);
        s.zoom_out();
        assert_eq!(s.zoom(), Zoom::MIN);
    }

    #[test]
    fn test_map_scene_requires_a_round() {
        let s = session();
        assert!(s.map_scene(&Atlas::default(), &Projector::default()).is_none());
    }
}
