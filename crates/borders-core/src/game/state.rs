//! The round state machine.
//!
//! ```text
//!   (no game) ──start──►  InProgress ──guess──► InProgress
//!                              │
//!                              ├──all borders named──► Won
//!                              └──max wrong guesses──► Lost
//! ```
//!
//! "No game" is represented by the absence of a [`GameState`] (the session
//! holds an `Option`).  `Won` and `Lost` are terminal: once the game is over
//! every transition is a no-op.
//!
//! Guesses are compared case-insensitively.  Re-guessing a name and guessing
//! the target itself are ignored so they never count for or against the
//! player.  Any other text that is not a border, including names outside the
//! catalog, is a wrong guess.

use tracing::{debug, info};

use super::hint::{mask_name, MAX_NAMES_HINT_LEVEL};
use super::rng::RandomSource;
use crate::catalog::{same_name, Catalog, CatalogError, Country};
use crate::locale::LocaleTable;

/// Fewest borders a playable target may have.
pub const MIN_TARGET_BORDERS: usize = 2;

/// Tunable rules of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Wrong guesses allowed before the round is lost.
    pub max_wrong_attempts: u32,
    /// Minimum neighbour count for a country to be picked as target.
    pub min_borders: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_wrong_attempts: 6,
            min_borders: MIN_TARGET_BORDERS,
        }
    }
}

/// One accepted guess, in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    /// The name as the player submitted it.
    pub country_name: String,
    /// Whether it was one of the target's borders.
    pub is_correct: bool,
}

/// Derived round status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a guess left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The round has already ended.
    GameOver,
    /// The same name (any case) was guessed before.
    AlreadyGuessed,
    /// The name is the target country itself.
    TargetCountry,
    /// The input was empty or whitespace.
    Blank,
}

/// Result of [`GameState::make_guess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    Ignored(IgnoreReason),
}

/// The countries a round may be played on.
///
/// Built once from the catalog so that starting a round cannot fail.
#[derive(Debug, Clone)]
pub struct TargetPool {
    targets: Vec<Country>,
}

impl TargetPool {
    /// Collects every catalog country with at least `min_borders` borders.
    ///
    /// Thresholds below [`MIN_TARGET_BORDERS`] are raised to it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NoEligibleTargets`] if no country qualifies.
    pub fn new(catalog: &Catalog, min_borders: usize) -> Result<Self, CatalogError> {
        let min_borders = min_borders.max(MIN_TARGET_BORDERS);
        let targets: Vec<Country> = catalog
            .eligible_targets(min_borders)
            .into_iter()
            .cloned()
            .collect();
        if targets.is_empty() {
            return Err(CatalogError::NoEligibleTargets { min_borders });
        }
        Ok(Self { targets })
    }

    /// Number of eligible countries.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Never `true` for a constructed pool.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Eligible countries in catalog order.
    pub fn targets(&self) -> &[Country] {
        &self.targets
    }

    /// Picks a target uniformly at random.
    pub fn pick(&self, rng: &mut dyn RandomSource) -> &Country {
        let i = rng.next_index(self.targets.len()).min(self.targets.len() - 1);
        &self.targets[i]
    }
}

/// State of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    current_country: Country,
    guesses: Vec<Guess>,
    correct_guesses: Vec<String>,
    wrong_guesses: u32,
    game_over: bool,
    won: bool,
    show_outlines: bool,
    names_hint_level: u8,
    max_wrong_attempts: u32,
}

impl GameState {
    /// Starts a round on a random country from `pool`.
    pub fn start(pool: &TargetPool, rules: &GameRules, rng: &mut dyn RandomSource) -> Self {
        let target = pool.pick(rng).clone();
        info!("round started: target has {} borders", target.borders.len());
        Self::with_target(target, rules)
    }

    /// Starts a round on a given country.
    pub fn with_target(target: Country, rules: &GameRules) -> Self {
        Self {
            current_country: target,
            guesses: Vec::new(),
            correct_guesses: Vec::new(),
            wrong_guesses: 0,
            game_over: false,
            won: false,
            show_outlines: false,
            names_hint_level: 0,
            max_wrong_attempts: rules.max_wrong_attempts,
        }
    }

    /// Submits a guess.
    ///
    /// Leading and trailing whitespace is ignored; otherwise the name is
    /// recorded as typed.
    pub fn make_guess(&mut self, name: &str) -> GuessOutcome {
        let name = name.trim();
        let ignored = if self.game_over {
            Some(IgnoreReason::GameOver)
        } else if name.is_empty() {
            Some(IgnoreReason::Blank)
        } else if self.current_country.is_named(name) {
            Some(IgnoreReason::TargetCountry)
        } else if self.guesses.iter().any(|g| same_name(&g.country_name, name)) {
            Some(IgnoreReason::AlreadyGuessed)
        } else {
            None
        };
        if let Some(reason) = ignored {
            debug!("guess {name:?} ignored: {reason:?}");
            return GuessOutcome::Ignored(reason);
        }

        let is_correct = self.current_country.borders_on(name);
        self.guesses.push(Guess {
            country_name: name.to_string(),
            is_correct,
        });
        if is_correct {
            self.correct_guesses.push(name.to_string());
        } else {
            self.wrong_guesses += 1;
        }
        self.recompute_status();

        debug!(
            "guess {name:?} {}; {} correct, {} wrong",
            if is_correct { "correct" } else { "wrong" },
            self.correct_guesses.len(),
            self.wrong_guesses
        );
        if self.game_over {
            info!("round over: {:?}", self.status());
        }

        if is_correct {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Wrong
        }
    }

    /// Reveals the outlines of all missing neighbours.
    ///
    /// Returns `false` (no change) if already shown or the game is over.
    pub fn show_outlines_hint(&mut self) -> bool {
        if self.show_outlines || self.game_over {
            return false;
        }
        self.show_outlines = true;
        true
    }

    /// Reveals one more leading character of each missing neighbour's name.
    ///
    /// Returns `false` (no change) at the maximum level or once the game is
    /// over.
    pub fn show_names_hint(&mut self) -> bool {
        if self.names_hint_level >= MAX_NAMES_HINT_LEVEL || self.game_over {
            return false;
        }
        self.names_hint_level += 1;
        true
    }

    fn recompute_status(&mut self) {
        let all_found = self.missing_borders().is_empty();
        let out_of_attempts = self.wrong_guesses >= self.max_wrong_attempts;
        self.game_over = all_found || out_of_attempts;
        self.won = all_found;

        debug_assert!(self.wrong_guesses <= self.max_wrong_attempts);
        debug_assert_eq!(
            self.correct_guesses.len() + self.wrong_guesses as usize,
            self.guesses.len()
        );
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The country whose neighbours are being guessed.
    pub fn current_country(&self) -> &Country {
        &self.current_country
    }

    /// Every accepted guess in order.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Correct guesses, as typed, in order.
    pub fn correct_guesses(&self) -> &[String] {
        &self.correct_guesses
    }

    /// Wrong guesses, as typed, in order.
    pub fn wrong_guess_names(&self) -> Vec<&str> {
        self.guesses
            .iter()
            .filter(|g| !g.is_correct)
            .map(|g| g.country_name.as_str())
            .collect()
    }

    /// Number of wrong guesses so far.
    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    /// Wrong guesses allowed in this round.
    pub fn max_wrong_attempts(&self) -> u32 {
        self.max_wrong_attempts
    }

    /// Wrong guesses left before the round is lost.
    pub fn remaining_attempts(&self) -> u32 {
        self.max_wrong_attempts.saturating_sub(self.wrong_guesses)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.won) {
            (false, _) => GameStatus::InProgress,
            (true, true) => GameStatus::Won,
            (true, false) => GameStatus::Lost,
        }
    }

    /// Whether the outlines hint is active.
    pub fn show_outlines(&self) -> bool {
        self.show_outlines
    }

    /// Current names-hint level (0..=3).
    pub fn names_hint_level(&self) -> u8 {
        self.names_hint_level
    }

    /// Borders not yet guessed, in catalog order (canonical spelling).
    pub fn missing_borders(&self) -> Vec<&str> {
        self.current_country
            .borders
            .iter()
            .filter(|b| !self.correct_guesses.iter().any(|g| same_name(g, b)))
            .map(String::as_str)
            .collect()
    }

    /// `(canonical, masked display name)` for every missing border.
    ///
    /// Empty while the names hint has not been requested.
    pub fn masked_missing_borders(&self, locale: &LocaleTable) -> Vec<(String, String)> {
        if self.names_hint_level == 0 {
            return Vec::new();
        }
        self.missing_borders()
            .into_iter()
            .map(|b| {
                (
                    b.to_string(),
                    mask_name(locale.display_name(b), self.names_hint_level),
                )
            })
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
