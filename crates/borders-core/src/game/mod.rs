//! Round logic: target selection, guesses, hints and win/loss.

pub mod hint;
pub mod rng;
pub mod state;

pub use hint::{mask_name, MAX_NAMES_HINT_LEVEL};
pub use rng::{Lcg, RandomSource};
pub use state::{
    GameRules, GameState, GameStatus, Guess, GuessOutcome, IgnoreReason, TargetPool,
    MIN_TARGET_BORDERS,
};
