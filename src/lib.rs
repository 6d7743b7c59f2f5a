//! # alphabet_drill
//!
//! A single-player drill for alphabet-position recall: A is 1, Z is 26, and
//! the player maps letters to numbers or numbers to letters against a running
//! clock until the first mistake.
//!
//! ## How it works
//!
//! 1. Build a [`SessionState`] with a [`QuizConfig`], a [`Clock`], and a
//!    [`QuizRenderer`] that draws the game.
//! 2. Call [`SessionState::start`] with one of the four [`Mode`]s. The session
//!    draws a question and, for choice modes, five shuffled options biased
//!    towards the neighbours of the right answer.
//! 3. Feed user input to [`SessionState::submit_answer`]. Typed modes send
//!    every keystroke; the first complete answer is judged.
//! 4. Call [`SessionState::poll`] from the host loop to run the elapsed-time
//!    tick and the delayed move to the next round or the game-over screen.
//!
//! ## Key features
//!
//! - **Deterministic**: set `rng_seed` in the config to replay the same
//!   question sequence — useful for tests and demos.
//! - **No wall clock in tests**: [`ManualClock`] drives ticks and feedback
//!   delays explicitly.
//! - **Front-end agnostic**: render through [`QuizRenderer`] or pull a JSON
//!   snapshot with [`view_state`].
//!
//! ## Quick start
//!
//! ```rust
//! use alphabet_drill::{
//!     FeedbackDelays, ManualClock, Mode, NullRenderer, Phase, QuizConfig, SessionState,
//!     SubmitOutcome,
//! };
//!
//! let config = QuizConfig {
//!     feedback: FeedbackDelays::immediate(),
//!     rng_seed: Some(42),
//!     ..QuizConfig::default()
//! };
//! let mut session = SessionState::new(config, ManualClock::new(), NullRenderer);
//! session.start(Mode::LetterToNumberChoice);
//!
//! let answer = session.current_round().unwrap().answer.to_string();
//! assert_eq!(session.submit_answer(&answer), SubmitOutcome::Correct { score: 1 });
//!
//! session.quit();
//! assert_eq!(session.phase(), Phase::Ended);
//! assert_eq!(session.game_over().unwrap().final_score, 1);
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `alphabet_drill::SessionState`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    evaluate_choice, evaluate_typed, format_elapsed, generate_choices, letter_to_position,
    position_to_letter, view_state, ChoiceSettings, Clock, FeedbackDelays, GameOver, Letter,
    ManualClock, Mode, NullRenderer, Outcome, Phase, Position, QuestionSource, QuizConfig,
    QuizError, QuizRenderer, QuizRound, SessionState, SubmitOutcome, Symbol, SystemClock,
    TypedVerdict,
};
