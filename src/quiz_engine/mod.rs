//! Core quiz engine — alphabet mapping, question and distractor generation,
//! answer evaluation, and the session state machine.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: letters, positions, modes, rounds, outcomes |
//! | `alphabet`    | Bijection between letters A–Z and positions 1–26 |
//! | `distractors` | Plausible option sets with Fisher-Yates shuffle |
//! | `generator`   | `QuestionSource` — random rounds per mode |
//! | `evaluator`   | Choice and typed answer protocols |
//! | `session`     | `SessionState` — Idle → Active → Ended |
//! | `clock`       | Injectable time source |
//! | `timer`       | Cancellable elapsed-time tick handle |
//! | `render`      | `QuizRenderer` hooks and `MM:SS` formatting |
//! | `snapshot`    | JSON view state for remote front ends |
//! | `config`      | `QuizConfig`, loadable from JSON |
//! | `error`       | `QuizError` |

pub mod alphabet;
pub mod clock;
pub mod config;
pub mod distractors;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod models;
pub mod render;
pub mod session;
pub mod snapshot;
pub mod timer;

// Re-export the public API surface so callers can use
// `quiz_engine::SessionState` without reaching into sub-modules.
pub use alphabet::{letter_to_position, position_to_letter, AlphabetSymbol, ALPHABET_LEN};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ChoiceSettings, FeedbackDelays, QuizConfig};
pub use distractors::generate_choices;
pub use error::QuizError;
pub use evaluator::{evaluate_choice, evaluate_typed, TypedVerdict};
pub use generator::{generate_round, QuestionSource};
pub use models::{GameOver, Letter, Mode, Outcome, Phase, Position, QuizRound, Symbol};
pub use render::{format_elapsed, NullRenderer, QuizRenderer};
pub use session::{PendingTransition, SessionState, SubmitOutcome, TransitionKind};
pub use snapshot::view_state;
pub use timer::PeriodicTimer;
