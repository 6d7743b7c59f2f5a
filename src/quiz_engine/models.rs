use std::fmt;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Alphabet primitives
// ---------------------------------------------------------------------------

/// One of the 26 uppercase letters A..=Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

impl Letter {
    /// Build a letter from either case; anything else is rejected.
    pub fn new(c: char) -> Result<Self, QuizError> {
        if c.is_ascii_alphabetic() {
            Ok(Letter(c.to_ascii_uppercase()))
        } else {
            Err(QuizError::InvalidLetter(c))
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Only the codec builds letters from known-good offsets.
    pub(crate) fn from_index(index: u8) -> Self {
        debug_assert!(index < 26);
        Letter((b'A' + index) as char)
    }
}

impl TryFrom<char> for Letter {
    type Error = QuizError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Letter::new(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-indexed rank of a letter in the alphabet (A = 1 … Z = 26).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    pub const FIRST: Position = Position(1);
    pub const LAST: Position = Position(26);

    pub fn new(value: u8) -> Result<Self, QuizError> {
        if (1..=26).contains(&value) {
            Ok(Position(value))
        } else {
            Err(QuizError::InvalidPosition(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Shift by `offset`; `None` when the result leaves 1..=26.
    pub fn offset(self, offset: i8) -> Option<Position> {
        let shifted = self.0 as i16 + offset as i16;
        if (1..=26).contains(&shifted) {
            Some(Position(shifted as u8))
        } else {
            None
        }
    }
}

impl TryFrom<u8> for Position {
    type Error = QuizError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Position::new(value)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A question, answer or choice value: either side of the alphabet mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Symbol {
    Position(Position),
    Letter(Letter),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Position(p) => write!(f, "{p}"),
            Symbol::Letter(l)   => write!(f, "{l}"),
        }
    }
}

impl From<Letter> for Symbol {
    fn from(letter: Letter) -> Self {
        Symbol::Letter(letter)
    }
}

impl From<Position> for Symbol {
    fn from(position: Position) -> Self {
        Symbol::Position(position)
    }
}

// ---------------------------------------------------------------------------
// Game modes
// ---------------------------------------------------------------------------

/// The four fixed question/answer formats, numbered as on the mode menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    LetterToNumberChoice,
    NumberToLetterChoice,
    LetterToNumberTyped,
    NumberToLetterTyped,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::LetterToNumberChoice,
        Mode::NumberToLetterChoice,
        Mode::LetterToNumberTyped,
        Mode::NumberToLetterTyped,
    ];

    /// Menu number, 1..=4.
    pub fn number(self) -> u8 {
        match self {
            Mode::LetterToNumberChoice => 1,
            Mode::NumberToLetterChoice => 2,
            Mode::LetterToNumberTyped  => 3,
            Mode::NumberToLetterTyped  => 4,
        }
    }

    pub fn is_choice(self) -> bool {
        matches!(self, Mode::LetterToNumberChoice | Mode::NumberToLetterChoice)
    }

    pub fn is_typed(self) -> bool {
        !self.is_choice()
    }

    /// True when the question is a letter and the answer a position.
    pub fn asks_for_position(self) -> bool {
        matches!(self, Mode::LetterToNumberChoice | Mode::LetterToNumberTyped)
    }

    /// Prompt shown above the question.
    pub fn prompt(self) -> &'static str {
        match self {
            Mode::LetterToNumberChoice => "What is the position of:",
            Mode::NumberToLetterChoice => "Which letter is at position:",
            Mode::LetterToNumberTyped  => "Type the position of:",
            Mode::NumberToLetterTyped  => "Type the letter at position:",
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = QuizError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Mode::LetterToNumberChoice),
            2 => Ok(Mode::NumberToLetterChoice),
            3 => Ok(Mode::LetterToNumberTyped),
            4 => Ok(Mode::NumberToLetterTyped),
            _ => Err(QuizError::UnknownMode(n)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::LetterToNumberChoice => "Letter → Number (choice)",
            Mode::NumberToLetterChoice => "Number → Letter (choice)",
            Mode::LetterToNumberTyped  => "Letter → Number (typed)",
            Mode::NumberToLetterTyped  => "Number → Letter (typed)",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Rounds and results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRound {
    /// Increments per round drawn from one question source.
    pub round_id: u64,
    pub mode: Mode,
    pub question: Symbol,
    pub answer: Symbol,
    /// Shuffled options for choice modes; `None` for typed modes.
    pub choices: Option<Vec<Symbol>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct   => write!(f, "correct"),
            Outcome::Incorrect => write!(f, "incorrect"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Active,
    Ended,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle   => write!(f, "idle"),
            Phase::Active => write!(f, "active"),
            Phase::Ended  => write!(f, "ended"),
        }
    }
}

/// Final figures of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    pub mode: Mode,
    pub final_score: u32,
    pub elapsed_secs: u64,
}
