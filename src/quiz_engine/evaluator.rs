use serde::{Deserialize, Serialize};

use crate::quiz_engine::models::{Letter, Mode, Position, Symbol};

/// Result of checking a typed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedVerdict {
    /// The input is a complete answer and may be submitted.
    pub is_valid: bool,
    pub is_correct: bool,
}

impl TypedVerdict {
    /// Incomplete or out-of-range input; the caller keeps waiting.
    pub const PENDING: TypedVerdict = TypedVerdict { is_valid: false, is_correct: false };

    fn judged(is_correct: bool) -> Self {
        TypedVerdict { is_valid: true, is_correct }
    }
}

/// Parse a position answer: trimmed integer in 1..=26.
pub fn parse_position(input: &str) -> Option<Position> {
    let n: u8 = input.trim().parse().ok()?;
    Position::new(n).ok()
}

/// Parse a letter answer: exactly one ASCII letter, either case.
pub fn parse_letter(input: &str) -> Option<Letter> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Letter::new(c).ok(),
        _ => None,
    }
}

/// Choice protocol: normalise `selected` to the kind of `expected`, then
/// compare exactly. Unparseable selections are simply wrong.
pub fn evaluate_choice(selected: &str, expected: Symbol) -> bool {
    match expected {
        Symbol::Position(p) => parse_position(selected) == Some(p),
        Symbol::Letter(l)   => parse_letter(selected.trim()) == Some(l),
    }
}

/// Typed protocol, queried on every keystroke.
///
/// Position modes accept a trimmed integer in 1..=26; letter modes accept a
/// single letter in either case. Anything else is [`TypedVerdict::PENDING`],
/// which must not advance or end the round. Choice modes never accept typed
/// input.
pub fn evaluate_typed(raw: &str, mode: Mode, expected: Symbol) -> TypedVerdict {
    if mode.is_choice() {
        return TypedVerdict::PENDING;
    }
    let typed = if mode.asks_for_position() {
        parse_position(raw).map(Symbol::from)
    } else {
        parse_letter(raw).map(Symbol::from)
    };
    match typed {
        Some(answer) => TypedVerdict::judged(answer == expected),
        None         => TypedVerdict::PENDING,
    }
}
