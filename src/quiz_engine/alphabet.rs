use crate::quiz_engine::models::{Letter, Position, Symbol};

/// Number of letters (and positions) in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Map a letter to its 1-based position (A → 1).
pub fn letter_to_position(letter: Letter) -> Position {
    let index = letter.as_char() as u8 - b'A';
    Position::new(index + 1).unwrap_or(Position::FIRST)
}

/// Map a position to its letter (1 → A). Exact inverse of [`letter_to_position`].
pub fn position_to_letter(position: Position) -> Letter {
    Letter::from_index(position.get() - 1)
}

/// All letters in alphabet order.
pub fn all_letters() -> impl Iterator<Item = Letter> {
    (0..ALPHABET_LEN).map(Letter::from_index)
}

/// All positions in ascending order.
pub fn all_positions() -> impl Iterator<Item = Position> {
    all_letters().map(letter_to_position)
}

/// A value that lives on one side of the letter/position bijection.
///
/// The distractor generator works in position space for both kinds of value;
/// this trait moves a value there and back.
pub trait AlphabetSymbol: Copy + Eq {
    fn to_position(self) -> Position;
    fn from_position(position: Position) -> Self;
}

impl AlphabetSymbol for Position {
    fn to_position(self) -> Position {
        self
    }

    fn from_position(position: Position) -> Self {
        position
    }
}

impl AlphabetSymbol for Letter {
    fn to_position(self) -> Position {
        letter_to_position(self)
    }

    fn from_position(position: Position) -> Self {
        position_to_letter(position)
    }
}

/// The counterpart of `symbol` on the other side of the mapping.
pub fn counterpart(symbol: Symbol) -> Symbol {
    match symbol {
        Symbol::Letter(l)   => Symbol::Position(letter_to_position(l)),
        Symbol::Position(p) => Symbol::Letter(position_to_letter(p)),
    }
}
