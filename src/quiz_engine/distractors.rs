use rand::Rng;

use crate::quiz_engine::{
    alphabet::{AlphabetSymbol, ALPHABET_LEN},
    config::ChoiceSettings,
    models::Position,
};

/// Build a shuffled option set of `settings.count` unique values that
/// includes `correct`.
///
/// Distractors are first drawn from the ±`radius` neighbourhood of the correct
/// position so wrong options look plausible (adjacent letters or numbers).
/// Near the ends of the alphabet that neighbourhood is too small, so after
/// `neighbour_attempts` draws the remaining slots are filled uniformly from
/// the whole alphabet. The count is clamped to 1..=26, which keeps the fill
/// loop finite, and the radius to 0..=25.
pub fn generate_choices<S, R>(rng: &mut R, correct: S, settings: &ChoiceSettings) -> Vec<S>
where
    S: AlphabetSymbol,
    R: Rng,
{
    let total = settings.count.clamp(1, ALPHABET_LEN as usize);
    let radius = settings.radius.min(ALPHABET_LEN - 1) as i8;
    let anchor = correct.to_position();

    // Insertion-ordered so a seeded rng reproduces the same output.
    let mut options: Vec<S> = Vec::with_capacity(total);
    options.push(correct);

    let mut attempts = 0;
    while options.len() < total && attempts < settings.neighbour_attempts {
        let offset = rng.gen_range(-radius..=radius);
        if let Some(candidate) = anchor.offset(offset) {
            insert_unique(&mut options, S::from_position(candidate));
        }
        attempts += 1;
    }

    while options.len() < total {
        insert_unique(&mut options, S::from_position(random_position(rng)));
    }

    shuffle(rng, &mut options);
    options
}

fn insert_unique<S: PartialEq>(options: &mut Vec<S>, value: S) {
    if !options.contains(&value) {
        options.push(value);
    }
}

/// Uniform draw from 1..=26.
pub fn random_position<R: Rng>(rng: &mut R) -> Position {
    let n = rng.gen_range(1..=ALPHABET_LEN);
    Position::new(n).unwrap_or(Position::FIRST)
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
