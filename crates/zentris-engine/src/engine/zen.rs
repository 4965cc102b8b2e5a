//! Calming messages shown after each lock and on track change. Cosmetic
//! only; no gameplay effect.

use rand::{Rng, seq::IndexedRandom as _};

/// The fixed rotation of zen phrases.
pub const ZEN_MESSAGES: [&str; 8] = [
    "Find peace in every block",
    "Let go of perfection",
    "Each piece has its place",
    "Breathe with the rhythm",
    "There's no rush in zen",
    "Every moment is perfect",
    "Flow like water",
    "Balance comes naturally",
];

/// Picks one phrase uniformly at random.
pub(crate) fn pick_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ZEN_MESSAGES
        .choose(rng)
        .copied()
        .expect("message list is never empty")
}
