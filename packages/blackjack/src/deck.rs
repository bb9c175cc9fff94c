use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::fmt;

use crate::{BlackjackError, Card, Rank, Suit};

/// A single 52-card deck, dealt from the front and never reshuffled.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Shuffled with a ChaCha8 stream seeded from OS entropy.
    pub fn new() -> Self {
        let mut rng = ChaCha8Rng::from_entropy();
        Self::shuffled(&mut rng)
    }

    /// Reproducible shuffle for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::ordered_cards();
        cards.shuffle(rng);
        log::debug!("Shuffled fresh deck of {} cards", cards.len());
        Self {
            cards: cards.into(),
        }
    }

    /// Deck that deals exactly `cards`, front first.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    fn ordered_cards() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect()
    }

    pub fn deal_card(&mut self) -> Result<Card, BlackjackError> {
        self.cards.pop_front().ok_or(BlackjackError::EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.cards.iter())
    }
}

pub(crate) fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    cards: impl Iterator<Item = &'a Card>,
) -> fmt::Result {
    for (i, card) in cards.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}
