use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::BlackjackError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Point value before any Ace demotion.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl FromStr for Rank {
    type Err = BlackjackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .iter()
            .copied()
            .find(|rank| rank.label() == s)
            .ok_or_else(|| BlackjackError::InvalidRank(s.to_string()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
        }
    }
}

impl FromStr for Suit {
    type Err = BlackjackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .iter()
            .copied()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BlackjackError::InvalidSuit(s.to_string()))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from its textual rank label ("A", "2".."10", "J", "Q", "K").
    pub fn from_label(rank: &str, suit: Suit) -> Result<Self, BlackjackError> {
        Ok(Self::new(rank.parse()?, suit))
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// Suit-major index in generation order: Spades A..K, then Hearts, Clubs, Diamonds.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= 52 {
            return None;
        }
        Some(Self::new(Rank::ALL[index % 13], Suit::ALL[index / 13]))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ranks_use_face_value() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Seven.value(), 7);
        assert_eq!(Rank::Ten.value(), 10);
    }

    #[test]
    fn test_face_cards_are_ten() {
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
    }

    #[test]
    fn test_ace_starts_high() {
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).value(), 11);
    }

    #[test]
    fn test_from_label() {
        let card = Card::from_label("10", Suit::Hearts).unwrap();
        assert_eq!(card.rank, Rank::Ten);
        assert_eq!(card.value(), 10);
    }

    #[test]
    fn test_from_label_rejects_unknown_rank() {
        for bad in ["1", "11", "Z", "", "a", "ten"] {
            match Card::from_label(bad, Suit::Spades) {
                Err(BlackjackError::InvalidRank(label)) => assert_eq!(label, bad),
                other => panic!("expected InvalidRank for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_suit_parse() {
        assert_eq!("hearts".parse::<Suit>().unwrap(), Suit::Hearts);
        assert!(matches!(
            "Stars".parse::<Suit>(),
            Err(BlackjackError::InvalidSuit(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A of Spades");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10 of Diamonds");
        assert_eq!(Card::new(Rank::Queen, Suit::Hearts).to_string(), "Q of Hearts");
    }

    #[test]
    fn test_from_index_covers_deck() {
        assert_eq!(Card::from_index(0), Some(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(Card::from_index(13), Some(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!(Card::from_index(51), Some(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!(Card::from_index(52), None);
    }
}
