use serde::{Deserialize, Serialize};
use std::fmt;

use crate::deck::write_joined;
use crate::Card;

pub const BLACKJACK: u8 = 21;

/// Cards held by one participant, with an incrementally maintained score.
///
/// Aces enter at 11. When an add pushes the score over 21, the first Ace
/// still counted high is demoted to 1. That check runs once per add and is
/// never re-applied to earlier Aces, so a hand holding two high Aces can bust
/// where a full reduction would not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    /// Parallel to `cards`: true once that Ace counts as 1.
    demoted: Vec<bool>,
    score: u8,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.demoted.push(false);
        self.score += card.value();

        if self.score > BLACKJACK {
            if let Some(index) = self.first_high_ace() {
                self.demoted[index] = true;
                self.score -= 10;
                log::debug!("Ace at position {index} now counts as 1, score {}", self.score);
            }
        }
    }

    fn first_high_ace(&self) -> Option<usize> {
        self.cards
            .iter()
            .zip(&self.demoted)
            .position(|(card, demoted)| card.is_ace() && !demoted)
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn last_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Current point value of the card at `index`.
    pub fn value_at(&self, index: usize) -> Option<u8> {
        let card = self.cards.get(index)?;
        Some(if self.demoted[index] { 1 } else { card.value() })
    }

    pub fn is_bust(&self) -> bool {
        self.score > BLACKJACK
    }

    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.score == BLACKJACK
    }

    /// Holds an Ace still counted as 11.
    pub fn is_soft(&self) -> bool {
        self.first_high_ace().is_some()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.cards.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Hearts)
    }

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add_card(card(rank));
        }
        hand
    }

    fn values_sum(hand: &Hand) -> u8 {
        (0..hand.len()).map(|i| hand.value_at(i).unwrap()).sum()
    }

    #[test]
    fn test_score_simple() {
        let hand = hand_of(&[Rank::Two, Rank::Three]);
        assert_eq!(hand.score(), 5);
    }

    #[test]
    fn test_score_face_cards() {
        let hand = hand_of(&[Rank::King, Rank::Queen]);
        assert_eq!(hand.score(), 20);
        assert!(!hand.is_natural());
    }

    #[test]
    fn test_natural() {
        let hand = hand_of(&[Rank::Ace, Rank::King]);
        assert_eq!(hand.score(), 21);
        assert!(hand.is_natural());
        assert!(hand.is_soft());
    }

    #[test]
    fn test_three_card_twenty_one_is_not_natural() {
        let hand = hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        assert_eq!(hand.score(), 21);
        assert!(!hand.is_natural());
    }

    #[test]
    fn test_ace_demoted_when_over_21() {
        let hand = hand_of(&[Rank::Ace, Rank::Nine, Rank::Five]);
        assert_eq!(hand.score(), 15);
        assert_eq!(hand.value_at(0), Some(1));
        assert!(!hand.is_soft());
    }

    #[test]
    fn test_pair_of_aces_demotes_first() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace]);
        assert_eq!(hand.score(), 12);
        assert_eq!(hand.value_at(0), Some(1));
        assert_eq!(hand.value_at(1), Some(11));
    }

    #[test]
    fn test_second_ace_demoted_on_later_add() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine, Rank::Five]);
        // A A -> 12, +9 -> 21, +5 -> 26 -> second Ace demoted -> 16
        assert_eq!(hand.score(), 16);
        assert_eq!(hand.value_at(0), Some(1));
        assert_eq!(hand.value_at(1), Some(1));
    }

    #[test]
    fn test_soft_21_plus_ace_busts_with_high_ace_left() {
        // A 5 5 -> soft 21; the next Ace takes it to 32 and only one demotion
        // runs for that add, leaving 22 with the second Ace still at 11.
        let hand = hand_of(&[Rank::Ace, Rank::Five, Rank::Five, Rank::Ace]);
        assert_eq!(hand.score(), 22);
        assert!(hand.is_bust());
        assert_eq!(hand.value_at(0), Some(1));
        assert_eq!(hand.value_at(3), Some(11));
        assert!(hand.is_soft());
    }

    #[test]
    fn test_bust_without_ace() {
        let hand = hand_of(&[Rank::King, Rank::Queen, Rank::Five]);
        assert_eq!(hand.score(), 25);
        assert!(hand.is_bust());
    }

    #[test]
    fn test_score_matches_card_values_after_every_add() {
        let ranks = [
            Rank::Ace,
            Rank::Three,
            Rank::Ace,
            Rank::Eight,
            Rank::Ace,
            Rank::Two,
            Rank::King,
        ];
        let mut hand = Hand::new();
        for rank in ranks {
            hand.add_card(card(rank));
            assert_eq!(hand.score(), values_sum(&hand));
        }
    }

    #[test]
    fn test_display_in_deal_order() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(Rank::Nine, Suit::Clubs));
        hand.add_card(Card::new(Rank::Jack, Suit::Spades));
        assert_eq!(hand.to_string(), "9 of Clubs, J of Spades");
        assert_eq!(hand.last_card(), Some(&Card::new(Rank::Jack, Suit::Spades)));
    }

    #[test]
    fn test_empty_hand() {
        let hand = Hand::new();
        assert!(hand.is_empty());
        assert_eq!(hand.score(), 0);
        assert_eq!(hand.to_string(), "");
        assert_eq!(hand.value_at(0), None);
    }
}
