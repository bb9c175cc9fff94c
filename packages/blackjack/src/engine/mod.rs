use serde::{Deserialize, Serialize};

use crate::{
    Action, Banner, BlackjackError, Card, Deck, Hand, Outcome, Participant, PlayerInput,
    TableDisplay, TableEvent, BLACKJACK,
};

/// Dealer draws below this and stands on it, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    DealingInitial,
    CheckNatural,
    PlayerTurn,
    DealerTurn,
    Resolve,
    GameOver(Outcome),
}

/// One game of single-deck Blackjack between the player and the dealer.
///
/// The engine owns its deck and both hands for the whole game; a new game
/// needs a new engine. Each phase can be driven on its own, or [`play`]
/// runs the machine from the current phase to the end.
///
/// [`play`]: GameEngine::play
#[derive(Debug, Clone)]
pub struct GameEngine {
    deck: Deck,
    dealer_hand: Hand,
    player_hand: Hand,
    phase: GamePhase,
}

impl GameEngine {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            dealer_hand: Hand::new(),
            player_hand: Hand::new(),
            phase: GamePhase::DealingInitial,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Drive the game from its current phase to a terminal outcome.
    pub fn play<I, D>(&mut self, input: &mut I, display: &mut D) -> Result<Outcome, BlackjackError>
    where
        I: PlayerInput + ?Sized,
        D: TableDisplay + ?Sized,
    {
        loop {
            match self.phase {
                GamePhase::DealingInitial => self.deal_initial(display)?,
                GamePhase::CheckNatural => {
                    self.check_natural(display)?;
                }
                GamePhase::PlayerTurn => {
                    self.player_turn(input, display)?;
                }
                GamePhase::DealerTurn => {
                    self.dealer_turn(display)?;
                }
                GamePhase::Resolve => {
                    self.resolve(display)?;
                }
                GamePhase::GameOver(outcome) => return Ok(outcome),
            }
        }
    }

    /// Two cards to the dealer, then two to the player. Only the dealer's
    /// first card is shown.
    pub fn deal_initial<D>(&mut self, display: &mut D) -> Result<(), BlackjackError>
    where
        D: TableDisplay + ?Sized,
    {
        if self.enter(GamePhase::DealingInitial)?.is_some() {
            return Ok(());
        }

        display.announce(&TableEvent::Banner(Banner::DealerHand))?;
        let up_card = self.deal_to(Participant::Dealer)?;
        self.deal_to(Participant::Dealer)?;
        display.announce(&TableEvent::DealerShows {
            up_card,
            visible_score: up_card.value(),
        })?;

        display.announce(&TableEvent::Banner(Banner::PlayerHand))?;
        self.deal_to(Participant::Player)?;
        self.deal_to(Participant::Player)?;
        display.announce(&TableEvent::PlayerHand {
            cards: self.player_hand.cards().to_vec(),
            score: self.player_hand.score(),
        })?;

        self.phase = GamePhase::CheckNatural;
        Ok(())
    }

    /// A player natural is checked first and wins even against a dealer natural.
    pub fn check_natural<D>(&mut self, display: &mut D) -> Result<Option<Outcome>, BlackjackError>
    where
        D: TableDisplay + ?Sized,
    {
        if let Some(outcome) = self.enter(GamePhase::CheckNatural)? {
            return Ok(Some(outcome));
        }

        if self.player_hand.score() == BLACKJACK {
            return self.finish(Outcome::PlayerNatural, display).map(Some);
        }
        if self.dealer_hand.score() == BLACKJACK {
            return self.finish(Outcome::DealerNatural, display).map(Some);
        }

        self.phase = GamePhase::PlayerTurn;
        Ok(None)
    }

    /// Prompt until the player stands or busts. Unrecognised input is
    /// reported and asked again without touching the game.
    pub fn player_turn<I, D>(
        &mut self,
        input: &mut I,
        display: &mut D,
    ) -> Result<Option<Outcome>, BlackjackError>
    where
        I: PlayerInput + ?Sized,
        D: TableDisplay + ?Sized,
    {
        if let Some(outcome) = self.enter(GamePhase::PlayerTurn)? {
            return Ok(Some(outcome));
        }

        loop {
            let line = input.read_action()?.ok_or(BlackjackError::InputClosed)?;
            let action = match line.parse::<Action>() {
                Ok(action) => action,
                Err(err) if err.is_recoverable() => {
                    log::warn!("Rejected player input {line:?}");
                    display.announce(&TableEvent::InvalidAction { input: line })?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            match action {
                Action::Hit => {
                    let card = self.deal_to(Participant::Player)?;
                    let score = self.player_hand.score();
                    display.announce(&TableEvent::PlayerDraws { card, score })?;
                    if self.player_hand.is_bust() {
                        return self.finish(Outcome::PlayerBust, display).map(Some);
                    }
                }
                Action::Stand => {
                    log::debug!("Player stands on {}", self.player_hand.score());
                    self.phase = GamePhase::DealerTurn;
                    return Ok(None);
                }
            }
        }
    }

    /// Dealer draws while under 17 and stops the moment it busts.
    pub fn dealer_turn<D>(&mut self, display: &mut D) -> Result<Option<Outcome>, BlackjackError>
    where
        D: TableDisplay + ?Sized,
    {
        if let Some(outcome) = self.enter(GamePhase::DealerTurn)? {
            return Ok(Some(outcome));
        }

        while self.dealer_hand.score() < DEALER_STANDS_ON {
            let card = self.deal_to(Participant::Dealer)?;
            let score = self.dealer_hand.score();
            display.announce(&TableEvent::DealerDraws { card, score })?;
            if self.dealer_hand.is_bust() {
                return self.finish(Outcome::DealerBust, display).map(Some);
            }
        }

        self.phase = GamePhase::Resolve;
        Ok(None)
    }

    pub fn resolve<D>(&mut self, display: &mut D) -> Result<Outcome, BlackjackError>
    where
        D: TableDisplay + ?Sized,
    {
        if let Some(outcome) = self.enter(GamePhase::Resolve)? {
            return Ok(outcome);
        }

        let player = self.player_hand.score();
        let dealer = self.dealer_hand.score();
        let outcome = if player > dealer {
            Outcome::PlayerWins
        } else if player == dealer {
            Outcome::Push
        } else {
            Outcome::DealerWins
        };
        self.finish(outcome, display)
    }

    /// `Some(outcome)` if the game already ended, error if the game sits in
    /// a phase other than `expected`.
    fn enter(&self, expected: GamePhase) -> Result<Option<Outcome>, BlackjackError> {
        match self.phase {
            GamePhase::GameOver(outcome) => Ok(Some(outcome)),
            phase if phase == expected => Ok(None),
            phase => Err(BlackjackError::WrongPhase {
                expected: format!("{expected:?}"),
                actual: format!("{phase:?}"),
            }),
        }
    }

    fn deal_to(&mut self, participant: Participant) -> Result<Card, BlackjackError> {
        let card = self.deck.deal_card()?;
        let hand = match participant {
            Participant::Dealer => &mut self.dealer_hand,
            Participant::Player => &mut self.player_hand,
        };
        hand.add_card(card);
        log::debug!(
            "{participant:?} dealt {card}, score {}, {} cards left",
            hand.score(),
            self.deck.len()
        );
        Ok(card)
    }

    /// Record the outcome, then reveal both hands in full.
    fn finish<D>(&mut self, outcome: Outcome, display: &mut D) -> Result<Outcome, BlackjackError>
    where
        D: TableDisplay + ?Sized,
    {
        self.phase = GamePhase::GameOver(outcome);
        log::info!(
            "Game over: {outcome:?} (player {}, dealer {})",
            self.player_hand.score(),
            self.dealer_hand.score()
        );

        display.announce(&TableEvent::Settled { outcome })?;
        display.announce(&TableEvent::Reveal {
            dealer: self.dealer_hand.cards().to_vec(),
            dealer_score: self.dealer_hand.score(),
            player: self.player_hand.cards().to_vec(),
            player_score: self.player_hand.score(),
        })?;
        Ok(outcome)
    }
}
