//! What the engine says to the table and what it asks of the player.
//!
//! The engine never touches a terminal. It reads raw player lines through
//! [`PlayerInput`] and narrates through [`TableDisplay`], so a console, a
//! scripted test or a recorder can sit on either side.

use serde::{Deserialize, Serialize};
use std::io;
use std::str::FromStr;

use crate::{BlackjackError, Card};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Participant {
    Dealer,
    Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Hit,
    Stand,
}

impl FromStr for Action {
    type Err = BlackjackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("hit") {
            Ok(Action::Hit)
        } else if s.eq_ignore_ascii_case("stand") {
            Ok(Action::Stand)
        } else {
            Err(BlackjackError::InvalidAction(s.to_string()))
        }
    }
}

/// Terminal result of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerNatural,
    DealerNatural,
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Push,
}

impl Outcome {
    /// `None` on a push.
    pub fn winner(&self) -> Option<Participant> {
        match self {
            Outcome::PlayerNatural | Outcome::DealerBust | Outcome::PlayerWins => {
                Some(Participant::Player)
            }
            Outcome::DealerNatural | Outcome::PlayerBust | Outcome::DealerWins => {
                Some(Participant::Dealer)
            }
            Outcome::Push => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Banner {
    DealerHand,
    PlayerHand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableEvent {
    Banner(Banner),
    /// Opening view of the dealer: first card only, second stays hidden.
    DealerShows { up_card: Card, visible_score: u8 },
    PlayerHand { cards: Vec<Card>, score: u8 },
    InvalidAction { input: String },
    PlayerDraws { card: Card, score: u8 },
    DealerDraws { card: Card, score: u8 },
    Settled { outcome: Outcome },
    Reveal {
        dealer: Vec<Card>,
        dealer_score: u8,
        player: Vec<Card>,
        player_score: u8,
    },
}

/// Source of raw player decisions. `Ok(None)` means the input is gone.
pub trait PlayerInput {
    fn read_action(&mut self) -> io::Result<Option<String>>;
}

pub trait TableDisplay {
    fn announce(&mut self, event: &TableEvent) -> io::Result<()>;
}

/// Feeds a fixed list of lines, then reports closed input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl PlayerInput for ScriptedInput {
    fn read_action(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Keeps every announced event in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<TableEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableDisplay for EventLog {
    fn announce(&mut self, event: &TableEvent) -> io::Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
