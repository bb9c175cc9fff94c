mod card;
mod deck;
mod engine;
mod error;
mod hand;
mod table;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use engine::{GameEngine, GamePhase, DEALER_STANDS_ON};
pub use error::BlackjackError;
pub use hand::{Hand, BLACKJACK};
pub use table::{
    Action, Banner, EventLog, Outcome, Participant, PlayerInput, ScriptedInput, TableDisplay,
    TableEvent,
};
