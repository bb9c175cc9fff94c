use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlackjackError {
    #[error("Invalid rank: {0:?}")]
    InvalidRank(String),
    #[error("Invalid suit: {0:?}")]
    InvalidSuit(String),
    #[error("No more cards in deck")]
    EmptyDeck,
    /// Recoverable: the engine re-prompts instead of propagating this one.
    #[error("Invalid action: {0:?}, expected 'hit' or 'stand'")]
    InvalidAction(String),
    #[error("Game is in phase {actual}, expected {expected}")]
    WrongPhase { expected: String, actual: String },
    #[error("Player input closed before the game finished")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BlackjackError {
    /// Only malformed player input can be recovered from mid-game.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BlackjackError::InvalidAction(_))
    }
}
