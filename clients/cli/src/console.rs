//! Terminal side of the table: prompts on one writer, narrates on another.

use blackjack::{Banner, Card, Outcome, PlayerInput, TableDisplay, TableEvent};
use std::io::{self, BufRead, Write};

const DASHES: &str = "-------------------------";
const PROMPT: &str = "Do you want to hit or stand? ";

fn banner(title: &str) -> String {
    format!("{DASHES}{title}{DASHES}")
}

fn joined(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lines printed for one event.
pub fn render(event: &TableEvent) -> Vec<String> {
    match event {
        TableEvent::Banner(Banner::DealerHand) => vec![banner("Dealers Hand")],
        TableEvent::Banner(Banner::PlayerHand) => vec![banner("Players Hand")],
        TableEvent::DealerShows {
            up_card,
            visible_score,
        } => vec![
            format!("Dealer's hand: {up_card}, HIDDEN"),
            format!("Dealer's current score: {visible_score}"),
        ],
        TableEvent::PlayerHand { cards, score } => vec![
            format!("Your hand: {}", joined(cards)),
            format!("Your current score: {score}"),
        ],
        TableEvent::InvalidAction { .. } => {
            vec!["Invalid input. Please enter 'hit' or 'stand'.".to_string()]
        }
        TableEvent::PlayerDraws { card, score } => {
            vec![format!("You draw: {card}"), format!("Your total: {score}")]
        }
        TableEvent::DealerDraws { card, score } => {
            vec![format!("Dealer draws: {card}"), format!("Dealer total: {score}")]
        }
        TableEvent::Settled { outcome } => vec![match outcome {
            Outcome::PlayerNatural => "Player blackjack! You win!".to_string(),
            Outcome::DealerNatural => "Dealer blackjack! You lose!".to_string(),
            Outcome::PlayerBust => banner("You bust, dealer wins!"),
            Outcome::DealerBust => banner("Dealer busts, you win!"),
            Outcome::PlayerWins => banner("You win!"),
            Outcome::Push => banner("Push! It's a tie."),
            Outcome::DealerWins => banner("Dealer wins!"),
        }],
        TableEvent::Reveal {
            dealer,
            dealer_score,
            player,
            player_score,
        } => vec![
            banner("Dealer's Hand"),
            format!("Dealer's hand: {}", joined(dealer)),
            format!("Dealer's total: {dealer_score}"),
            banner("Your Hand"),
            format!("Your hand: {}", joined(player)),
            format!("Your total: {player_score}"),
        ],
    }
}

/// Asks the player for an action, one line per decision.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> PlayerInput for Prompt<R, W> {
    fn read_action(&mut self) -> io::Result<Option<String>> {
        self.writer.write_all(PROMPT.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

pub struct Narrator<W> {
    writer: W,
}

impl<W: Write> Narrator<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }
}

impl<W: Write> TableDisplay for Narrator<W> {
    fn announce(&mut self, event: &TableEvent) -> io::Result<()> {
        for line in render(event) {
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()
    }
}
