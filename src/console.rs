//! Text console front end.
//!
//! [`ConsoleIo`] reads decisions line by line and prints the table the way a
//! dealer would call it out. Invalid input is answered with a hint and asked
//! again; only a closed input stream is reported back to the round.

use core::fmt;
use core::time::Duration;
use std::io::{BufRead, Write};

use tracing::warn;

use crate::card::Card;
use crate::error::{BetError, InputError, RoundError};
use crate::game::{Action, BetLimits, RoundEvent, TableIo, TableView};
use crate::player::{Player, SeatStatus};

const SEPARATOR: &str = "____________";

/// Parses a bet typed by the operator.
///
/// # Errors
///
/// Returns [`InputError::InvalidInput`] for anything that is not a positive
/// whole number, and [`InputError::Bet`] when the number is outside `limits`.
pub fn parse_bet(input: &str, limits: BetLimits) -> Result<usize, InputError> {
    let amount: usize = input
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidInput)?;
    if amount == 0 {
        return Err(InputError::InvalidInput);
    }
    Ok(limits.check(amount)?)
}

/// A [`TableIo`] over a line-oriented reader and a writer.
pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
    /// Delay after each card the dealer draws.
    pace: Duration,
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    /// Creates a console with no dealer pacing.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pace: Duration::ZERO,
        }
    }

    /// Sets the pause after each card the dealer draws.
    #[must_use]
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// Returns the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl fmt::Display) {
        if let Err(err) = writeln!(self.output, "{line}") {
            warn!(error = %err, "console write failed");
        }
    }

    /// Prints `prompt` and reads one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String, RoundError> {
        if let Err(err) = write!(self.output, "{prompt}").and_then(|()| self.output.flush()) {
            warn!(error = %err, "console write failed");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(RoundError::InputClosed),
            Ok(_) => Ok(line.trim().to_owned()),
            Err(err) => {
                warn!(error = %err, "console read failed");
                Err(RoundError::InputClosed)
            }
        }
    }

    /// Asks a yes/no question; only "y" counts as yes.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InputClosed`] if input has ended.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, RoundError> {
        Ok(self.ask(prompt)?.eq_ignore_ascii_case("y"))
    }

    /// Offers to top up a player's balance.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InputClosed`] if input has ended.
    pub fn offer_chips(&mut self, player: &Player) -> Result<bool, RoundError> {
        self.confirm(&format!(
            "{}, your balance is {}, want to buy chips? y/n ",
            player.name(),
            player.balance()
        ))
    }

    /// Asks whether to play another round; anything but "n" continues.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InputClosed`] if input has ended.
    pub fn play_again(&mut self) -> Result<bool, RoundError> {
        Ok(!self.ask("Play again? y/n ")?.eq_ignore_ascii_case("n"))
    }

    /// Announces a player joining the table.
    pub fn announce_join(&mut self, player: &Player) {
        self.say(format_args!("{} has entered the room", player.name()));
    }

    /// Prints a player's balance.
    pub fn announce_balance(&mut self, player: &Player) {
        self.say(format_args!(
            "{} current balance is ${}.",
            player.name(),
            player.balance()
        ));
    }

    fn show_cards<'c>(&mut self, cards: impl IntoIterator<Item = &'c Card>) {
        for card in cards {
            self.say(card);
        }
    }

    fn show_hand(&mut self, player: &Player) {
        self.say(format_args!("{} hand:", player.name()));
        self.show_cards(player.hand.cards());
        self.say(format_args!("Sum is {}", player.hand.value()));
    }

    fn show_table(&mut self, table: &TableView<'_>) {
        for player in &table.players {
            if player.status == SeatStatus::Paid {
                continue;
            }
            self.show_hand(player);
            if player.hand.is_bust() {
                self.say(format_args!("{} losses", player.name()));
            }
            self.say(SEPARATOR);
        }

        self.say("Dealer hand:");
        if !table.dealer_revealed() && !table.dealer.hand.is_empty() {
            self.say("Covered Card");
        }
        self.show_cards(table.dealer_cards());
        if let Some(value) = table.dealer_value() {
            self.say(format_args!("Sum is {value}"));
        }
    }

    fn explain_rejected_bet(&mut self, input: &str, err: InputError, limits: BetLimits) {
        match err {
            InputError::Bet(BetError::InsufficientBalance) => self.say(format_args!(
                "You don't have enough money. Current Balance: {}. Try again",
                limits.balance
            )),
            InputError::Bet(BetError::BelowTableMinimum) => self.say(format_args!(
                "Your bet is lower than the table's minimum bet. Min bet: {}. Try again",
                limits.minimum
            )),
            InputError::InvalidInput | InputError::Bet(BetError::ZeroBet) => self.say(
                format_args!("Your input \"{input}\" is invalid, try again"),
            ),
        }
    }
}

impl<R: BufRead, W: Write> TableIo for ConsoleIo<R, W> {
    fn bet(&mut self, player: &Player, limits: BetLimits) -> Result<usize, RoundError> {
        let prompt = format!("{}, what is your bet? ", player.name());
        loop {
            let input = self.ask(&prompt)?;
            match parse_bet(&input, limits) {
                Ok(amount) => return Ok(amount),
                Err(err) => self.explain_rejected_bet(&input, err, limits),
            }
        }
    }

    fn action(&mut self, player: &Player, _table: &TableView<'_>) -> Result<Action, RoundError> {
        let prompt = format!("\n{}, hit or stop? type: 'h' or 's' ", player.name());
        loop {
            match self.ask(&prompt)?.parse::<Action>() {
                Ok(action) => return Ok(action),
                Err(InputError::InvalidInput | InputError::Bet(_)) => {
                    self.say("Invalid input, try again");
                }
            }
        }
    }

    fn render(&mut self, event: &RoundEvent<'_>) {
        match event {
            RoundEvent::SatOut(player) => self.say(format_args!(
                "{} does not have enough funds to play, buy more",
                player.name()
            )),
            RoundEvent::Started(table) => {
                for player in &table.players {
                    self.announce_balance(player);
                }
                self.say(format_args!("Game ID: {}", table.round_id));
                self.say(format_args!("Players: {}", table.players.len()));
            }
            RoundEvent::Table(table) => {
                self.say("");
                self.show_table(table);
            }
            RoundEvent::Blackjack(player) => {
                self.say(format_args!("Blackjack for {}!", player.name()));
                self.show_hand(player);
            }
            RoundEvent::DealerDraw(card) => {
                self.say(format_args!("Dealer draws {card}"));
                if !self.pace.is_zero() {
                    std::thread::sleep(self.pace);
                }
            }
            RoundEvent::Settled(result) => self.say(result),
            RoundEvent::Finished(_) => self.say("Game over"),
        }
    }
}
