//! Card values.
//!
//! A card is either a number from 0 to 9 or one of the three power cards.
//! Cards are plain `Copy` values; identity does not matter, only value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::GameError;

/// Highest numeric card value.
pub const MAX_VALUE: u8 = 9;

/// Non-numeric cards with an exchange effect of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PowerCard {
    /// Look at one of your own cards.
    Peek,
    /// Trade one of your cards with one of an opponent's.
    Swap,
    /// Draw two cards and exchange one of them.
    Draw2,
}

impl PowerCard {
    pub const ALL: [PowerCard; 3] = [PowerCard::Peek, PowerCard::Swap, PowerCard::Draw2];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PowerCard::Peek => "PEEK",
            PowerCard::Swap => "SWAP",
            PowerCard::Draw2 => "DRAW2",
        }
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    Number(u8),
    Power(PowerCard),
}

impl Card {
    pub const PEEK: Card = Card::Power(PowerCard::Peek);
    pub const SWAP: Card = Card::Power(PowerCard::Swap);
    pub const DRAW2: Card = Card::Power(PowerCard::Draw2);

    /// Numeric card. Panics above 9.
    #[must_use]
    pub const fn number(value: u8) -> Self {
        assert!(value <= MAX_VALUE, "Card values run from 0 to 9");
        Card::Number(value)
    }

    /// Point value, `None` for power cards.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Card::Number(v) => Some(v),
            Card::Power(_) => None,
        }
    }

    #[must_use]
    pub const fn power(self) -> Option<PowerCard> {
        match self {
            Card::Number(_) => None,
            Card::Power(p) => Some(p),
        }
    }

    #[must_use]
    pub const fn is_power(self) -> bool {
        matches!(self, Card::Power(_))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number(v) => write!(f, "{v}"),
            Card::Power(p) => f.write_str(p.label()),
        }
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_uppercase().as_str() {
            "PEEK" => return Ok(Card::PEEK),
            "SWAP" => return Ok(Card::SWAP),
            "DRAW2" => return Ok(Card::DRAW2),
            _ => {}
        }
        match token.parse::<u8>() {
            Ok(v) if v <= MAX_VALUE => Ok(Card::Number(v)),
            _ => Err(GameError::invalid_input(format!("not a card: {token:?}"))),
        }
    }
}
