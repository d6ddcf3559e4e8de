// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tridraw cards types.
//!
//! This crate define types to create cards, aces are low and rank from 1 to 13:
//!
//! ```
//! # use tridraw_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let qs = Card::try_new(12, Suit::Spades).unwrap();
//! assert_eq!(ah.value(), 1);
//! assert_eq!("QS".parse::<Card>(), Ok(qs));
//! ```
//!
//! a three cards [Hand] type, and a [Deck] type for shuffling, dealing, and
//! iterating cards combinations in the deck.
//!
//! For example to iterate through all 3 cards hands:
//!
//! ```
//! # use tridraw_cards::Deck;
//! // Iterate through all 3 cards hands (22100 hands).
//! let mut counter = 0;
//! Deck::default().for_each(3, |hand| {
//!     assert_eq!(hand.len(), 3);
//!     counter += 1;
//! });
//! assert_eq!(counter, 22_100);
//! ```
//!
//! or the same hands as arrays using a lazy iterator:
//!
//! ```
//! # use tridraw_cards::Deck;
//! let deck = Deck::default();
//! let hands = deck.combinations::<3>();
//! assert_eq!(hands.len(), 22_100);
//! ```
//!
//! The index iterator behind it is exported as [Combinations].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod combinations;
pub use combinations::{Combinations, nck};

mod deck;
pub use deck::{Card, CardError, Deck, Hand, Rank, Suit};
