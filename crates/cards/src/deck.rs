// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards, deck and three-card hand definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};
use thiserror::Error;

use crate::combinations::{self, Combinations};

/// Errors returned when creating or parsing cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside of 1..=13.
    #[error("invalid rank {0}, expected a value in 1..=13")]
    InvalidRank(u8),
    /// Unrecognized suit symbol.
    #[error("invalid suit '{0}'")]
    InvalidSuit(char),
    /// A card string that cannot be parsed.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
    /// A hand with the wrong number of cards.
    #[error("a hand has 3 cards, got {0}")]
    HandSize(usize),
    /// A hand that contains the same card twice.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// A playing card.
///
/// A card packs its rank (1 to 13, ace low) in the low nibble and its suit
/// in the high nibble:
///
/// ```text
///   +--------+
///   |xxssrrrr|
///   +--------+
///   r = rank of card (ace=1,deuce=2,...,queen=12,king=13)
///   s = suit of card (hearts=0,spades=1,diamonds=2,clubs=3)
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(rank as u8 | ((suit as u8) << 4))
    }

    /// Create a card from a numeric rank, fails if rank is not 1 <= rank <= 13.
    pub fn try_new(rank: u8, suit: Suit) -> Result<Card, CardError> {
        Ok(Card::new(Rank::try_from(rank)?, suit))
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::RANKS[(self.value() - 1) as usize]
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::SUITS[(self.0 >> 4) as usize]
    }

    /// Returns the numeric rank, ace is 1 and king is 13.
    #[inline]
    pub fn value(&self) -> u8 {
        self.0 & 0xf
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card like `QH`, `ts`, `10D` or `A♠`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit = s
            .chars()
            .last()
            .ok_or_else(|| CardError::InvalidCard(s.to_string()))?;

        let rank = match s[..s.len() - suit.len_utf8()].to_ascii_uppercase().as_str() {
            "A" | "1" => Rank::Ace,
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(CardError::InvalidCard(s.to_string())),
        };

        Ok(Card::new(rank, Suit::try_from(suit)?))
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Card rank, aces are low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace
    Ace = 1,
    /// Deuce
    Deuce,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Rank {
    const RANKS: [Rank; 13] = {
        use Rank::*;
        [
            Ace, Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
    };

    /// Returns all ranks from ace to king.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::RANKS.into_iter()
    }

    /// The numeric rank value.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=13 => Ok(Self::RANKS[(value - 1) as usize]),
            _ => Err(CardError::InvalidRank(value)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Ace => 'A',
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Spades suit.
    Spades = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Clubs suit.
    Clubs = 3,
}

impl Suit {
    const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::SUITS.into_iter()
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'H' | 'h' | '♥' | '♡' => Ok(Suit::Hearts),
            'S' | 's' | '♠' | '♤' => Ok(Suit::Spades),
            'D' | 'd' | '♦' | '♢' => Ok(Suit::Diamonds),
            'C' | 'c' | '♣' | '♧' => Ok(Suit::Clubs),
            _ => Err(CardError::InvalidSuit(c)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        };

        write!(f, "{suit}")
    }
}

/// A three cards hand with distinct cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Card; 3]", into = "[Card; 3]")]
pub struct Hand([Card; 3]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 3;

    /// Creates a hand, fails if the cards are not distinct.
    pub fn new(cards: [Card; 3]) -> Result<Self, CardError> {
        let [c1, c2, c3] = cards;
        if c1 == c2 || c1 == c3 {
            return Err(CardError::DuplicateCard(c1));
        }

        if c2 == c3 {
            return Err(CardError::DuplicateCard(c2));
        }

        Ok(Self(cards))
    }

    /// Deals a hand from the top of a deck.
    pub fn deal(deck: &mut Deck) -> Option<Self> {
        Some(Self([deck.deal()?, deck.deal()?, deck.deal()?]))
    }

    /// The hand cards in dealing order.
    pub fn cards(&self) -> &[Card; 3] {
        &self.0
    }
}

impl ops::Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl TryFrom<[Card; 3]> for Hand {
    type Error = CardError;

    fn try_from(cards: [Card; 3]) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = CardError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards = <[Card; 3]>::try_from(cards).map_err(|_| CardError::HandSize(cards.len()))?;
        Hand::new(cards)
    }
}

impl From<Hand> for [Card; 3] {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

impl FromStr for Hand {
    type Err = CardError;

    /// Parses three cards separated by spaces or commas, like `QH KH AH`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(Card::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::try_from(cards.as_slice())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2, c3] = self.0;
        write!(f, "{c1} {c2} {c3}")
    }
}

/// A cards Deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The deck cards in order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Returns a new deck without the given cards.
    pub fn without(&self, cards: &[Card]) -> Deck {
        let cards = self
            .cards
            .iter()
            .filter(|c| !cards.contains(c))
            .copied()
            .collect();
        Deck { cards }
    }

    /// Returns an iterator over all the K-cards combinations.
    ///
    /// Panics if K > 7.
    pub fn combinations<const K: usize>(
        &self,
    ) -> impl ExactSizeIterator<Item = [Card; K]> + Clone + '_ {
        Combinations::<K>::new(self.cards.len()).map(|idx| idx.map(|i| self.cards[i]))
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k > 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!(k <= combinations::MAX_K, "k <= {}", combinations::MAX_K);

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut idx = [0usize; combinations::MAX_K];
        let mut h = [Card::new(Rank::Ace, Suit::Hearts); combinations::MAX_K];
        for (i, pos) in idx.iter_mut().enumerate() {
            *pos = i;
        }

        loop {
            for (c, &pos) in h.iter_mut().zip(&idx[..k]) {
                *c = self.cards[pos];
            }

            f(&h[..k]);

            if !combinations::advance(&mut idx[..k], n) {
                break;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Rank::ranks()
            .flat_map(|r| Suit::suits().map(move |s| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(card.id() & 0xF, card.rank() as u8);
            assert_eq!(card.id() >> 4, card.suit() as u8);
            assert_eq!(card, Card::new(card.rank(), card.suit()));
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.value(), 13);
        assert_eq!(kd.id(), 0x2d);

        let ac = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(ac.value(), 1);
        assert_eq!(ac.id(), 0x31);
    }

    #[test]
    fn card_domain() {
        assert_eq!(
            Card::try_new(12, Suit::Hearts),
            Ok(Card::new(Rank::Queen, Suit::Hearts))
        );
        assert_eq!(Card::try_new(0, Suit::Hearts), Err(CardError::InvalidRank(0)));
        assert_eq!(Card::try_new(14, Suit::Clubs), Err(CardError::InvalidRank(14)));
        assert_eq!(Suit::try_from('x'), Err(CardError::InvalidSuit('x')));

        for (v, r) in (1..=13).zip(Rank::ranks()) {
            assert_eq!(Rank::try_from(v), Ok(r));
            assert_eq!(r.value(), v);
        }
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        let th = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!("10h".parse::<Card>(), Ok(th));
        assert_eq!(" th ".parse::<Card>(), Ok(th));
        assert_eq!("T♥".parse::<Card>(), Ok(th));
        assert_eq!("1S".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Spades)));

        assert_eq!("".parse::<Card>(), Err(CardError::InvalidCard("".into())));
        assert_eq!("11H".parse::<Card>(), Err(CardError::InvalidCard("11H".into())));
        assert_eq!("QX".parse::<Card>(), Err(CardError::InvalidSuit('X')));
    }

    #[test]
    fn hand_from_string() {
        let hand = "QH KH AH".parse::<Hand>().unwrap();
        assert_eq!(hand[0], Card::new(Rank::Queen, Suit::Hearts));
        assert_eq!(hand[2], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(hand.to_string(), "QH KH AH");

        assert_eq!("2h,3h, 7s".parse::<Hand>().unwrap().to_string(), "2H 3H 7S");
        assert_eq!("2H 3H".parse::<Hand>(), Err(CardError::HandSize(2)));
        assert_eq!(
            "2H 3H 2H".parse::<Hand>(),
            Err(CardError::DuplicateCard(Card::new(Rank::Deuce, Suit::Hearts)))
        );
    }

    #[test]
    fn hand_serde() {
        let hand = "QH KH AH".parse::<Hand>().unwrap();
        let cards: [Card; 3] = hand.into();
        assert_eq!(Hand::try_from(cards), Ok(hand));
        assert_eq!(String::from(cards[1]), "KH");
        assert_eq!(Card::try_from(String::from("KH")), Ok(cards[1]));
    }

    #[test]
    fn deck_order() {
        let cards = Deck::default().into_iter().take(5).collect::<Vec<_>>();
        assert_eq!(
            cards,
            [
                Card::new(Rank::Ace, Suit::Hearts),
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::Ace, Suit::Diamonds),
                Card::new(Rank::Ace, Suit::Clubs),
                Card::new(Rank::Deuce, Suit::Hearts),
            ]
        );
    }

    #[test]
    fn deck_without() {
        let deck = Deck::default();
        let hand = "QH KH AH".parse::<Hand>().unwrap();
        let rest = deck.without(hand.cards());

        assert_eq!(rest.count(), 49);
        assert!(hand.cards().iter().all(|&c| !rest.contains(c)));
        assert!(deck.contains(hand[0]));
        assert_eq!(deck.count(), Deck::SIZE);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(0, |cards| {
            assert!(cards.is_empty());
            count += 1;
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn deck_combinations() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut from_for_each = Vec::new();
        deck.for_each(3, |cards| from_for_each.push(cards.to_owned()));

        let combs = deck.combinations::<3>();
        assert_eq!(combs.len(), 19_600);
        assert!(combs.map(|c| c.to_vec()).eq(from_for_each));
    }

    #[test]
    fn deal_hands() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let mut count = 0;
        while let Some(hand) = Hand::deal(&mut deck) {
            assert!(Hand::new(*hand.cards()).is_ok());
            count += 1;
        }

        // 17 hands and one card left.
        assert_eq!(count, 17);
    }
}
