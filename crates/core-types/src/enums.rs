use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Numeric value with Ace high (2..=14).
    pub fn value(&self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

/// A single action the hero took, as recorded in the hand history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    ThreeBet,
    FourBet,
    AllIn,
}

impl ActionKind {
    /// Whether the action counts toward the aggressive side of the
    /// aggression factor (bets and raises, not calls).
    pub fn is_aggressive(&self) -> bool {
        matches!(
            self,
            ActionKind::Bet
                | ActionKind::Raise
                | ActionKind::ThreeBet
                | ActionKind::FourBet
                | ActionKind::AllIn
        )
    }

    /// Whether the action voluntarily puts money in the pot preflop.
    pub fn is_vpip(&self) -> bool {
        !matches!(self, ActionKind::Fold | ActionKind::Check)
    }
}

/// Table position, six-max naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Utg,
    Mp,
    Co,
    Btn,
    Sb,
    Bb,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Utg => "UTG",
            Position::Mp => "MP",
            Position::Co => "CO",
            Position::Btn => "BTN",
            Position::Sb => "SB",
            Position::Bb => "BB",
        }
    }
}

/// Behavioral archetype an opponent (or a cluster of opponents) maps to.
///
/// Variant order is the tie-break priority: when two archetypes are equally
/// close in stat space, the earlier variant wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Nit,
    Tag,
    Lag,
    CallingStation,
    Maniac,
    Whale,
    #[default]
    Unknown,
}

impl Archetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Nit => "Nit",
            Archetype::Tag => "TAG",
            Archetype::Lag => "LAG",
            Archetype::CallingStation => "Calling Station",
            Archetype::Maniac => "Maniac",
            Archetype::Whale => "Whale",
            Archetype::Unknown => "Unknown",
        }
    }

    /// Tie-break priority (lower wins), fixed by variant order.
    pub fn priority(&self) -> u8 {
        match self {
            Archetype::Nit => 0,
            Archetype::Tag => 1,
            Archetype::Lag => 2,
            Archetype::CallingStation => 3,
            Archetype::Maniac => 4,
            Archetype::Whale => 5,
            Archetype::Unknown => 6,
        }
    }
}
