use crate::enums::{ActionKind, Card, Position, Street};
use crate::error::CoreError;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Below this many hands, a winrate is statistical noise and the engines
/// refuse to report one.
pub const MIN_WINRATE_HANDS: usize = 30;

/// The blind structure a session was played at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakes {
    pub small_blind: Decimal,
    pub big_blind: Decimal,
}

impl Stakes {
    pub fn new(small_blind: Decimal, big_blind: Decimal) -> Self {
        Self {
            small_blind,
            big_blind,
        }
    }
}

/// One logged cash-game session. Immutable once closed; the store sets
/// `cash_out` when the session ends, and the analytics core only ever
/// reads these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub stakes: Stakes,
    pub buy_in: Decimal,
    pub cash_out: Decimal,
    pub hands_played: u32,
    pub location: Option<String>,
}

impl SessionRecord {
    /// Net result of the session in currency units.
    pub fn profit(&self) -> Decimal {
        self.cash_out - self.buy_in
    }

    /// Net result normalized to big blinds for cross-stake comparison.
    pub fn profit_bb(&self) -> Result<f64, CoreError> {
        if self.stakes.big_blind <= Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                "stakes.big_blind".to_string(),
                "big blind must be positive".to_string(),
            ));
        }
        (self.profit() / self.stakes.big_blind)
            .to_f64()
            .ok_or_else(|| {
                CoreError::Calculation("session profit does not fit in an f64".to_string())
            })
    }

    pub fn duration(&self) -> Duration {
        self.ended_at - self.started_at
    }
}

/// An action the hero took on one street.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreetAction {
    pub street: Street,
    pub action: ActionKind,
    /// Amount committed by the action, in big blinds. `None` for checks and folds.
    pub amount_bb: Option<f64>,
}

/// One hand the hero played, append-only. Monetary figures arrive already
/// normalized to big blinds of the parent session's stakes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    pub id: Uuid,
    pub session_id: Uuid,
    pub played_at: DateTime<Utc>,
    pub hole_cards: [Card; 2],
    /// Community cards dealt so far: 0 preflop through 5 on the river.
    pub board: Vec<Card>,
    pub position: Position,
    pub pot_bb: f64,
    /// Hero's net result for the hand, in big blinds.
    pub net_bb: f64,
    pub actions: Vec<StreetAction>,
    pub vpip: bool,
    pub pfr: bool,
    pub aggressive: bool,
    /// Tracked opponent the pot was primarily contested against, if any.
    pub opponent_id: Option<Uuid>,
}

impl HandRecord {
    /// The hero's first voluntary preflop action, if any.
    pub fn preflop_action(&self) -> Option<ActionKind> {
        self.actions
            .iter()
            .find(|a| a.street == Street::Preflop)
            .map(|a| a.action)
    }
}

/// Aggregated statistics for one tracked opponent, maintained by the store
/// as hands are logged. The analytics core treats these as a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpponentStats {
    /// Voluntarily-put-money-in-pot, percent of hands (0-100).
    pub vpip_pct: f64,
    /// Preflop raise, percent of hands (0-100).
    pub pfr_pct: f64,
    /// Aggressive actions divided by calls.
    pub aggression_factor: f64,
    /// Went-to-showdown, percent of hands seen to a flop (0-100).
    pub wtsd_pct: f64,
    /// Three-bet, percent of opportunities (0-100).
    pub three_bet_pct: f64,
    pub hands_sampled: u32,
}

impl OpponentStats {
    /// Open-limp tendency: the spread between entering the pot and raising.
    pub fn limp_rate(&self) -> f64 {
        (self.vpip_pct - self.pfr_pct).max(0.0)
    }

    /// The four dimensions the clustering and tagging engines operate on.
    pub fn feature_vector(&self) -> [f64; 4] {
        [
            self.vpip_pct,
            self.pfr_pct,
            self.aggression_factor,
            self.wtsd_pct,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentRecord {
    pub id: Uuid,
    pub name: String,
    pub stats: OpponentStats,
}

/// Winrate in big blinds per 100 hands.
///
/// Fails with [`CoreError::InsufficientData`] below [`MIN_WINRATE_HANDS`]:
/// a winrate over a handful of hands is undefined, not a number.
pub fn winrate_bb_per_100(total_net_bb: f64, hands: usize) -> Result<f64, CoreError> {
    if hands < MIN_WINRATE_HANDS {
        return Err(CoreError::InsufficientData {
            required: MIN_WINRATE_HANDS,
            actual: hands,
        });
    }
    Ok(total_net_bb / hands as f64 * 100.0)
}
