use crate::report::{LeakCategory, LeakItem};
use crate::stats::{by_position, by_position_action, cohort};
use configuration::LeakParams;
use core_types::{ActionKind, Archetype, HandRecord, Position, SessionRecord};
use std::collections::HashSet;
use tagging::OpponentTag;
use tilt::TiltScore;
use uuid::Uuid;

/// Whole positions losing at a rate no position should.
pub fn position_leaks(hands: &[HandRecord], params: &LeakParams) -> Vec<LeakItem> {
    let mut items = Vec::new();
    for (position, spot) in by_position(hands) {
        let winrate = spot.winrate_bb_per_100();
        if spot.hands >= params.min_sample_hands && winrate < params.position_loss_bb100 {
            items.push(LeakItem {
                category: LeakCategory::Position,
                description: format!("Overall play from {}", position.as_str()),
                winrate_bb_per_100: winrate,
                ev_impact_bb_per_100: -winrate,
                sample_hands: spot.hands,
                first_seen: spot.first_seen,
                priority: 0,
                recommendation: position_advice(position).to_string(),
            });
        }
    }
    items
}

/// Specific preflop lines (position + action) bleeding money.
pub fn position_action_leaks(hands: &[HandRecord], params: &LeakParams) -> Vec<LeakItem> {
    let mut items = Vec::new();
    for ((position, action), spot) in by_position_action(hands) {
        let winrate = spot.winrate_bb_per_100();
        if spot.hands >= params.min_sample_hands && winrate < params.combo_loss_bb100 {
            items.push(LeakItem {
                category: LeakCategory::PositionAction,
                description: format!("{} from {}", action_name(action), position.as_str()),
                winrate_bb_per_100: winrate,
                ev_impact_bb_per_100: -winrate,
                sample_hands: spot.hands,
                first_seen: spot.first_seen,
                priority: 0,
                recommendation: action_advice(action).to_string(),
            });
        }
    }
    items
}

/// The winrate gap between high-tilt sessions and the rest of the sample.
pub fn tilt_spill(
    _sessions: &[SessionRecord],
    hands: &[HandRecord],
    tilt_scores: &[(Uuid, TiltScore)],
    params: &LeakParams,
) -> Option<LeakItem> {
    let tilted_sessions: HashSet<Uuid> = tilt_scores
        .iter()
        .filter(|(_, score)| score.score >= params.tilt_score_cutoff)
        .map(|(id, _)| *id)
        .collect();
    if tilted_sessions.is_empty() {
        return None;
    }

    let tilted = cohort(hands.iter().filter(|h| tilted_sessions.contains(&h.session_id)));
    let calm = cohort(hands.iter().filter(|h| !tilted_sessions.contains(&h.session_id)));
    if tilted.hands < params.min_sample_hands || calm.hands < params.min_sample_hands {
        return None;
    }

    let gap = tilted.winrate_bb_per_100() - calm.winrate_bb_per_100();
    if gap >= 0.0 {
        return None;
    }

    Some(LeakItem {
        category: LeakCategory::TiltSpill,
        description: "Chasing losses while tilted".to_string(),
        winrate_bb_per_100: tilted.winrate_bb_per_100(),
        ev_impact_bb_per_100: -gap,
        sample_hands: tilted.hands,
        first_seen: tilted.first_seen,
        priority: 0,
        recommendation:
            "Adopt a hard stop-loss and quit rule; the data says continuing while tilted is paid for in bb/100."
                .to_string(),
    })
}

/// Bluffing into opponents the tagger already marked as unbluffable.
pub fn station_payoff(
    hands: &[HandRecord],
    opponent_tags: &[(Uuid, OpponentTag)],
    params: &LeakParams,
) -> Option<LeakItem> {
    let stations: HashSet<Uuid> = opponent_tags
        .iter()
        .filter(|(_, tag)| {
            matches!(tag.archetype, Archetype::CallingStation | Archetype::Whale)
        })
        .map(|(id, _)| *id)
        .collect();
    if stations.is_empty() {
        return None;
    }

    let bluffed = cohort(hands.iter().filter(|h| {
        h.aggressive
            && h.opponent_id
                .map(|id| stations.contains(&id))
                .unwrap_or(false)
    }));
    if bluffed.hands < params.min_sample_hands {
        return None;
    }

    let winrate = bluffed.winrate_bb_per_100();
    if winrate >= params.station_loss_bb100 {
        return None;
    }

    Some(LeakItem {
        category: LeakCategory::StationPayoff,
        description: "Bluffing calling stations".to_string(),
        winrate_bb_per_100: winrate,
        ev_impact_bb_per_100: -winrate,
        sample_hands: bluffed.hands,
        first_seen: bluffed.first_seen,
        priority: 0,
        recommendation: "Stop bluffing tagged stations; shift those chips into thinner value bets."
            .to_string(),
    })
}

fn action_name(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Fold => "Folding",
        ActionKind::Check => "Checking",
        ActionKind::Call => "Calling",
        ActionKind::Bet => "Betting",
        ActionKind::Raise => "Raising",
        ActionKind::ThreeBet => "3-betting",
        ActionKind::FourBet => "4-betting",
        ActionKind::AllIn => "Jamming",
    }
}

fn position_advice(position: Position) -> &'static str {
    match position {
        Position::Sb => "Tighten the small-blind range; prefer 3-betting over flatting.",
        Position::Bb => "Defend the big blind with playable hands, not everything with paint.",
        Position::Utg => "Open tighter under the gun; premium hands only.",
        Position::Mp => "Trim the middle-position opening range and plan for 3-bets behind.",
        Position::Co => "Review cutoff opens: sizing, steals, and reaction to button 3-bets.",
        Position::Btn => "Button losses usually mean missed value; raise more, flat less.",
    }
}

fn action_advice(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Call => {
            "Flatting is often the worst of three options; 3-bet the strong hands and fold the rest."
        }
        ActionKind::Raise => "Review open-raise sizing and hand selection for this seat.",
        ActionKind::Fold => "Money lost while folding means over-folding to pressure; trust reads more.",
        ActionKind::AllIn => "Re-examine stack-off ranges; the sample says these jams are -EV.",
        _ => "Review this line hand by hand for a recurring mistake.",
    }
}
