use crate::report::{OpponentTag, TagConfidence, TraitTag};
use configuration::{TagRule, TaggingParams};
use core_types::{Archetype, OpponentStats};
use tracing::debug;

/// Threshold classifier over an opponent's stat snapshot.
#[derive(Debug, Clone, Default)]
pub struct OpponentTagger {
    params: TaggingParams,
}

impl OpponentTagger {
    pub fn new(params: TaggingParams) -> Self {
        Self { params }
    }

    /// Classifies the stats into exactly one archetype.
    ///
    /// The first rule in the configured table whose every range matches
    /// wins; profiles no rule claims, and samples below the configured
    /// hand floor, come back as `Unknown`.
    pub fn tag(&self, stats: &OpponentStats) -> OpponentTag {
        let archetype = if stats.hands_sampled < self.params.min_hands {
            Archetype::Unknown
        } else {
            self.params
                .rules
                .iter()
                .find(|rule| rule_matches(rule, stats))
                .map(|rule| rule.archetype)
                .unwrap_or(Archetype::Unknown)
        };

        debug!(?archetype, vpip = stats.vpip_pct, "opponent tagged");

        OpponentTag {
            archetype,
            traits: self.traits_for(stats),
            note: exploitation_note(archetype).to_string(),
            confidence: confidence_for(stats.hands_sampled),
            hands_sampled: stats.hands_sampled,
        }
    }

    fn traits_for(&self, stats: &OpponentStats) -> Vec<TraitTag> {
        let t = &self.params.traits;
        let mut traits = Vec::new();

        if stats.three_bet_pct < t.foldy_three_bet_max && stats.pfr_pct > t.foldy_pfr_min {
            traits.push(TraitTag::Foldy);
        }
        if stats.aggression_factor < t.passive_af_max && stats.vpip_pct > t.passive_vpip_min {
            traits.push(TraitTag::Passive);
        }
        if stats.aggression_factor > t.aggro_af_min {
            traits.push(TraitTag::Aggro);
        }
        if stats.limp_rate() > t.limper_spread_min {
            traits.push(TraitTag::Limper);
        }

        traits
    }
}

fn rule_matches(rule: &TagRule, stats: &OpponentStats) -> bool {
    rule.vpip.contains(stats.vpip_pct)
        && rule.pfr.contains(stats.pfr_pct)
        && rule.aggression_factor.contains(stats.aggression_factor)
        && rule.wtsd.contains(stats.wtsd_pct)
}

fn confidence_for(hands: u32) -> TagConfidence {
    if hands > 200 {
        TagConfidence::High
    } else if hands > 50 {
        TagConfidence::Medium
    } else {
        TagConfidence::Low
    }
}

/// One canned exploitation line per archetype.
pub fn exploitation_note(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::Nit => "Steal their blinds relentlessly; fold to their raises without a premium.",
        Archetype::Tag => "Competent regular. Avoid marginal spots and pick softer targets.",
        Archetype::Lag => "Trap with strong hands and call down lighter; tighten your 3-bet range.",
        Archetype::CallingStation => "Value bet relentlessly and never bluff; they do not fold.",
        Archetype::Maniac => "Let them hang themselves: tighten up, trap with monsters.",
        Archetype::Whale => "Isolate wide and bet every street for value.",
        Archetype::Unknown => "Not enough data; play fundamentally sound until reads develop.",
    }
}
