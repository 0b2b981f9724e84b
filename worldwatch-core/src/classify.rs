//! Per record-kind classifiers: pure partition/selection functions over the
//! decoded document. Each one mirrors a display rule of the report, so the
//! rules are testable without rendering anything.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use worldwatch_ingest::{
    ActiveMission, Alert, Challenge, Event, Invasion, LiteSortie, SyndicateMission,
};

use crate::timewindow::{self, WindowStatus};

/// Activity policy for alerts and similar legacy records: no expiry means
/// "always active", unlike the generic evaluator where it means Unknown.
pub fn is_active_by_expiry(expiry_ms: Option<i64>, now: DateTime<Utc>) -> bool {
    match expiry_ms {
        None => true,
        Some(_) => timewindow::classify(None, expiry_ms, now).status == WindowStatus::Active,
    }
}

pub fn active_alerts<'a>(alerts: &'a [Alert], now: DateTime<Utc>) -> Vec<&'a Alert> {
    alerts
        .iter()
        .filter(|a| is_active_by_expiry(a.expiry.millis(), now))
        .collect()
}

#[derive(Debug, Default)]
pub struct InvasionSplit<'a> {
    pub active: Vec<&'a Invasion>,
    pub completed: Vec<&'a Invasion>,
}

pub fn partition_invasions(invasions: &[Invasion]) -> InvasionSplit<'_> {
    let mut split = InvasionSplit::default();
    for inv in invasions {
        if inv.completed {
            split.completed.push(inv);
        } else {
            split.active.push(inv);
        }
    }
    split
}

/// Attacker progress in percent. `Count` may be negative (defender leading),
/// so the magnitude is what counts; a zero or negative goal is exactly 0%.
pub fn invasion_progress(count: i64, goal: i64) -> f64 {
    if goal <= 0 {
        return 0.0;
    }
    count.unsigned_abs() as f64 / goal as f64 * 100.0
}

/// Relic fissures are the active missions carrying a `Void*` modifier.
pub fn void_fissures(missions: &[ActiveMission]) -> Vec<&ActiveMission> {
    missions
        .iter()
        .filter(|m| m.modifier.starts_with("Void"))
        .collect()
}

/// Group timed missions by their raw tier code. The BTreeMap key order is
/// the display order: lexicographic on the code, so "VoidT10" sorts before
/// "VoidT2". That matches the source behavior this tool tracks.
pub fn group_by_tier<'a, T, I, F>(items: I, tier_of: F) -> BTreeMap<String, Vec<&'a T>>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> &str,
{
    let mut groups: BTreeMap<String, Vec<&'a T>> = BTreeMap::new();
    for item in items {
        groups
            .entry(tier_of(item).to_string())
            .or_default()
            .push(item);
    }
    groups
}

/// Events we consider current: they carry either date field at all.
fn is_current_event(event: &Event) -> bool {
    event.event_end_date.is_some() || event.date.is_some()
}

/// Current events that have at least one message in `lang`.
pub fn localized_events<'a>(events: &'a [Event], lang: &str) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| is_current_event(e) && e.messages.iter().any(|m| m.language_code == lang))
        .collect()
}

/// First message in `lang` (list order), truncated to `max_chars`
/// characters. Character count, not bytes: the summaries are CJK text.
pub fn event_summary(event: &Event, lang: &str, max_chars: usize) -> Option<String> {
    event
        .messages
        .iter()
        .find(|m| m.language_code == lang)
        .map(|m| m.message.chars().take(max_chars).collect())
}

/// The six main faction syndicates, matched as tag substrings.
pub const MAIN_SYNDICATES: [&str; 6] = [
    "SteelMeridian",
    "Arbiters",
    "CephalonSuda",
    "Perrin",
    "RedVeil",
    "NewLoka",
];

pub fn main_syndicates<'a>(missions: &'a [SyndicateMission]) -> Vec<&'a SyndicateMission> {
    missions
        .iter()
        .filter(|s| MAIN_SYNDICATES.iter().any(|main| s.tag.contains(main)))
        .collect()
}

/// Open-world bounty boards, in display order: (tag, display name).
/// Exact-tag selection, unlike the substring allow-list above.
pub const BOUNTY_LOCATIONS: [(&str, &str); 3] = [
    ("CetusSyndicate", "地球希图斯"),
    ("SolarisSyndicate", "金星福尔图娜"),
    ("EntratiSyndicate", "火卫二殁世幽都"),
];

/// First syndicate record carrying exactly `tag`.
pub fn bounty_board<'a>(
    missions: &'a [SyndicateMission],
    tag: &str,
) -> Option<&'a SyndicateMission> {
    missions.iter().find(|s| s.tag == tag)
}

/// Partition Nightwave challenges into (daily, weekly) by the `Daily` flag.
pub fn split_challenges(challenges: &[Challenge]) -> (Vec<&Challenge>, Vec<&Challenge>) {
    challenges.iter().partition(|c| c.daily)
}

/// Boss keywords that mark a lite sortie as the archon hunt, evaluated in
/// this order; the first matching record wins.
pub const ARCHON_KEYWORDS: [&str; 4] = ["ARCHON", "NIRA", "AMAR", "BOREAL"];

/// No match is a normal empty state, not an error.
pub fn find_archon_hunt(lite_sorties: &[LiteSortie]) -> Option<&LiteSortie> {
    lite_sorties
        .iter()
        .find(|s| ARCHON_KEYWORDS.iter().any(|kw| s.boss.contains(kw)))
}
