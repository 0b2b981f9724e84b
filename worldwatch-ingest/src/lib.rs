//! worldwatch-ingest: serde data model for the raw world-state document.
//!
//! Every field is best-effort: missing or malformed fields decode to their
//! defaults (empty string / zero / empty list / absent timestamp) so one bad
//! record never poisons the whole document.

pub mod timestamp;
pub mod types;

pub use timestamp::Timestamp;
pub use types::{
    ActiveMission, Alert, Challenge, Event, EventMessage, Invasion, Job, LiteSortie,
    LiteSortieMission, ManifestItem, MissionInfo, MissionReward, SeasonInfo, Sortie, SortieVariant,
    SyndicateMission, VoidStorm, VoidTrader, WorldState,
};

use anyhow::{Context, Result};

/// Decode a raw world-state document.
///
/// The only hard failure is a body that is not a JSON object at all; unknown
/// keys are ignored and known keys with unexpected shapes fall back to
/// defaults via the per-type deserializers.
pub fn decode_world_state(body: &str) -> Result<WorldState> {
    serde_json::from_str(body).context("decode world-state document")
}
