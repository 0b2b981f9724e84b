//! Record kinds carried by the world-state document.
//!
//! Field names mirror the upstream JSON casing via `rename`; each struct is
//! `#[serde(default)]` so a record missing a field still decodes.

use serde::Deserialize;

use crate::timestamp::Timestamp;

/// Top-level world-state document. Lists the endpoint omits decode empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorldState {
    #[serde(rename = "Alerts")]
    pub alerts: Vec<Alert>,
    #[serde(rename = "Invasions")]
    pub invasions: Vec<Invasion>,
    #[serde(rename = "Events")]
    pub events: Vec<Event>,
    #[serde(rename = "Sorties")]
    pub sorties: Vec<Sortie>,
    #[serde(rename = "ActiveMissions")]
    pub active_missions: Vec<ActiveMission>,
    #[serde(rename = "VoidTraders")]
    pub void_traders: Vec<VoidTrader>,
    #[serde(rename = "SyndicateMissions")]
    pub syndicate_missions: Vec<SyndicateMission>,
    #[serde(rename = "SeasonInfo")]
    pub season_info: Option<SeasonInfo>,
    #[serde(rename = "VoidStorms")]
    pub void_storms: Vec<VoidStorm>,
    #[serde(rename = "LiteSorties")]
    pub lite_sorties: Vec<LiteSortie>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Alert {
    #[serde(rename = "Activation")]
    pub activation: Timestamp,
    #[serde(rename = "Expiry")]
    pub expiry: Timestamp,
    #[serde(rename = "MissionInfo")]
    pub mission_info: MissionInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MissionInfo {
    #[serde(rename = "missionType")]
    pub mission_type: String,
    pub faction: String,
    pub location: String,
    #[serde(rename = "missionReward")]
    pub mission_reward: MissionReward,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MissionReward {
    pub credits: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Invasion {
    #[serde(rename = "Node")]
    pub node: String,
    #[serde(rename = "Faction")]
    pub faction: String,
    /// Attacker-relative progress; negative when the defender leads.
    #[serde(rename = "Count")]
    pub count: i64,
    #[serde(rename = "Goal")]
    pub goal: i64,
    #[serde(rename = "Completed")]
    pub completed: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "Messages")]
    pub messages: Vec<EventMessage>,
    /// Presence (not value) of either date field marks a current event.
    #[serde(rename = "EventEndDate")]
    pub event_end_date: Option<Timestamp>,
    #[serde(rename = "Date")]
    pub date: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventMessage {
    #[serde(rename = "LanguageCode")]
    pub language_code: String,
    #[serde(rename = "Message")]
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sortie {
    #[serde(rename = "Boss")]
    pub boss: String,
    #[serde(rename = "Variants")]
    pub variants: Vec<SortieVariant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SortieVariant {
    #[serde(rename = "missionType")]
    pub mission_type: String,
    #[serde(rename = "modifierType")]
    pub modifier_type: String,
    pub node: String,
}

/// Relic fissures live here; the `Modifier` prefix tells them apart from
/// other timed missions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ActiveMission {
    #[serde(rename = "Node")]
    pub node: String,
    #[serde(rename = "MissionType")]
    pub mission_type: String,
    #[serde(rename = "Modifier")]
    pub modifier: String,
    #[serde(rename = "Activation")]
    pub activation: Timestamp,
    #[serde(rename = "Expiry")]
    pub expiry: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VoidTrader {
    #[serde(rename = "Node")]
    pub node: String,
    #[serde(rename = "Activation")]
    pub activation: Timestamp,
    #[serde(rename = "Expiry")]
    pub expiry: Timestamp,
    #[serde(rename = "Manifest")]
    pub manifest: Vec<ManifestItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ManifestItem {
    #[serde(rename = "ItemType")]
    pub item_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SyndicateMission {
    #[serde(rename = "Tag")]
    pub tag: String,
    #[serde(rename = "Nodes")]
    pub nodes: Vec<String>,
    #[serde(rename = "Jobs")]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(rename = "jobType")]
    pub job_type: String,
    #[serde(rename = "masteryReq")]
    pub mastery_req: i64,
    #[serde(rename = "minEnemyLevel")]
    pub min_enemy_level: i64,
    #[serde(rename = "maxEnemyLevel")]
    pub max_enemy_level: i64,
}

/// Nightwave season block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeasonInfo {
    #[serde(rename = "Season")]
    pub season: i64,
    #[serde(rename = "Phase")]
    pub phase: i64,
    #[serde(rename = "ActiveChallenges")]
    pub active_challenges: Vec<Challenge>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Challenge {
    #[serde(rename = "Challenge")]
    pub challenge: String,
    #[serde(rename = "Daily")]
    pub daily: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VoidStorm {
    #[serde(rename = "Node")]
    pub node: String,
    #[serde(rename = "ActiveMissionTier")]
    pub active_mission_tier: String,
}

/// "Lite sortie" list; the archon hunt is found in here by boss keyword.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LiteSortie {
    #[serde(rename = "Boss")]
    pub boss: String,
    #[serde(rename = "Activation")]
    pub activation: Timestamp,
    #[serde(rename = "Expiry")]
    pub expiry: Timestamp,
    #[serde(rename = "Missions")]
    pub missions: Vec<LiteSortieMission>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LiteSortieMission {
    #[serde(rename = "missionType")]
    pub mission_type: String,
    pub node: String,
}
