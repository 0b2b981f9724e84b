//! Name resolvers: raw identifier strings to display names, each with its
//! own fallback chain. All of them are total; a miss degrades to the raw
//! key or a cleaned-up form of it, never an error.

use crate::mappings::{MappingStore, category};

/// Last `/`-delimited segment; a path with no separators is returned whole.
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Fissure/storm tier code to display name. Empty codes (a record with no
/// modifier at all) render as the unknown-tier placeholder.
pub fn modifier_name(store: &MappingStore, key: &str) -> String {
    if key.is_empty() {
        return "未知等级".to_string();
    }
    match store.lookup(category::MODIFIERS, key) {
        Some(name) => name.to_string(),
        None => key.replace("Void", "").replace("Storm", "风暴"),
    }
}

/// Syndicate tag to display name: the tag is cleaned before lookup, so the
/// mapping table is keyed by the cleaned form.
pub fn syndicate_name(store: &MappingStore, tag: &str) -> String {
    let cleaned = tag.replace("Syndicate", "").replace('_', " ");
    let cleaned = cleaned.trim();
    store.resolve(category::SYNDICATES, cleaned).to_string()
}

/// Archon boss key to display name via the bosses table; a miss strips the
/// sortie-boss prefixes instead.
pub fn archon_name(store: &MappingStore, key: &str) -> String {
    if key.is_empty() {
        return "未知执行官".to_string();
    }
    match store.lookup(category::BOSSES, key) {
        Some(name) => name.to_string(),
        None => key.replace("SORTIE_BOSS_", "").replace("ARCHON_", ""),
    }
}

/// Sortie stage modifiers have no table; the fixed prefix is dropped.
pub fn sortie_modifier(raw: &str) -> &str {
    raw.strip_prefix("SORTIE_MODIFIER_").unwrap_or(raw)
}

/// Two-stage bounty name: jobType -> language key -> display name.
///
/// The two fallbacks are independent: a stage-one miss falls back to the
/// last segment of the job type, a stage-two miss to the last segment of
/// the language key.
pub fn bounty_name(store: &MappingStore, job_type: &str) -> String {
    if job_type.is_empty() {
        return "未知赏金".to_string();
    }

    let Some(language_key) = store.lookup(category::BOUNTY_JOBS, job_type) else {
        return last_segment(job_type).to_string();
    };

    match store.lookup(category::DICTIONARY, language_key) {
        Some(name) => name.to_string(),
        None => last_segment(language_key).to_string(),
    }
}

/// Nightwave challenge path to display name; miss falls back to the last
/// path segment.
pub fn challenge_name(store: &MappingStore, path: &str) -> String {
    match store.lookup(category::DICTIONARY, path) {
        Some(name) => name.to_string(),
        None => last_segment(path).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(
            last_segment("/Lotus/Language/Jobs/CaptureJobName"),
            "CaptureJobName"
        );
        assert_eq!(last_segment("NoSlashes"), "NoSlashes");
        assert_eq!(last_segment(""), "");
    }

    #[test]
    fn test_modifier_name_mapped_and_cleaned() {
        let mut store = MappingStore::new();
        store.insert_category(category::MODIFIERS, table(&[("VoidT1", "古纪")]));

        assert_eq!(modifier_name(&store, "VoidT1"), "古纪");
        assert_eq!(modifier_name(&store, "VoidT9"), "T9");
        assert_eq!(modifier_name(&store, "VoidStorm"), "风暴");
        assert_eq!(modifier_name(&store, ""), "未知等级");
    }

    #[test]
    fn test_syndicate_name_cleans_before_lookup() {
        let mut store = MappingStore::new();
        store.insert_category(category::SYNDICATES, table(&[("RedVeil", "血色面纱")]));

        assert_eq!(syndicate_name(&store, "RedVeilSyndicate"), "血色面纱");
        // Unmapped tag degrades to the cleaned form.
        assert_eq!(syndicate_name(&store, "Event_Syndicate"), "Event");
    }

    #[test]
    fn test_archon_name_fallback_strips_prefixes() {
        let mut store = MappingStore::new();
        store.insert_category(
            category::BOSSES,
            table(&[("SORTIE_BOSS_AMAR", "执行官阿玛尔")]),
        );

        assert_eq!(archon_name(&store, "SORTIE_BOSS_AMAR"), "执行官阿玛尔");
        assert_eq!(archon_name(&store, "SORTIE_BOSS_ARCHON_NIRA"), "NIRA");
        assert_eq!(archon_name(&store, ""), "未知执行官");
    }

    #[test]
    fn test_sortie_modifier_strips_prefix() {
        assert_eq!(sortie_modifier("SORTIE_MODIFIER_LOW_ENERGY"), "LOW_ENERGY");
        assert_eq!(sortie_modifier("LOW_ENERGY"), "LOW_ENERGY");
    }

    const JOB: &str = "/Lotus/Types/Gameplay/Venus/Jobs/CaptureJob";
    const LANG_KEY: &str = "/Lotus/Language/Jobs/CaptureJobName";

    #[test]
    fn test_bounty_name_both_stages_hit() {
        let mut store = MappingStore::new();
        store.insert_category(category::BOUNTY_JOBS, table(&[(JOB, LANG_KEY)]));
        store.insert_category(category::DICTIONARY, table(&[(LANG_KEY, "捕获任务")]));

        assert_eq!(bounty_name(&store, JOB), "捕获任务");
    }

    #[test]
    fn test_bounty_name_stage_two_miss() {
        let mut store = MappingStore::new();
        store.insert_category(category::BOUNTY_JOBS, table(&[(JOB, LANG_KEY)]));

        assert_eq!(bounty_name(&store, JOB), "CaptureJobName");
    }

    #[test]
    fn test_bounty_name_stage_one_miss() {
        let mut store = MappingStore::new();
        // Dictionary alone cannot help without the stage-one key.
        store.insert_category(category::DICTIONARY, table(&[(LANG_KEY, "捕获任务")]));

        assert_eq!(bounty_name(&store, JOB), "CaptureJob");
        assert_eq!(bounty_name(&store, ""), "未知赏金");
    }

    #[test]
    fn test_bounty_name_idempotent_for_fixed_tables() {
        let mut store = MappingStore::new();
        store.insert_category(category::BOUNTY_JOBS, table(&[(JOB, LANG_KEY)]));
        store.insert_category(category::DICTIONARY, table(&[(LANG_KEY, "捕获任务")]));

        let first = bounty_name(&store, JOB);
        let second = bounty_name(&store, JOB);
        assert_eq!(first, second);
    }

    #[test]
    fn test_challenge_name_fallback() {
        let mut store = MappingStore::new();
        store.insert_category(
            category::DICTIONARY,
            table(&[("/Lotus/Types/Challenges/Calendar1999/CalendarKillEximus", "杀敌")]),
        );

        assert_eq!(
            challenge_name(&store, "/Lotus/Types/Challenges/Calendar1999/CalendarKillEximus"),
            "杀敌"
        );
        assert_eq!(
            challenge_name(&store, "/Lotus/Types/Challenges/Unmapped"),
            "Unmapped"
        );
    }
}
