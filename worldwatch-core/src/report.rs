//! Report assembly: one labeled text section per record kind, stitched from
//! the classifiers and resolvers. Sections are public so tests can assert
//! on one record kind at a time.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use worldwatch_ingest::WorldState;

use crate::classify::{
    self, BOUNTY_LOCATIONS, active_alerts, bounty_board, find_archon_hunt, group_by_tier,
    invasion_progress, localized_events, main_syndicates, partition_invasions, split_challenges,
    void_fissures,
};
use crate::mappings::{MappingStore, category};
use crate::resolve;
use crate::timewindow::{WindowStatus, classify as classify_window};

/// Locale tag of the report audience; events without a message in this
/// language are skipped.
pub const EVENT_LANG: &str = "zh";
/// Character budget for an event summary line.
pub const EVENT_SUMMARY_CHARS: usize = 40;

/// Render the whole report: every section, in fixed order, even when empty.
pub fn render(doc: &WorldState, store: &MappingStore, now: DateTime<Utc>) -> String {
    let sections = [
        alerts_section(doc, store, now),
        invasions_section(doc, store),
        events_section(doc),
        sorties_section(doc, store),
        fissures_section(doc, store, now),
        void_trader_section(doc, store, now),
        syndicates_section(doc, store),
        bounties_section(doc, store),
        nightwave_section(doc, store),
        railjack_section(doc, store),
        archon_section(doc, store, now),
    ];
    sections.join("\n")
}

fn fmt_utc(ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => "未知时间".to_string(),
    }
}

pub fn alerts_section(doc: &WorldState, store: &MappingStore, now: DateTime<Utc>) -> String {
    let active = active_alerts(&doc.alerts, now);

    let mut s = String::new();
    let _ = writeln!(s, "🚨警报信息:");
    let _ = writeln!(s, "   • 总数: {}", doc.alerts.len());
    let _ = writeln!(s, "   • 活跃: {}", active.len());

    if active.is_empty() {
        let _ = writeln!(s, "📭当前无活跃警报");
        return s;
    }

    for (i, alert) in active.iter().enumerate() {
        let info = &alert.mission_info;
        let _ = writeln!(
            s,
            "   {}. {} | {} | {} | 奖励: {} 现金",
            i + 1,
            store.resolve(category::MISSIONS, &info.mission_type),
            store.resolve(category::FACTIONS, &info.faction),
            store.resolve(category::NODES, &info.location),
            info.mission_reward.credits,
        );
    }
    s
}

pub fn invasions_section(doc: &WorldState, store: &MappingStore) -> String {
    let split = partition_invasions(&doc.invasions);

    let mut s = String::new();
    let _ = writeln!(s, "⚔️入侵信息:");
    let _ = writeln!(s, "   • 总数: {}", doc.invasions.len());
    let _ = writeln!(s, "   • 进行中: {}", split.active.len());
    let _ = writeln!(s, "   • 已完成: {}", split.completed.len());

    if split.active.is_empty() {
        let _ = writeln!(s, "📭当前无进行中入侵");
        return s;
    }

    for (i, inv) in split.active.iter().enumerate() {
        let _ = writeln!(
            s,
            "   {}. {} | {} | 进度: {:.1}%",
            i + 1,
            store.resolve(category::NODES, &inv.node),
            store.resolve(category::FACTIONS, &inv.faction),
            invasion_progress(inv.count, inv.goal),
        );
    }
    s
}

pub fn events_section(doc: &WorldState) -> String {
    let picked = localized_events(&doc.events, EVENT_LANG);

    let mut s = String::new();
    let _ = writeln!(s, "🎪新闻信息:");
    let _ = writeln!(s, "   • 总数: {}", doc.events.len());
    let _ = writeln!(s, "   • 有中文描述的新闻: {}", picked.len());

    if picked.is_empty() {
        let _ = writeln!(s, "📭当前无中文新闻");
        return s;
    }

    for (i, event) in picked.iter().enumerate() {
        let summary = classify::event_summary(event, EVENT_LANG, EVENT_SUMMARY_CHARS)
            .unwrap_or_else(|| "无描述".to_string());
        let _ = writeln!(s, "   {}. {}...", i + 1, summary);
    }
    s
}

pub fn sorties_section(doc: &WorldState, store: &MappingStore) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "🎯突击任务:");

    let Some(sortie) = doc.sorties.first() else {
        let _ = writeln!(s, "📭今日无突击任务");
        return s;
    };

    let _ = writeln!(s, "   • BOSS: {}", store.resolve(category::BOSSES, &sortie.boss));
    let _ = writeln!(s, "   • 阶段数: {}", sortie.variants.len());

    for (i, variant) in sortie.variants.iter().enumerate() {
        let _ = writeln!(
            s,
            "   {}. {} - {} | {}",
            i + 1,
            store.resolve(category::MISSIONS, &variant.mission_type),
            resolve::sortie_modifier(&variant.modifier_type),
            store.resolve(category::NODES, &variant.node),
        );
    }
    s
}

pub fn fissures_section(doc: &WorldState, store: &MappingStore, now: DateTime<Utc>) -> String {
    let fissures = void_fissures(&doc.active_missions);

    let mut s = String::new();
    let _ = writeln!(s, "🌀虚空裂隙:");
    let _ = writeln!(s, "   • 活跃裂隙: {}", fissures.len());

    if fissures.is_empty() {
        let _ = writeln!(s, "📭当前无活跃裂隙");
        return s;
    }

    let by_tier = group_by_tier(fissures.into_iter(), |m| m.modifier.as_str());
    for (tier, group) in &by_tier {
        let _ = writeln!(
            s,
            "   • {} : {} 个",
            resolve::modifier_name(store, tier),
            group.len()
        );

        for (i, fissure) in group.iter().enumerate() {
            let window = classify_window(None, fissure.expiry.millis(), now);
            let remaining = match (window.status, window.parts()) {
                (WindowStatus::Active, Some(parts)) => parts.fmt_short(),
                _ => "未知".to_string(),
            };
            let _ = writeln!(
                s,
                "      {}. {} - {} - 剩余: {}",
                i + 1,
                store.resolve(category::NODES, &fissure.node),
                store.resolve(category::MISSIONS, &fissure.mission_type),
                remaining,
            );
        }
        let _ = writeln!(s);
    }
    s
}

pub fn void_trader_section(doc: &WorldState, store: &MappingStore, now: DateTime<Utc>) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "👑虚空商人 Baro Ki'Teer:");

    let Some(trader) = doc.void_traders.first() else {
        let _ = writeln!(s, "📭暂无虚空商人信息");
        return s;
    };

    let activation = trader.activation.millis();
    let expiry = trader.expiry.millis();
    let window = classify_window(activation, expiry, now);

    match window.status {
        WindowStatus::Upcoming => {
            let _ = writeln!(s, "   • 状态:🕐即将到来");
            let _ = writeln!(s, "   • 到达时间: {}", fmt_utc(activation.unwrap_or_default()));
            if let Some(parts) = window.parts() {
                let _ = writeln!(s, "   • 距离到达: {}", parts.fmt_days_hours());
            }
        }
        WindowStatus::Active => {
            // Relay hubs carry a HUB suffix the node table doesn't use.
            let node_key = trader.node.replace("HUB", "中继站");
            let _ = writeln!(s, "   • 状态: ✅ 正在访问");
            let _ = writeln!(s, "   • 位置: {}", store.resolve(category::NODES, &node_key));
            if let Some(parts) = window.parts() {
                let _ = writeln!(s, "   • 剩余时间: {}", parts.fmt_days_hours());
            }
            let _ = writeln!(s, "   • 携带商品: {} 件", trader.manifest.len());
        }
        WindowStatus::Expired => {
            let _ = writeln!(s, "   • 状态:❌ 已离开");
            let _ = writeln!(s, "   • 离开时间: {}", fmt_utc(expiry.unwrap_or_default()));
            if let Some(parts) = window.parts() {
                let _ = writeln!(s, "   • 已离开: {} 天", parts.days);
            }
        }
        WindowStatus::Unknown => {
            let _ = writeln!(s, "📭暂无虚空商人信息");
        }
    }
    s
}

pub fn syndicates_section(doc: &WorldState, store: &MappingStore) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "🏛️ 集团任务:");
    let _ = writeln!(s, "   • 总集团任务: {}", doc.syndicate_missions.len());

    if doc.syndicate_missions.is_empty() {
        let _ = writeln!(s, "📭当前无集团任务");
        return s;
    }

    let active = main_syndicates(&doc.syndicate_missions);
    let _ = writeln!(s, "   • 活跃集团: {}", active.len());

    if active.is_empty() {
        let _ = writeln!(s, "📭当前无活跃集团任务");
        return s;
    }

    for syndicate in active {
        let name = resolve::syndicate_name(store, &syndicate.tag);
        let _ = writeln!(s, "   • {}: {} 个任务", name, syndicate.nodes.len());
        for (i, node) in syndicate.nodes.iter().enumerate() {
            let _ = writeln!(s, "      {}. {}", i + 1, store.resolve(category::NODES, node));
        }
        let _ = writeln!(s);
    }
    s
}

pub fn bounties_section(doc: &WorldState, store: &MappingStore) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "🌍开放世界赏金:");

    let mut has_bounties = false;
    for (tag, location_name) in BOUNTY_LOCATIONS {
        let Some(board) = bounty_board(&doc.syndicate_missions, tag) else {
            continue;
        };
        has_bounties = true;

        let _ = writeln!(s, "   • {}: {} 个赏金", location_name, board.jobs.len());
        for (i, job) in board.jobs.iter().enumerate() {
            let _ = writeln!(
                s,
                "      {}. 等级 {}-{} | {} | 精通等级: {}",
                i + 1,
                job.min_enemy_level,
                job.max_enemy_level,
                resolve::bounty_name(store, &job.job_type),
                job.mastery_req,
            );
        }
        let _ = writeln!(s);
    }

    if !has_bounties {
        let _ = writeln!(s, "📭当前无赏金任务");
    }
    s
}

pub fn nightwave_section(doc: &WorldState, store: &MappingStore) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "🌙午夜电波:");

    let Some(season) = &doc.season_info else {
        let _ = writeln!(s, "📭午夜电波信息不可用");
        return s;
    };

    let (daily, weekly) = split_challenges(&season.active_challenges);

    let _ = writeln!(s, "   • 赛季: {}", season.season);
    let _ = writeln!(s, "   • 阶段: {}", season.phase);

    let _ = writeln!(s, "   • 每日挑战: {} 个", daily.len());
    if daily.is_empty() {
        let _ = writeln!(s, "📭无每日挑战");
    } else {
        for (i, challenge) in daily.iter().enumerate() {
            let _ = writeln!(
                s,
                "      {}. {}",
                i + 1,
                resolve::challenge_name(store, &challenge.challenge)
            );
        }
    }

    let _ = writeln!(s, "   • 每周挑战: {} 个", weekly.len());
    if weekly.is_empty() {
        let _ = writeln!(s, "📭无每周挑战");
    } else {
        for (i, challenge) in weekly.iter().enumerate() {
            let _ = writeln!(
                s,
                "      {}. {}",
                i + 1,
                resolve::challenge_name(store, &challenge.challenge)
            );
        }
    }

    let mapped = store.mapped_count(
        category::DICTIONARY,
        season.active_challenges.iter().map(|c| c.challenge.as_str()),
    );
    let _ = writeln!(
        s,
        "   • 映射状态: {}/{} 个挑战已映射",
        mapped,
        season.active_challenges.len()
    );
    s
}

pub fn railjack_section(doc: &WorldState, store: &MappingStore) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "🚀九重天:");
    let _ = writeln!(s, "   • 虚空风暴: {} 个", doc.void_storms.len());

    if doc.void_storms.is_empty() {
        return s;
    }

    let by_tier = group_by_tier(doc.void_storms.iter(), |st| st.active_mission_tier.as_str());
    for (tier, group) in &by_tier {
        let _ = writeln!(
            s,
            "   • {}: {} 个",
            resolve::modifier_name(store, tier),
            group.len()
        );
        for (i, storm) in group.iter().enumerate() {
            let _ = writeln!(s, "      {}. {}", i + 1, store.resolve(category::NODES, &storm.node));
        }
        let _ = writeln!(s);
    }
    s
}

pub fn archon_section(doc: &WorldState, store: &MappingStore, now: DateTime<Utc>) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "👹刺杀执行官:");

    let Some(hunt) = find_archon_hunt(&doc.lite_sorties) else {
        let _ = writeln!(s, "📭当前无执行官任务");
        return s;
    };

    let _ = writeln!(s, "   • 执行官: {}", resolve::archon_name(store, &hunt.boss));
    let _ = writeln!(s, "   • 阶段数: {}", hunt.missions.len());

    let activation = hunt.activation.millis();
    let window = classify_window(activation, hunt.expiry.millis(), now);
    match window.status {
        WindowStatus::Upcoming => {
            let _ = writeln!(s, "   • 状态: 🕐 即将开始");
            let _ = writeln!(s, "   • 开始时间: {}", fmt_utc(activation.unwrap_or_default()));
            if let Some(parts) = window.parts() {
                let _ = writeln!(s, "   • 距离开始: {}", parts.fmt_days_hours());
            }
        }
        WindowStatus::Active => {
            let _ = writeln!(s, "   • 状态: ✅ 进行中");
            if let Some(parts) = window.parts() {
                let _ = writeln!(s, "   • 剩余时间: {}", parts.fmt_days_hours());
            }
        }
        WindowStatus::Expired => {
            let _ = writeln!(s, "   • 状态: ❌ 已结束");
        }
        WindowStatus::Unknown => {}
    }

    if hunt.missions.is_empty() {
        let _ = writeln!(s, "📭无任务信息");
    } else {
        for (i, mission) in hunt.missions.iter().enumerate() {
            let _ = writeln!(
                s,
                "   {}. {} - {}",
                i + 1,
                store.resolve(category::NODES, &mission.node),
                store.resolve(category::MISSIONS, &mission.mission_type),
            );
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_render_empty_document_prints_every_empty_state() {
        let out = render(&WorldState::default(), &MappingStore::new(), noon());
        for marker in [
            "📭当前无活跃警报",
            "📭当前无进行中入侵",
            "📭当前无中文新闻",
            "📭今日无突击任务",
            "📭当前无活跃裂隙",
            "📭暂无虚空商人信息",
            "📭当前无集团任务",
            "📭当前无赏金任务",
            "📭午夜电波信息不可用",
            "📭当前无执行官任务",
        ] {
            assert!(out.contains(marker), "missing: {marker}");
        }
    }

    #[test]
    fn test_syndicates_empty_states_differ() {
        let store = MappingStore::new();

        let empty = WorldState::default();
        let out = syndicates_section(&empty, &store);
        assert!(out.contains("   • 总集团任务: 0"));
        assert!(out.contains("📭当前无集团任务"));
        assert!(!out.contains("活跃集团"));

        // Boards only, none of the six main factions.
        let mut boards_only = WorldState::default();
        let mut cetus = worldwatch_ingest::SyndicateMission::default();
        cetus.tag = "CetusSyndicate".to_string();
        boards_only.syndicate_missions.push(cetus);

        let out = syndicates_section(&boards_only, &store);
        assert!(out.contains("   • 总集团任务: 1"));
        assert!(out.contains("📭当前无活跃集团任务"));
    }

    #[test]
    fn test_fmt_utc() {
        assert_eq!(fmt_utc(0), "1970-01-01 00:00 UTC");
    }
}
