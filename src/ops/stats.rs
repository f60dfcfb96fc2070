use indexmap::IndexMap;
use serde::Serialize;

use crate::model::episode::Episode;

/// "This Week" summary over the recorded episodes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EpisodeStats {
    pub count: usize,
    pub total_minutes: i64,
}

pub fn episode_stats(episodes: &[Episode]) -> EpisodeStats {
    EpisodeStats {
        count: episodes.len(),
        total_minutes: episodes.iter().map(|e| e.duration).sum(),
    }
}

/// How often each trigger appears across episodes, most frequent first.
/// Ties keep first-seen order.
pub fn trigger_frequency(episodes: &[Episode]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for trigger in episodes.iter().flat_map(|e| e.triggers.iter()) {
        *counts.entry(trigger.as_str()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, n)| (name.to_string(), n))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Mean intensity, or `None` with no episodes
pub fn average_intensity(episodes: &[Episode]) -> Option<f64> {
    if episodes.is_empty() {
        return None;
    }
    let sum: i64 = episodes.iter().map(|e| e.intensity).sum();
    Some(sum as f64 / episodes.len() as f64)
}
