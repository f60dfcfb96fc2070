use chrono::{DateTime, Local};

use crate::model::episode::{
    DEFAULT_INTENSITY, DraftField, Episode, EpisodeDraft, EpisodeId, parse_leading_int,
};
use crate::model::trigger::is_common_trigger;
use crate::ops::stats::{EpisodeStats, episode_stats};

/// Why a draft was not committed. State is unchanged when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("episode not recorded: description or triggers missing")]
pub struct ValidationFailure {
    pub missing_description: bool,
    pub missing_triggers: bool,
}

/// Recorded episodes plus the draft under edit
#[derive(Debug, Clone)]
pub struct EpisodeStore {
    episodes: Vec<Episode>,
    draft: EpisodeDraft,
    last_id: u64,
}

impl Default for EpisodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EpisodeStore {
    pub fn new() -> Self {
        EpisodeStore {
            episodes: Vec::new(),
            draft: EpisodeDraft::fresh(),
            last_id: 0,
        }
    }

    /// Recorded episodes in entry order
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn draft(&self) -> &EpisodeDraft {
        &self.draft
    }

    /// Set one draft field from text. Numeric fields are parsed leniently;
    /// unparsable numeric input clears the field.
    pub fn update_draft_field(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Duration => self.draft.duration = parse_leading_int(value),
            DraftField::Intensity => self.draft.intensity = parse_leading_int(value),
            _ => {
                if let Some(slot) = self.draft.text_slot_mut(field) {
                    *slot = Some(value.to_string());
                }
            }
        }
    }

    pub fn set_duration(&mut self, minutes: i64) {
        self.draft.duration = Some(minutes);
    }

    pub fn set_intensity(&mut self, intensity: i64) {
        self.draft.intensity = Some(intensity);
    }

    /// Add `name` to the draft's triggers, or remove it if already present.
    /// Names outside the common vocabulary are accepted.
    pub fn toggle_trigger(&mut self, name: &str) {
        if !is_common_trigger(name) {
            tracing::debug!(trigger = name, "trigger outside the common list");
        }
        if !self.draft.triggers.shift_remove(name) {
            self.draft.triggers.insert(name.to_string());
        }
    }

    /// Commit the draft if it has a description and at least one trigger.
    pub fn commit_episode(&mut self) -> Result<EpisodeId, ValidationFailure> {
        self.commit_episode_at(Local::now())
    }

    /// Commit using `now` for the id and the reset draft's date/time
    pub fn commit_episode_at(&mut self, now: DateTime<Local>) -> Result<EpisodeId, ValidationFailure> {
        if !self.draft.is_committable() {
            let failure = ValidationFailure {
                missing_description: self.draft.description.as_deref().is_none_or(str::is_empty),
                missing_triggers: self.draft.triggers.is_empty(),
            };
            tracing::debug!(?failure, "draft not committed");
            return Err(failure);
        }

        let id = self.next_id(now);
        let draft = std::mem::replace(&mut self.draft, EpisodeDraft::fresh_at(now));
        let episode = Episode {
            id,
            date: draft.date.unwrap_or_default(),
            time: draft.time.unwrap_or_default(),
            duration: draft.duration.unwrap_or(0),
            intensity: draft
                .intensity
                .filter(|&i| i != 0)
                .unwrap_or(DEFAULT_INTENSITY),
            triggers: draft.triggers,
            description: draft.description.unwrap_or_default(),
            emotional_state_before: draft.emotional_state_before.unwrap_or_default(),
            emotional_state_after: draft.emotional_state_after.unwrap_or_default(),
            task_impact: draft.task_impact.unwrap_or_default(),
            action_taken: draft.action_taken.unwrap_or_default(),
        };
        tracing::debug!(%id, duration = episode.duration, "episode recorded");
        self.episodes.push(episode);
        Ok(id)
    }

    /// Count and total minutes, recomputed from the list on every call
    pub fn derived_stats(&self) -> EpisodeStats {
        episode_stats(&self.episodes)
    }

    fn next_id(&mut self, now: DateTime<Local>) -> EpisodeId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        self.last_id = millis.max(self.last_id + 1);
        EpisodeId(self.last_id)
    }
}
