use std::fmt;

use chrono::{DateTime, Local};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Intensity a draft starts at, and the fallback when none is set at commit time
pub const DEFAULT_INTENSITY: i64 = 5;

/// Unique, strictly increasing episode identifier (epoch milliseconds at creation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(pub u64);

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded mind wandering episode. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: EpisodeId,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24h
    pub time: String,
    /// Minutes
    pub duration: i64,
    pub intensity: i64,
    pub triggers: IndexSet<String>,
    pub description: String,
    pub emotional_state_before: String,
    pub emotional_state_after: String,
    pub task_impact: String,
    pub action_taken: String,
}

/// One editable field of the draft episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Date,
    Time,
    Duration,
    Intensity,
    Description,
    EmotionalStateBefore,
    EmotionalStateAfter,
    TaskImpact,
    ActionTaken,
}

impl DraftField {
    /// Form order, top to bottom
    pub const ALL: [DraftField; 9] = [
        DraftField::Date,
        DraftField::Time,
        DraftField::Duration,
        DraftField::Intensity,
        DraftField::Description,
        DraftField::EmotionalStateBefore,
        DraftField::EmotionalStateAfter,
        DraftField::TaskImpact,
        DraftField::ActionTaken,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Date => "Date",
            DraftField::Time => "Time",
            DraftField::Duration => "Duration (minutes)",
            DraftField::Intensity => "Intensity (1-10)",
            DraftField::Description => "Episode Description",
            DraftField::EmotionalStateBefore => "Emotional State Before",
            DraftField::EmotionalStateAfter => "Emotional State After",
            DraftField::TaskImpact => "Impact on Task/Activity",
            DraftField::ActionTaken => "Action Taken to Refocus",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            DraftField::Description => {
                "Describe what happened during this mind wandering episode..."
            }
            DraftField::EmotionalStateBefore => "e.g., anxious, bored, excited",
            DraftField::EmotionalStateAfter => "e.g., calm, inspired, confused",
            DraftField::TaskImpact => "How did it affect your work?",
            DraftField::ActionTaken => "What helped you return to focus?",
            _ => "",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, DraftField::Duration | DraftField::Intensity)
    }
}

/// The in-progress episode. Every field may be absent; absent fields take
/// their defaults when the draft is committed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeDraft {
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<i64>,
    pub intensity: Option<i64>,
    #[serde(default)]
    pub triggers: IndexSet<String>,
    pub description: Option<String>,
    pub emotional_state_before: Option<String>,
    pub emotional_state_after: Option<String>,
    pub task_impact: Option<String>,
    pub action_taken: Option<String>,
}

impl EpisodeDraft {
    /// A fresh draft stamped with the given local time
    pub fn fresh_at(now: DateTime<Local>) -> Self {
        EpisodeDraft {
            date: Some(now.format("%Y-%m-%d").to_string()),
            time: Some(now.format("%H:%M").to_string()),
            duration: Some(0),
            intensity: Some(DEFAULT_INTENSITY),
            ..Default::default()
        }
    }

    /// A fresh draft stamped with the current local time
    pub fn fresh() -> Self {
        Self::fresh_at(Local::now())
    }

    /// Current text for a field, or `""` when absent
    pub fn text(&self, field: DraftField) -> String {
        let s = match field {
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::Duration => {
                return self.duration.map(|d| d.to_string()).unwrap_or_default();
            }
            DraftField::Intensity => {
                return self.intensity.map(|i| i.to_string()).unwrap_or_default();
            }
            DraftField::Description => &self.description,
            DraftField::EmotionalStateBefore => &self.emotional_state_before,
            DraftField::EmotionalStateAfter => &self.emotional_state_after,
            DraftField::TaskImpact => &self.task_impact,
            DraftField::ActionTaken => &self.action_taken,
        };
        s.clone().unwrap_or_default()
    }

    pub(crate) fn text_slot_mut(&mut self, field: DraftField) -> Option<&mut Option<String>> {
        match field {
            DraftField::Date => Some(&mut self.date),
            DraftField::Time => Some(&mut self.time),
            DraftField::Description => Some(&mut self.description),
            DraftField::EmotionalStateBefore => Some(&mut self.emotional_state_before),
            DraftField::EmotionalStateAfter => Some(&mut self.emotional_state_after),
            DraftField::TaskImpact => Some(&mut self.task_impact),
            DraftField::ActionTaken => Some(&mut self.action_taken),
            DraftField::Duration | DraftField::Intensity => None,
        }
    }

    /// Whether the draft passes the commit guard
    pub fn is_committable(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty()) && !self.triggers.is_empty()
    }
}

/// Lenient integer parse: leading whitespace is skipped, an optional sign is
/// honored and trailing junk is ignored. Out-of-range digits saturate.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let digits = &rest[..digits_end];
    let value = if negative {
        format!("-{}", digits).parse().unwrap_or(i64::MIN)
    } else {
        digits.parse().unwrap_or(i64::MAX)
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fresh_draft_defaults() {
        let now = Local.with_ymd_and_hms(2025, 3, 9, 14, 5, 30).unwrap();
        let draft = EpisodeDraft::fresh_at(now);
        assert_eq!(draft.date.as_deref(), Some("2025-03-09"));
        assert_eq!(draft.time.as_deref(), Some("14:05"));
        assert_eq!(draft.duration, Some(0));
        assert_eq!(draft.intensity, Some(5));
        assert!(draft.triggers.is_empty());
        assert!(draft.description.is_none());
        assert!(!draft.is_committable());
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("15"), Some(15));
        assert_eq!(parse_leading_int("  7min"), Some(7));
        assert_eq!(parse_leading_int("+3"), Some(3));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int(" -12 min"), Some(-12));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999"), Some(99_999_999_999));
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_draft_text() {
        let mut draft = EpisodeDraft::default();
        assert_eq!(draft.text(DraftField::Description), "");
        assert_eq!(draft.text(DraftField::Duration), "");
        draft.duration = Some(12);
        draft.task_impact = Some("lost the thread".into());
        assert_eq!(draft.text(DraftField::Duration), "12");
        assert_eq!(draft.text(DraftField::TaskImpact), "lost the thread");
    }

    #[test]
    fn test_committable_requires_description_and_trigger() {
        let mut draft = EpisodeDraft::default();
        draft.description = Some(String::new());
        draft.triggers.insert("Boredom".into());
        assert!(!draft.is_committable());
        draft.description = Some("drifted".into());
        assert!(draft.is_committable());
        draft.triggers.clear();
        assert!(!draft.is_committable());
    }

    #[test]
    fn test_episode_serializes_camel_case() {
        let mut triggers = IndexSet::new();
        triggers.insert("Fatigue".to_string());
        let ep = Episode {
            id: EpisodeId(42),
            date: "2025-03-09".into(),
            time: "09:30".into(),
            duration: 10,
            intensity: 6,
            triggers,
            description: "x".into(),
            emotional_state_before: "tired".into(),
            emotional_state_after: String::new(),
            task_impact: String::new(),
            action_taken: String::new(),
        };
        let json = serde_json::to_value(&ep).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["emotionalStateBefore"], "tired");
        assert_eq!(json["triggers"][0], "Fatigue");
    }
}
