use serde::Serialize;

use crate::model::component::SessionComponent;
use crate::model::episode::Episode;
use crate::model::reflection::{ReflectionAnswers, ReflectionField};
use crate::ops::page::{Outcome, Page};
use crate::ops::stats::{self, EpisodeStats};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ChecklistJson {
    pub completed: usize,
    pub total: usize,
    pub ratio: f64,
    pub completed_ids: Vec<u8>,
}

#[derive(Serialize)]
pub struct TriggerCountJson {
    pub trigger: String,
    pub count: usize,
}

#[derive(Serialize)]
pub struct ReplayJson<'a> {
    pub outcomes: &'a [Outcome],
    pub episodes: &'a [Episode],
    pub stats: EpisodeStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_intensity: Option<f64>,
    pub trigger_counts: Vec<TriggerCountJson>,
    pub checklist: ChecklistJson,
    pub reflection: &'a ReflectionAnswers,
}

pub fn replay_to_json<'a>(page: &'a Page, outcomes: &'a [Outcome]) -> ReplayJson<'a> {
    ReplayJson {
        outcomes,
        episodes: page.episodes.episodes(),
        stats: page.episodes.derived_stats(),
        average_intensity: stats::average_intensity(page.episodes.episodes()),
        trigger_counts: stats::trigger_frequency(page.episodes.episodes())
            .into_iter()
            .map(|(trigger, count)| TriggerCountJson { trigger, count })
            .collect(),
        checklist: checklist_to_json(page),
        reflection: page.reflection.answers(),
    }
}

fn checklist_to_json(page: &Page) -> ChecklistJson {
    ChecklistJson {
        completed: page.checklist.completed_count(),
        total: page.checklist.total_count(),
        ratio: page.checklist.progress_ratio(),
        completed_ids: page
            .checklist
            .components()
            .iter()
            .filter(|c| c.completed)
            .map(|c| c.id)
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `[✓] 1 ⚓ Anchoring (5 min)` plus indented checklist steps
pub fn format_component(comp: &SessionComponent) -> Vec<String> {
    let mark = if comp.completed { "[\u{2713}]" } else { "[ ]" };
    let mut lines = vec![
        format!(
            "{} {} {} {} ({})",
            mark,
            comp.id,
            comp.kind.icon(),
            comp.title,
            comp.duration
        ),
        format!("    {}", comp.description),
    ];
    if let Some(items) = comp.checklist() {
        for (i, item) in items.iter().enumerate() {
            lines.push(format!("    {}. {}", i + 1, item));
        }
    }
    lines
}

pub fn format_episode(episode: &Episode) -> Vec<String> {
    let triggers: Vec<&str> = episode.triggers.iter().map(|s| s.as_str()).collect();
    let mut lines = vec![
        format!(
            "#{}  {} {}  {}min  intensity {}/10",
            episode.id, episode.date, episode.time, episode.duration, episode.intensity
        ),
        format!("    {}", episode.description),
        format!("    triggers: {}", triggers.join(", ")),
    ];
    if !episode.emotional_state_before.is_empty() || !episode.emotional_state_after.is_empty() {
        lines.push(format!(
            "    before: {}  after: {}",
            episode.emotional_state_before, episode.emotional_state_after
        ));
    }
    lines
}

pub fn format_outcome(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Updated => None,
        Outcome::EpisodeRecorded { id } => Some(format!("recorded episode {}", id)),
        Outcome::EpisodeRejected {
            missing_description,
            missing_triggers,
        } => {
            let mut missing = Vec::new();
            if *missing_description {
                missing.push("description");
            }
            if *missing_triggers {
                missing.push("triggers");
            }
            Some(format!("episode not recorded (missing {})", missing.join(", ")))
        }
        Outcome::ComponentToggled { id, completed } => Some(format!(
            "component {} {}",
            id,
            if *completed { "done" } else { "not done" }
        )),
        Outcome::ComponentNotFound { id } => Some(format!("no component {}", id)),
        Outcome::ReflectionSaved => Some("reflection saved".to_string()),
    }
}

pub fn format_reflection(answers: &ReflectionAnswers) -> Vec<String> {
    let mut lines = Vec::new();
    for field in ReflectionField::ALL {
        let answer = answers.get(field);
        lines.push(field.prompt().to_string());
        lines.push(format!(
            "    {}",
            if answer.is_empty() { "-" } else { answer }
        ));
    }
    lines
}

pub fn format_replay_summary(page: &Page) -> Vec<String> {
    let episodes = page.episodes.episodes();
    let totals = page.episodes.derived_stats();
    let mut lines = vec![format!(
        "Episodes: {}  Total minutes: {}",
        totals.count, totals.total_minutes
    )];
    if let Some(avg) = stats::average_intensity(episodes) {
        let top: Vec<String> = stats::trigger_frequency(episodes)
            .into_iter()
            .take(3)
            .map(|(name, n)| format!("{} ({})", name, n))
            .collect();
        lines.push(format!("Average intensity: {:.1}", avg));
        lines.push(format!("Top triggers: {}", top.join(", ")));
    }
    for episode in episodes {
        lines.extend(format_episode(episode));
    }
    lines.push(String::new());
    lines.push(format!(
        "Components: {} of {} completed",
        page.checklist.completed_count(),
        page.checklist.total_count()
    ));
    for comp in page.checklist.components() {
        let mark = if comp.completed { "[\u{2713}]" } else { "[ ]" };
        lines.push(format!("{} {} {}", mark, comp.id, comp.title));
    }
    lines.push(String::new());
    lines.push("Reflection:".to_string());
    lines.extend(format_reflection(page.reflection.answers()).into_iter().map(|l| format!("  {}", l)));
    lines
}
