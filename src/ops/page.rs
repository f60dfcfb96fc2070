use serde::{Deserialize, Serialize};

use crate::model::episode::{DraftField, EpisodeId};
use crate::model::reflection::ReflectionField;
use crate::ops::checklist_ops::ComponentChecklist;
use crate::ops::episode_ops::{EpisodeStore, ValidationFailure};
use crate::ops::reflection_ops::{ReflectionForm, ReflectionSink, SinkError};

/// One user mutation on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    UpdateDraft { field: DraftField, value: String },
    ToggleTrigger { name: String },
    CommitEpisode,
    ToggleComponent { id: u8 },
    UpdateReflection { field: ReflectionField, value: String },
    SaveReflection,
}

/// What applying an [`Action`] did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Updated,
    EpisodeRecorded { id: EpisodeId },
    EpisodeRejected {
        missing_description: bool,
        missing_triggers: bool,
    },
    ComponentToggled { id: u8, completed: bool },
    ComponentNotFound { id: u8 },
    ReflectionSaved,
}

impl From<ValidationFailure> for Outcome {
    fn from(f: ValidationFailure) -> Self {
        Outcome::EpisodeRejected {
            missing_description: f.missing_description,
            missing_triggers: f.missing_triggers,
        }
    }
}

/// All state of the week 2 page. Created fresh on entry, dropped on exit.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub episodes: EpisodeStore,
    pub checklist: ComponentChecklist,
    pub reflection: ReflectionForm,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action. Only `SaveReflection` can fail, and only through the sink.
    pub fn apply(
        &mut self,
        action: Action,
        sink: &mut dyn ReflectionSink,
    ) -> Result<Outcome, SinkError> {
        let outcome = match action {
            Action::UpdateDraft { field, value } => {
                self.episodes.update_draft_field(field, &value);
                Outcome::Updated
            }
            Action::ToggleTrigger { name } => {
                self.episodes.toggle_trigger(&name);
                Outcome::Updated
            }
            Action::CommitEpisode => match self.episodes.commit_episode() {
                Ok(id) => Outcome::EpisodeRecorded { id },
                Err(failure) => failure.into(),
            },
            Action::ToggleComponent { id } => {
                if self.checklist.toggle_completion(id) {
                    let completed = self.checklist.get(id).is_some_and(|c| c.completed);
                    Outcome::ComponentToggled { id, completed }
                } else {
                    Outcome::ComponentNotFound { id }
                }
            }
            Action::UpdateReflection { field, value } => {
                self.reflection.update_field(field, &value);
                Outcome::Updated
            }
            Action::SaveReflection => {
                self.reflection.save(sink)?;
                Outcome::ReflectionSaved
            }
        };
        Ok(outcome)
    }
}
