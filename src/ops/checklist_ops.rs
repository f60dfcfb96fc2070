use crate::model::component::{SessionComponent, session_components};

/// The five session components and their completion flags
#[derive(Debug, Clone)]
pub struct ComponentChecklist {
    components: Vec<SessionComponent>,
}

impl Default for ComponentChecklist {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentChecklist {
    pub fn new() -> Self {
        ComponentChecklist {
            components: session_components(),
        }
    }

    pub fn components(&self) -> &[SessionComponent] {
        &self.components
    }

    pub fn get(&self, id: u8) -> Option<&SessionComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Flip the completion flag of component `id`. Returns false if no component has that id.
    pub fn toggle_completion(&mut self, id: u8) -> bool {
        match self.components.iter_mut().find(|c| c.id == id) {
            Some(comp) => {
                comp.completed = !comp.completed;
                tracing::debug!(
                    id,
                    kind = comp.kind.as_str(),
                    completed = comp.completed,
                    "component toggled"
                );
                true
            }
            None => false,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.components.iter().filter(|c| c.completed).count()
    }

    pub fn total_count(&self) -> usize {
        self.components.len()
    }

    /// Completed share in [0, 1], for display
    pub fn progress_ratio(&self) -> f64 {
        if self.components.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.total_count() as f64
    }
}
