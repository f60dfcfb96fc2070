use serde::{Deserialize, Serialize};

/// Answers to the weekly reflection questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionAnswers {
    pub what_brought_back: String,
    pub patterns_noticed: String,
    pub strategies_worked: String,
    pub goals_next_week: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReflectionField {
    WhatBroughtBack,
    PatternsNoticed,
    StrategiesWorked,
    GoalsNextWeek,
}

impl ReflectionField {
    pub const ALL: [ReflectionField; 4] = [
        ReflectionField::WhatBroughtBack,
        ReflectionField::PatternsNoticed,
        ReflectionField::StrategiesWorked,
        ReflectionField::GoalsNextWeek,
    ];

    pub fn prompt(self) -> &'static str {
        match self {
            ReflectionField::WhatBroughtBack => "What brought you back to focus?",
            ReflectionField::PatternsNoticed => "Patterns noticed this week?",
            ReflectionField::StrategiesWorked => "Strategies that worked best?",
            ReflectionField::GoalsNextWeek => "Goals for next week?",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ReflectionField::WhatBroughtBack => {
                "Describe the techniques or circumstances that helped you refocus..."
            }
            ReflectionField::PatternsNoticed => {
                "What patterns do you notice in your mind wandering episodes?"
            }
            ReflectionField::StrategiesWorked => {
                "Which approaches were most effective for managing mind wandering?"
            }
            ReflectionField::GoalsNextWeek => {
                "What would you like to focus on or improve next week?"
            }
        }
    }
}

impl ReflectionAnswers {
    pub fn get(&self, field: ReflectionField) -> &str {
        match field {
            ReflectionField::WhatBroughtBack => &self.what_brought_back,
            ReflectionField::PatternsNoticed => &self.patterns_noticed,
            ReflectionField::StrategiesWorked => &self.strategies_worked,
            ReflectionField::GoalsNextWeek => &self.goals_next_week,
        }
    }

    pub fn get_mut(&mut self, field: ReflectionField) -> &mut String {
        match field {
            ReflectionField::WhatBroughtBack => &mut self.what_brought_back,
            ReflectionField::PatternsNoticed => &mut self.patterns_noticed,
            ReflectionField::StrategiesWorked => &mut self.strategies_worked,
            ReflectionField::GoalsNextWeek => &mut self.goals_next_week,
        }
    }
}
