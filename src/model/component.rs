use serde::{Deserialize, Serialize};

/// Phase of the week's guided exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Anchoring,
    Context,
    MainExercise,
    SenseMaking,
    TakeAways,
}

impl ComponentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Anchoring => "anchoring",
            ComponentKind::Context => "context",
            ComponentKind::MainExercise => "main-exercise",
            ComponentKind::SenseMaking => "sense-making",
            ComponentKind::TakeAways => "take-aways",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ComponentKind::Anchoring => "\u{2693}",
            ComponentKind::Context => "\u{1F30D}",
            ComponentKind::MainExercise => "\u{1F3AF}",
            ComponentKind::SenseMaking => "\u{1F914}",
            ComponentKind::TakeAways => "\u{1F4A1}",
        }
    }
}

/// Extra payload carried by a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentContent {
    /// Ordered preparation steps
    Checklist(Vec<String>),
}

/// One of the five fixed session components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionComponent {
    pub id: u8,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Display string, e.g. "15 min"
    pub duration: String,
    pub description: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ComponentContent>,
}

impl SessionComponent {
    pub fn checklist(&self) -> Option<&[String]> {
        match &self.content {
            Some(ComponentContent::Checklist(items)) => Some(items),
            None => None,
        }
    }
}

/// Id of the component emphasized as the starting point. Emphasis only; nothing is gated on it.
pub const DEFAULT_ACTIVE_COMPONENT: u8 = 1;

const ANCHORING_CHECKLIST: [&str; 5] = [
    "Find a natural setting (park, garden, beach, or even a tree-lined street)",
    "Set aside 20 uninterrupted minutes",
    "After reading the instructions and downloading the audio we recommend switching your phone to airplane mode",
    "Bring headphones",
    "Approach with curiosity, not expectations",
];

/// (id, title, kind, duration, description)
const COMPONENT_TABLE: [(u8, &str, ComponentKind, &str, &str); 5] = [
    (
        1,
        "Anchoring",
        ComponentKind::Anchoring,
        "5 min",
        "Ground yourself in the present moment. Begin each session with conscious breathing and body awareness to create a stable foundation for the creative process.",
    ),
    (
        2,
        "Context",
        ComponentKind::Context,
        "15 min",
        "Understanding the science and purpose behind mind wandering in creative practice.",
    ),
    (
        3,
        "Main Exercise",
        ComponentKind::MainExercise,
        "25 min",
        "Guided mind wandering practice with audio support and structured reflection.",
    ),
    (
        4,
        "Sense Making",
        ComponentKind::SenseMaking,
        "10 min",
        "Reflect on your wandering experience and identify patterns and insights.",
    ),
    (
        5,
        "Take-Aways",
        ComponentKind::TakeAways,
        "5 min",
        "Integrate learnings and plan your ongoing mind wandering practice.",
    ),
];

/// Build the five session components, all incomplete
pub fn session_components() -> Vec<SessionComponent> {
    COMPONENT_TABLE
        .iter()
        .map(|&(id, title, kind, duration, description)| SessionComponent {
            id,
            title: title.to_string(),
            kind,
            duration: duration.to_string(),
            description: description.to_string(),
            completed: false,
            content: (kind == ComponentKind::Anchoring).then(|| {
                ComponentContent::Checklist(
                    ANCHORING_CHECKLIST.iter().map(|s| s.to_string()).collect(),
                )
            }),
        })
        .collect()
}
