/// Common triggers offered as toggle buttons on the episode form, in display order.
pub const COMMON_TRIGGERS: [&str; 10] = [
    "Stress/Anxiety",
    "Boredom",
    "Fatigue",
    "Repetitive Task",
    "Noise/Distractions",
    "Emotional State",
    "Physical Discomfort",
    "Transition Between Tasks",
    "Waiting/Idle Time",
    "Creative Block",
];

/// Whether `name` is one of the predefined trigger labels.
pub fn is_common_trigger(name: &str) -> bool {
    COMMON_TRIGGERS.contains(&name)
}
