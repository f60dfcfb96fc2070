pub mod checklist_ops;
pub mod episode_ops;
pub mod page;
pub mod reflection_ops;
pub mod stats;
