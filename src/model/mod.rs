pub mod component;
pub mod config;
pub mod episode;
pub mod reflection;
pub mod trigger;

pub use component::*;
pub use config::*;
pub use episode::*;
pub use reflection::*;
pub use trigger::*;
