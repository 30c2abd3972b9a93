pub mod blueprint;
pub mod markup;
pub mod metrics;
pub mod prompt;
pub mod providers;

pub use blueprint::{BlueprintError, BlueprintGenerator};
