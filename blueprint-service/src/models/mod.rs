pub mod answers;
pub mod blueprint;

pub use answers::AnswerRecord;
pub use blueprint::{BlueprintResponse, MessageResponse};
