//! Reading requests and deterministic prompt assembly.

mod prompt;
mod request;

pub use prompt::{assemble_reading_prompt, AssembledPrompt, PromptError};
pub use request::{DrawnCard, ReadingRequest};
