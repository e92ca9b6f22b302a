pub mod classifier;
pub mod emotion;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod retry;
pub mod trigger;
