// Gateway module for LLM orchestration - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod career;
mod llm;
mod prompts;
mod result;

// Public re-exports - the ONLY way to access LLM functionality
pub use career::{CareerAnalysis, InterviewQuestions, LearningPath};
pub use llm::LlmGateway;
pub use prompts::InterviewLevel;
pub use result::{CompletionResult, GatewayError};
