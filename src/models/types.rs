use serde::{Deserialize, Serialize};

/// Role of a message in a chat completion request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
        }
    }
}

/// A single role-tagged message. Content is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Ordered message sequence for one completion call.
///
/// At most one system message, and only in first position. The only way to
/// build one is [`CompletionRequest::new`], which upholds that ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// System message first if provided, then a single user message.
    /// An empty system prompt counts as absent.
    pub fn new(prompt: impl Into<String>, system_prompt: Option<&str>) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_prompt.filter(|s| !s.is_empty()) {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(prompt));
        Self { messages }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

/// Sampling parameters sent alongside every request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Token usage statistics. `total_tokens` is always the sum of the other two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

impl TokenUsage {
    /// `None` if the total does not fit in a `u64`
    pub fn new(prompt_tokens: u64, completion_tokens: u64) -> Option<Self> {
        Some(Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.checked_add(completion_tokens)?,
        })
    }
}

/// Raw completion as decoded from the provider, before normalization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderResponse {
    /// Text of each returned choice, in provider order. `None` for null content.
    pub choices: Vec<Option<String>>,
    /// Usage block as reported, if any
    pub usage: Option<ReportedUsage>,
}

/// Usage counters exactly as the provider reported them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ReportedUsage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}
