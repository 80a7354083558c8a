use crate::chains::{self, ChainStep};
use crate::tools::ToolRegistry;
use crate::traits::{ChatMessage, Provider};
use serde_json::Value;
use std::sync::Arc;

pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Per-request knobs for `ask_with`. `None` falls back to the model's own
/// defaults.
#[derive(Debug, Clone)]
pub struct AskOptions {
    pub use_tools: bool,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

impl Default for AskOptions {
    fn default() -> Self {
        Self {
            use_tools: true,
            max_tokens: None,
            temperature: None,
        }
    }
}

/// Caller-facing facade over one remote model: a provider, a tool registry,
/// and the chain executor.
pub struct ChatModel {
    provider: Arc<dyn Provider>,
    model: String,
    pub tools: ToolRegistry,
    max_tokens: u32,
    temperature: f64,
}

impl ChatModel {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            tools: ToolRegistry::new(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn ask(&self, prompt: &str) -> String {
        self.ask_with(prompt, &AskOptions::default()).await
    }

    /// Sends one prompt, prefixing the combined system prompt when tools are
    /// in use. Transport failures come back as a readable error string, not
    /// an `Err` — chain execution keeps the opposite contract.
    pub async fn ask_with(&self, prompt: &str, options: &AskOptions) -> String {
        let mut messages = Vec::with_capacity(2);
        let mut tools_used = false;

        if options.use_tools && !self.tools.is_empty() {
            messages.push(ChatMessage::system(self.tools.combined_system_prompt()));
            tools_used = true;
        }
        messages.push(ChatMessage::user(prompt));

        let result = self
            .provider
            .chat(
                &messages,
                &self.model,
                options.max_tokens.unwrap_or(self.max_tokens),
                options.temperature.unwrap_or(self.temperature),
            )
            .await;

        match result {
            Ok(text) if tools_used => {
                format!(
                    "[Using tools: {}] {}",
                    self.tools.active_tool_names().join(", "),
                    text
                )
            }
            Ok(text) => text,
            Err(e) => format!("Error: request to model '{}' failed: {}", self.model, e),
        }
    }

    /// Pure delegation to the chain executor; step errors propagate as-is.
    pub fn execute_chain(&self, steps: &[ChainStep], initial_input: Value) -> anyhow::Result<Value> {
        chains::execute_chain(steps, initial_input)
    }
}
