pub mod file;

pub use file::ChainFile;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub type StepFn = Box<dyn Fn(Value) -> anyhow::Result<Value> + Send + Sync>;

/// One step in a chain. The variant is fixed at construction time, so the
/// executor never has to inspect a step's runtime shape.
pub enum ChainStep {
    /// A caller-supplied transformation. The executor only invokes it.
    Function(StepFn),
    /// A declarative `{name, params}` record. Rendered as a diagnostic
    /// placeholder until named handlers exist.
    Descriptor(StepDescriptor),
}

impl std::fmt::Debug for ChainStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Function(_) => f.debug_tuple("Function").finish(),
            Self::Descriptor(d) => f.debug_tuple("Descriptor").field(d).finish(),
        }
    }
}

impl ChainStep {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self::Function(Box::new(f))
    }

    pub fn descriptor(name: impl Into<String>, params: Map<String, Value>) -> Self {
        Self::Descriptor(StepDescriptor {
            name: name.into(),
            params,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StepDescriptor {
    #[serde(default = "default_step_name")]
    pub name: String,
    #[serde(default)]
    pub params: Map<String, Value>,
}

fn default_step_name() -> String {
    "unknown".to_string()
}

impl StepDescriptor {
    fn render(&self, input: &Value) -> String {
        format!(
            "Executed step '{}' with params {} and input {}",
            self.name,
            Value::Object(self.params.clone()),
            render_input(input),
        )
    }
}

// Strings render bare so placeholders stay readable; everything else as JSON.
fn render_input(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("unsupported step at index {index}: expected a '{{name, params}}' mapping, found {found}")]
    UnsupportedStep { index: usize, found: String },
}

/// Runs the steps in order, threading a single value left to right.
///
/// Function-step failures propagate to the caller unmodified; descriptor
/// steps cannot fail. An empty chain returns `initial_input` unchanged.
pub fn execute_chain(steps: &[ChainStep], initial_input: Value) -> anyhow::Result<Value> {
    let mut current = initial_input;
    for step in steps {
        current = match step {
            ChainStep::Function(f) => f(current)?,
            ChainStep::Descriptor(descriptor) => Value::String(descriptor.render(&current)),
        };
    }
    Ok(current)
}
