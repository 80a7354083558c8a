use super::{ChainError, ChainStep, StepDescriptor};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// A declarative chain document: optional `initial_input` plus an ordered
/// list of descriptor records.
#[derive(Debug, Deserialize)]
pub struct ChainFile {
    #[serde(default)]
    pub initial_input: Option<Value>,
    #[serde(default)]
    pub steps: Vec<Value>,
}

impl ChainFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read chain file {}", path.display()))?;

        let file: ChainFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse chain file {}", path.display()))?;

        tracing::debug!("Loaded chain file {} ({} steps)", path.display(), file.steps.len());

        Ok(file)
    }

    /// Validates every raw step into a descriptor. A step that is not a
    /// `{name, params}` mapping is rejected here, before anything runs.
    pub fn into_steps(self) -> Result<(Vec<ChainStep>, Value), ChainError> {
        let mut steps = Vec::with_capacity(self.steps.len());

        for (index, raw) in self.steps.into_iter().enumerate() {
            let found = shape_of(&raw).to_string();
            match raw {
                Value::Object(map) => {
                    let descriptor: StepDescriptor =
                        serde_json::from_value(Value::Object(map))
                            .map_err(|_| ChainError::UnsupportedStep { index, found })?;
                    steps.push(ChainStep::Descriptor(descriptor));
                }
                _ => return Err(ChainError::UnsupportedStep { index, found }),
            }
        }

        Ok((steps, self.initial_input.unwrap_or(Value::Null)))
    }
}

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::execute_chain;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_chain(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_initial_input_and_steps() {
        let file = write_chain(
            "initial_input: \"Test Initial Data\"\nsteps:\n  - name: step1\n    params:\n      key: value\n  - name: step2\n",
        );

        let chain = ChainFile::load(file.path()).unwrap();
        let (steps, initial) = chain.into_steps().unwrap();

        assert_eq!(steps.len(), 2);
        assert_eq!(initial, json!("Test Initial Data"));

        let result = execute_chain(&steps, initial).unwrap();
        let text = result.as_str().unwrap();
        assert!(text.contains("'step2'"));
        assert!(text.contains("Test Initial Data"));
    }

    #[test]
    fn missing_initial_input_defaults_to_null() {
        let file = write_chain("steps:\n- name: only\n");
        let (steps, initial) = ChainFile::load(file.path()).unwrap().into_steps().unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(initial, Value::Null);
    }

    #[test]
    fn step_without_name_defaults_to_unknown() {
        let file = write_chain("steps:\n- params:\n    k: 1\n");
        let (steps, initial) = ChainFile::load(file.path()).unwrap().into_steps().unwrap();

        let result = execute_chain(&steps, initial).unwrap();
        assert!(result.as_str().unwrap().contains("'unknown'"));
    }

    #[test]
    fn non_mapping_step_is_rejected_with_index_and_shape() {
        let file = write_chain("steps:\n- name: ok\n- just a string\n");
        let err = ChainFile::load(file.path()).unwrap().into_steps().unwrap_err();

        match err {
            ChainError::UnsupportedStep { index, ref found } => {
                assert_eq!(index, 1);
                assert_eq!(found, "string");
            }
        }
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn empty_document_yields_empty_chain() {
        let file = write_chain("{}\n");
        let (steps, initial) = ChainFile::load(file.path()).unwrap().into_steps().unwrap();
        assert!(steps.is_empty());
        assert_eq!(initial, Value::Null);
    }
}
