use anyhow::{Result, bail};
use std::path::Path;

pub const EXAMPLE_CHAIN: &str = r#"# Example orcha chain.
# Each step is a named descriptor; the output of one step feeds the next.
initial_input: "i love rust, systems programming and fast tools"

steps:
  - name: clean_text
    params:
      strip_punctuation: true
  - name: summarize
    params:
      max_words: 20
  - name: classify
    params:
      categories:
        - positive
        - negative
        - neutral
"#;

pub fn write_example(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists, not overwriting", path.display());
    }

    std::fs::write(path, EXAMPLE_CHAIN)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use orcha_core::ChainFile;

    #[test]
    fn example_chain_parses_and_validates() {
        let file: ChainFile = serde_yaml::from_str(EXAMPLE_CHAIN).unwrap();
        let (steps, initial) = file.into_steps().unwrap();
        assert_eq!(steps.len(), 3);
        assert!(initial.is_string());
    }

    #[test]
    fn write_example_refuses_to_overwrite() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("chain.yaml");

        write_example(&path).unwrap();
        assert!(write_example(&path).is_err());
    }
}
