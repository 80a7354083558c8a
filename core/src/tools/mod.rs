pub mod templates;

pub use templates::ToolOptions;

use std::collections::HashMap;

/// Named system-prompt fragments, combined into a single instruction prefix.
///
/// Fragments are keyed by tool name; the order tools were first configured is
/// tracked separately and drives both `active_tool_names` and the join order
/// of `combined_system_prompt`. Re-configuring a tool replaces its fragment
/// in place without moving it.
pub struct ToolRegistry {
    fragments: HashMap<String, String>,
    order: Vec<String>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            fragments: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Renders the built-in template for `name` ("chatbot", "prediction", or
    /// the generic fallback for anything else) and stores it. Cannot fail;
    /// unset options take their documented defaults.
    pub fn configure(&mut self, name: &str, options: &ToolOptions) -> &mut Self {
        let fragment = match name {
            "chatbot" => templates::chatbot(options),
            "prediction" => templates::prediction(options),
            other => templates::generic(other, options),
        };

        if !self.fragments.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.fragments.insert(name.to_string(), fragment);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.fragments.clear();
        self.order.clear();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// All active fragments joined by a blank line, in first-configured
    /// order. Empty string when no tools are active.
    pub fn combined_system_prompt(&self) -> String {
        self.order
            .iter()
            .filter_map(|name| self.fragments.get(name))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Tool names in first-configured order. Returns an owned copy.
    pub fn active_tool_names(&self) -> Vec<String> {
        self.order.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_has_empty_prompt() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.combined_system_prompt(), "");
        assert!(registry.active_tool_names().is_empty());
    }

    #[test]
    fn clear_empties_everything() {
        let mut registry = ToolRegistry::new();
        registry
            .configure("chatbot", &ToolOptions::default())
            .configure("prediction", &ToolOptions::default())
            .clear();

        assert!(registry.is_empty());
        assert_eq!(registry.combined_system_prompt(), "");
        assert!(registry.active_tool_names().is_empty());
    }

    #[test]
    fn reconfigure_replaces_fragment_and_keeps_position() {
        let mut registry = ToolRegistry::new();
        registry.configure(
            "chatbot",
            &ToolOptions::default().with_personality("formal"),
        );
        registry.configure("prediction", &ToolOptions::default());
        registry.configure(
            "chatbot",
            &ToolOptions::default().with_personality("pirate"),
        );

        assert_eq!(registry.active_tool_names(), vec!["chatbot", "prediction"]);
        let prompt = registry.combined_system_prompt();
        assert!(prompt.contains("pirate"));
        assert!(!prompt.contains("formal"));
        // chatbot stays first even after being replaced
        assert!(prompt.find("pirate").unwrap() < prompt.find("classification").unwrap());
    }

    #[test]
    fn combined_prompt_joins_in_activation_order() {
        let mut registry = ToolRegistry::new();
        registry.configure(
            "chatbot",
            &ToolOptions::default().with_personality("pirate"),
        );
        registry.configure(
            "prediction",
            &ToolOptions::default()
                .with_task_type("sentiment")
                .with_categories(vec!["good".into(), "bad".into()])
                .with_output_format("simple"),
        );

        assert_eq!(registry.active_tool_names(), vec!["chatbot", "prediction"]);

        let prompt = registry.combined_system_prompt();
        let chatbot_at = prompt.find("pirate").unwrap();
        let prediction_at = prompt.find("sentiment").unwrap();
        assert!(chatbot_at < prediction_at);
        assert!(prompt.contains("\n\n"));
        assert!(prompt.contains("good, bad"));
    }

    #[test]
    fn returned_names_are_a_copy() {
        let mut registry = ToolRegistry::new();
        registry.configure("chatbot", &ToolOptions::default());

        let mut names = registry.active_tool_names();
        names.push("bogus".to_string());
        names.clear();

        assert_eq!(registry.active_tool_names(), vec!["chatbot"]);
    }

    #[test]
    fn unknown_tool_name_gets_generic_fragment() {
        let mut registry = ToolRegistry::new();
        registry.configure("summarizer", &ToolOptions::default());

        assert_eq!(registry.active_tool_names(), vec!["summarizer"]);
        assert!(registry.combined_system_prompt().contains("summarizer"));
    }
}
