use crate::scaffold;
use anyhow::{Context, Result, anyhow};
use console::style;
use orcha_core::config::{self, Config};
use orcha_core::{
    AskOptions, ChainFile, ChatMessage, ChatModel, KNOWN_MODELS, PerplexityProvider, Provider,
    ToolOptions,
};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

pub struct PromptFlags {
    pub personality: Option<String>,
    pub sentiment: bool,
    pub topic: Option<Vec<String>>,
    pub no_tools: bool,
}

pub fn version() -> Result<()> {
    println!("orcha {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

pub fn models(config: &Config) -> Result<()> {
    println!("Known model identifiers:");
    for name in KNOWN_MODELS {
        if *name == config.model {
            println!("  {} {}", style("*").green().bold(), name);
        } else {
            println!("    {}", name);
        }
    }
    println!("\n{} marks the configured model", style("*").green().bold());
    Ok(())
}

pub fn show_config(config: &Config) -> Result<()> {
    let api_key = if config.api_key.is_empty() {
        style("not set").red().to_string()
    } else {
        style("set (hidden)").green().to_string()
    };

    println!("Config file:  {}", config::get_config_path().display());
    println!("Model:        {}", config.model);
    println!(
        "Base URL:     {}",
        config.base_url.as_deref().unwrap_or("(provider default)")
    );
    println!("Max tokens:   {}", config.max_tokens);
    println!("Temperature:  {}", config.temperature);
    println!("API key:      {}", api_key);
    Ok(())
}

pub fn init(path: &Path) -> Result<()> {
    scaffold::write_example(path)?;
    println!(
        "{} Wrote example chain to {}",
        style("✓").green().bold(),
        path.display()
    );
    println!("Run it with: orcha run {}", path.display());
    Ok(())
}

pub fn run_chain(
    models: &HashMap<String, ChatModel>,
    name: Option<&str>,
    file: &Path,
) -> Result<()> {
    let model = select_model(models, name)?;

    let (steps, initial_input) = ChainFile::load(file)?.into_steps()?;
    let result = model.execute_chain(&steps, initial_input)?;

    println!("Result: {}", render_value(&result));
    Ok(())
}

pub async fn prompt(
    models: &mut HashMap<String, ChatModel>,
    name: Option<&str>,
    text: &str,
    flags: PromptFlags,
) -> Result<()> {
    let model = select_model_mut(models, name)?;

    if let Some(personality) = &flags.personality {
        model.tools.configure(
            "chatbot",
            &ToolOptions::default().with_personality(personality.clone()),
        );
    }
    if flags.sentiment {
        model.tools.configure(
            "prediction",
            &ToolOptions::default().with_task_type("sentiment"),
        );
    }
    if let Some(topics) = &flags.topic {
        model.tools.configure(
            "prediction",
            &ToolOptions::default()
                .with_task_type("topic")
                .with_categories(topics.clone()),
        );
    }

    let options = AskOptions {
        use_tools: !flags.no_tools,
        ..AskOptions::default()
    };

    let response = model.ask_with(text, &options).await;
    println!("{response}");
    Ok(())
}

pub async fn test_connection(config: &Config) -> Result<()> {
    let mut provider = PerplexityProvider::new(config.api_key.clone());
    if let Some(base_url) = &config.base_url {
        provider = provider.with_base_url(base_url.clone());
    }

    let messages = vec![ChatMessage::user("Reply with a single word: ok")];
    let reply = provider
        .chat(&messages, &config.model, 16, 0.0)
        .await
        .context("Connectivity check failed")?;

    println!(
        "{} {} responded: {}",
        style("✓").green().bold(),
        config.model,
        reply.trim()
    );
    Ok(())
}

pub fn require_api_key(config: &Config) -> Result<()> {
    if config.api_key.is_empty() {
        anyhow::bail!(
            "No API key configured. Set {} or add api_key to {}",
            config::API_KEY_ENV,
            config::get_config_path().display()
        );
    }
    Ok(())
}

fn select_model<'a>(
    models: &'a HashMap<String, ChatModel>,
    name: Option<&str>,
) -> Result<&'a ChatModel> {
    let key = name.unwrap_or("default");
    models.get(key).ok_or_else(|| anyhow!("Unknown model '{}'", key))
}

fn select_model_mut<'a>(
    models: &'a mut HashMap<String, ChatModel>,
    name: Option<&str>,
) -> Result<&'a mut ChatModel> {
    let key = name.unwrap_or("default");
    models
        .get_mut(key)
        .ok_or_else(|| anyhow!("Unknown model '{}'", key))
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
