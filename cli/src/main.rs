use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use orcha_core::config::Config;
use orcha_core::{ChatModel, PerplexityProvider, Provider};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

mod commands;
mod scaffold;

#[derive(Parser)]
#[command(name = "orcha")]
#[command(version, about = "orcha - chain prompts and tool templates over a hosted LLM", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,
    /// Run a chain from a YAML file
    Run {
        file: PathBuf,
        /// Model identifier to run the chain against
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Send a one-off prompt
    Prompt {
        text: String,
        /// Configure a chatbot tool with this personality
        #[arg(long)]
        personality: Option<String>,
        /// Configure a sentiment prediction tool
        #[arg(long)]
        sentiment: bool,
        /// Configure a topic prediction tool over these topics
        #[arg(long, value_delimiter = ',')]
        topic: Option<Vec<String>>,
        /// Send the prompt without any system prompt
        #[arg(long)]
        no_tools: bool,
        /// Model identifier to ask
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Check connectivity to the API
    Test,
    /// List known model identifiers
    Models,
    /// Show the resolved configuration
    Config,
    /// Write an example chain file
    Init {
        #[arg(default_value = "chain.yaml")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("{} {e:#}", style("Error:").red().bold());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Version => commands::version(),
        Commands::Models => {
            let config = Config::load_or_init()?;
            commands::models(&config)
        }
        Commands::Config => {
            let config = Config::load_or_init()?;
            commands::show_config(&config)
        }
        Commands::Init { path } => commands::init(&path),
        Commands::Run { file, model } => {
            let config = Config::load_or_init()?;
            let mut models = build_models(&config);
            if let Some(name) = model.as_deref() {
                ensure_model(&mut models, &config, name);
            }
            commands::run_chain(&models, model.as_deref(), &file)
        }
        Commands::Prompt {
            text,
            personality,
            sentiment,
            topic,
            no_tools,
            model,
        } => {
            let config = Config::load_or_init()?;
            commands::require_api_key(&config)?;
            let mut models = build_models(&config);
            if let Some(name) = model.as_deref() {
                ensure_model(&mut models, &config, name);
            }
            let flags = commands::PromptFlags {
                personality,
                sentiment,
                topic,
                no_tools,
            };
            commands::prompt(&mut models, model.as_deref(), &text, flags).await
        }
        Commands::Test => {
            let config = Config::load_or_init()?;
            commands::require_api_key(&config)?;
            commands::test_connection(&config).await
        }
    }
}

fn build_provider(config: &Config) -> Arc<dyn Provider> {
    let mut provider = PerplexityProvider::new(config.api_key.clone());
    if let Some(base_url) = &config.base_url {
        provider = provider.with_base_url(base_url.clone());
    }
    Arc::new(provider)
}

// Model instances live in this caller-owned map; handlers receive it
// explicitly instead of reaching for process-wide state.
fn build_models(config: &Config) -> HashMap<String, ChatModel> {
    let provider = build_provider(config);

    let mut models = HashMap::new();
    models.insert(
        "default".to_string(),
        ChatModel::new(provider, config.model.clone())
            .with_max_tokens(config.max_tokens)
            .with_temperature(config.temperature),
    );
    models
}

fn ensure_model(models: &mut HashMap<String, ChatModel>, config: &Config, name: &str) {
    if !models.contains_key(name) {
        let provider = build_provider(config);
        models.insert(
            name.to_string(),
            ChatModel::new(provider, name)
                .with_max_tokens(config.max_tokens)
                .with_temperature(config.temperature),
        );
    }
}
