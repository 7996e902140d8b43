mod logging;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tutor_core::config::Config;
use tutor_core::{server, Assistant, OpenAiProvider, Query};

#[derive(Parser)]
#[command(name = "tutor")]
#[command(about = "Teaching assistant that answers course questions from course content and forum posts", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Load the corpora and serve the HTTP API")]
    Serve {
        /// Address to bind the HTTP server to (host:port)
        #[arg(long, env = "TUTOR_BIND")]
        bind: Option<String>,

        #[command(flatten)]
        corpus: CorpusArgs,
    },

    #[command(about = "Answer a single question and print the JSON response")]
    Ask {
        #[arg(short, long)]
        question: String,

        /// Base64-encoded image attached to the question
        #[arg(long)]
        image: Option<String>,

        #[command(flatten)]
        corpus: CorpusArgs,
    },

    #[command(about = "Show current configuration")]
    Show,
}

#[derive(Args)]
struct CorpusArgs {
    /// Course content JSON file
    #[arg(long)]
    course_path: Option<PathBuf>,

    /// Forum posts JSON file
    #[arg(long)]
    forum_path: Option<PathBuf>,
}

impl CorpusArgs {
    fn apply(self, config: &mut Config) {
        if let Some(path) = self.course_path {
            config.corpus.course_path = path;
        }
        if let Some(path) = self.forum_path {
            config.corpus.forum_path = path;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let mut config = load_config(&cli.config)?;

    match cli.command {
        Commands::Serve { bind, corpus } => {
            corpus.apply(&mut config);
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            serve(config).await
        }
        Commands::Ask {
            question,
            image,
            corpus,
        } => {
            corpus.apply(&mut config);
            ask(config, question, image).await
        }
        Commands::Show => {
            show_config(&config);
            Ok(())
        }
    }
}

/// Reads the config file, or falls back to defaults when there is none.
fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::load(path).with_context(|| format!("Failed to load config from {}", path.display()))
    } else {
        tracing::info!(path = %path.display(), "No config file; using defaults");
        Ok(Config::default())
    }
}

async fn build_assistant(config: Config) -> Result<Assistant> {
    let provider = OpenAiProvider::new(&config.llm).context("Failed to build HTTP client")?;
    Ok(Assistant::build(config, Arc::new(provider)).await)
}

async fn serve(config: Config) -> Result<()> {
    let bind = config.server.bind.clone();
    let assistant = Arc::new(build_assistant(config).await?);

    server::serve(assistant, &bind).await.context("Server failed")?;
    Ok(())
}

async fn ask(config: Config, question: String, image: Option<String>) -> Result<()> {
    let assistant = build_assistant(config).await?;

    let query = Query { question, image };
    let response = assistant.answer(&query).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn show_config(config: &Config) {
    println!("{}", "Current Configuration:".bold().green());
    println!();
    println!("{}", "LLM:".bold());
    println!("  Model:           {}", config.llm.model.cyan());
    println!("  Base URL:        {}", config.llm.base_url);
    println!("  API key env:     {}", config.llm.api_key_env);
    println!("  Temperature:     {}", config.llm.temperature);
    println!("  Timeout:         {}s", config.llm.timeout_secs);
    println!();
    println!("{}", "Embedding:".bold());
    println!("  Model:           {}", config.embedding.model.cyan());
    println!("  Batch Size:      {}", config.embedding.batch_size);
    println!();
    println!("{}", "Retrieval:".bold());
    println!("  Course Top K:    {}", config.retrieval.course_top_k);
    println!("  Forum Top K:     {}", config.retrieval.forum_top_k);
    println!("  Threshold:       {}", config.retrieval.similarity_threshold);
    println!();
    println!("{}", "Corpus:".bold());
    println!("  Course Content:  {}", config.corpus.course_path.display());
    println!("  Forum Posts:     {}", config.corpus.forum_path.display());
    println!();
    println!("{}", "Server:".bold());
    println!("  Bind:            {}", config.server.bind);
}
