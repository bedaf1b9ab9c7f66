use anyhow::Context;
use bart_summarizer::config::{
    Config, ConfigCredential, CredentialChain, CredentialError, EnvCredential,
};
use bart_summarizer::inference::{ClientError, SummarizerClient};
use bart_summarizer::logging::init_tracing;
use bart_summarizer::session::{display, PromptCredential, Session};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bart-summarizer", version, about = "Summarize text with a hosted BART model")]
struct Cli {
    /// Path to the config file (default: user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the summarization endpoint URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Override the maximum input length in characters
    #[arg(long, value_name = "CHARS")]
    max_input_chars: Option<usize>,

    /// Environment variable to read the API key from
    #[arg(long, value_name = "NAME")]
    api_key_env: Option<String>,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(url) = &self.endpoint {
            config.endpoint.url = url.clone();
        }
        if let Some(max) = self.max_input_chars {
            config.input.max_chars = max;
        }
        if let Some(var) = &self.api_key_env {
            config.credentials.env_var = var.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Some(path) = init_tracing() {
        tracing::debug!(path = %path.display(), "File logging enabled");
    }

    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    tracing::info!(endpoint = %config.endpoint.url, "Starting summarizer");

    let stdout = io::stdout();
    display::write_banner(&mut stdout.lock(), config.endpoint.model_id())?;

    let credentials = CredentialChain::new()
        .with(EnvCredential::new(config.credentials.env_var.clone()))
        .with(ConfigCredential::new(config.credentials.api_key.clone()))
        .with(PromptCredential::new("Enter your Hugging Face API key: "));

    let client = match SummarizerClient::from_source(&config, &credentials) {
        Ok(client) => client,
        Err(ClientError::Credential(CredentialError::Cancelled)) => {
            let mut out = stdout.lock();
            display::write_farewell(&mut out)?;
            out.flush()?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    println!();

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session
        .run(&client)
        .await
        .context("console I/O failed")?;

    tracing::info!("Session finished");
    Ok(())
}
