use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use groqchat::connector::api::{Container, ContainerConfig, Router};
use groqchat::connector::web;
use groqchat::Commands;

#[derive(Parser)]
#[command(name = "groqchat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer offline with a mock client instead of calling Groq
    #[arg(long, global = true)]
    mock_client: bool,

    /// Override the Groq API root (defaults to GROQ_BASE_URL or https://api.groq.com/openai)
    #[arg(long, global = true)]
    groq_base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Existing environment variables win over .env entries.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        mock_client: cli.mock_client,
        groq_base_url: cli.groq_base_url,
        ..ContainerConfig::default()
    });

    match cli.command {
        Commands::Serve { port, public } => {
            if container.check_credentials().is_err() {
                warn!("Submissions will fail until GROQ_API_KEY is configured");
            }
            if container.uses_mock_client() {
                info!("Answers come from the mock client; Groq is not called");
            }

            let host = if public { "0.0.0.0" } else { "127.0.0.1" };
            let address = format!("{}:{}", host, port);
            web::start_server(Arc::new(container), &address).await?;
        }
        command @ Commands::Chat { .. } => {
            if container.check_credentials().is_err() {
                warn!("Submissions will fail until GROQ_API_KEY is configured");
            }
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn serve_defaults_to_local_port_8501() {
        let cli = Cli::try_parse_from(["groqchat", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { port, public } => {
                assert_eq!(port, 8501);
                assert!(!public);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn ask_defaults_to_versatile_model() {
        let cli = Cli::try_parse_from(["groqchat", "ask", "hello"]).unwrap();
        match cli.command {
            Commands::Ask { prompt, model } => {
                assert_eq!(prompt, "hello");
                assert_eq!(model, "llama-3.3-70b-versatile");
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["groqchat", "models", "--mock-client", "--verbose"]).unwrap();
        assert!(cli.mock_client);
        assert!(cli.verbose);
    }
}
