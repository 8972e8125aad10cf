use anyhow::Result;
use clap::{Parser, Subcommand};
use coderoom::model::Language;
use coderoom::server::{DEFAULT_JUDGE0_URL, DEFAULT_RAPIDAPI_HOST, ExecutionConfig, ServerConfig};
use colored::*;
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coderoom")]
#[command(about = "Shared code rooms with remote execution")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sync and execution server.
    Serve(ServeArgs),

    /// Print the supported language tags and their backend ids.
    Languages,
}

#[derive(clap::Args)]
struct ServeArgs {
    #[arg(long, env = "CODEROOM_BIND", default_value = "0.0.0.0:5000")]
    bind: SocketAddr,

    #[arg(long, env = "JUDGE0_URL", default_value = DEFAULT_JUDGE0_URL)]
    judge0_url: String,

    #[arg(long, env = "RAPIDAPI_KEY", default_value = "", hide_env_values = true)]
    rapidapi_key: String,

    #[arg(long, env = "RAPIDAPI_HOST", default_value = DEFAULT_RAPIDAPI_HOST)]
    rapidapi_host: String,

    /// Delay between status polls, in milliseconds.
    #[arg(long, env = "CODEROOM_POLL_INTERVAL_MS", default_value_t = 1500)]
    poll_interval_ms: u64,

    /// Give up on a job after this many seconds.
    #[arg(long, env = "CODEROOM_MAX_POLL_SECS", default_value_t = 60)]
    max_poll_secs: u64,

    /// Drop empty rooms after this many idle seconds. 0 keeps them forever.
    #[arg(long, env = "CODEROOM_ROOM_IDLE_SECS", default_value_t = 1800)]
    room_idle_secs: u64,

    /// Comma-separated list of allowed origins. Empty allows any.
    #[arg(long, env = "CODEROOM_CORS_ORIGINS", value_delimiter = ',')]
    cors_origins: Vec<String>,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        ServerConfig {
            bind: args.bind,
            execution: ExecutionConfig {
                judge0_url: args.judge0_url,
                rapidapi_key: args.rapidapi_key,
                rapidapi_host: args.rapidapi_host,
                poll_interval: Duration::from_millis(args.poll_interval_ms),
                max_poll_duration: Duration::from_secs(args.max_poll_secs),
            },
            room_idle_ttl: (args.room_idle_secs > 0)
                .then(|| Duration::from_secs(args.room_idle_secs)),
            cors_origins: args
                .cors_origins
                .into_iter()
                .map(|origin| origin.trim().to_owned())
                .filter(|origin| !origin.is_empty())
                .collect(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .init();

            let config = ServerConfig::from(args);
            println!(
                "{} {}",
                "🚀 coderoom listening on".green().bold(),
                config.bind.to_string().cyan()
            );
            coderoom::server::serve(config).await?;
        }
        Commands::Languages => {
            for lang in Language::ALL {
                println!("{:<12} {}", lang.tag().cyan(), lang.judge0_id());
            }
        }
    }

    Ok(())
}
