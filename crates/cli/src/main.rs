use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;
use commands::{
    handle_config_command, handle_list, handle_parse, handle_sample, handle_send, AlertClient,
    BodyFormat, ConfigCommands, MessageSource,
};

#[derive(Parser)]
#[command(name = "beacon-cli")]
#[command(about = "Beacon CLI - Send, inspect and validate signal alerts for the Beacon webhook server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the webhook server
    #[arg(long, global = true, env = "BEACON_URL", default_value = "http://127.0.0.1:3001")]
    url: String,

    /// Route the server ingests alerts on
    #[arg(long, global = true, default_value = "/api/webhook")]
    webhook_path: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "10")]
    timeout: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Post a single alert message
    Send {
        #[command(flatten)]
        message: MessageArgs,

        /// Wrap the message as {"message": ...} instead of sending raw text
        #[arg(long)]
        json: bool,
    },

    /// Post the built-in sample alerts
    Sample {
        /// Pause between alerts in milliseconds
        #[arg(long, default_value = "2000")]
        delay_ms: u64,
    },

    /// Show the alerts currently buffered by the server
    List,

    /// Parse a message locally and report the extracted fields
    Parse {
        #[command(flatten)]
        message: MessageArgs,
    },

    /// Configuration Management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(clap::Args)]
#[group(required = true, multiple = false)]
struct MessageArgs {
    /// Message text (use real newlines between the three lines)
    #[arg(short, long)]
    message: Option<String>,

    /// Read the message from a file
    #[arg(short, long)]
    file: Option<String>,
}

impl MessageArgs {
    fn into_source(self) -> MessageSource {
        match (self.message, self.file) {
            (_, Some(path)) => MessageSource::File(path),
            (Some(text), None) => MessageSource::Inline(text),
            (None, None) => MessageSource::Inline(String::new()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = || AlertClient::new(&cli.url, &cli.webhook_path, Duration::from_secs(cli.timeout));

    match cli.command {
        Commands::Send { message, json } => {
            let format = if json { BodyFormat::Json } else { BodyFormat::Text };
            handle_send(&client()?, &message.into_source(), format).await?;
        }

        Commands::Sample { delay_ms } => {
            handle_sample(&client()?, Duration::from_millis(delay_ms)).await?;
        }

        Commands::List => {
            handle_list(&client()?).await?;
        }

        Commands::Parse { message } => {
            handle_parse(&message.into_source())?;
        }

        Commands::Config(config_command) => {
            handle_config_command(config_command)?;
        }
    }

    Ok(())
}
