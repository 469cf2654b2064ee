use beacon_core::config::AppConfig;
use clap::Subcommand;
use std::path::Path;

use super::utils::{print_error, print_info, print_success, CliError, CliResult};

const SAMPLE_CONFIG: &str = r#"# Beacon Webhook Server Configuration
# Every value below is the compiled default. Environment variables override
# them with a BEACON__ prefix, e.g. BEACON__SERVER__BIND_PORT=8080.

environment = "development"

[server]
bind_address = "127.0.0.1"
bind_port = 3001
webhook_path = "/api/webhook"
max_concurrent_requests = 100
max_body_bytes = 1048576

[alerts]
# Number of most recent alerts kept in memory
capacity = 100

[logging]
level = "info"
format = "pretty"
"#;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Validate the current configuration
    Validate {
        /// Path to config file (defaults to config/config.toml)
        #[arg(short, long, default_value = "config/config.toml")]
        file: String,
    },

    /// Show current configuration
    Show {
        /// Path to config file (defaults to config/config.toml)
        #[arg(short, long, default_value = "config/config.toml")]
        file: String,
    },

    /// Generate a sample configuration file
    Generate {
        /// Output path for the config file
        #[arg(short, long, default_value = "config/config.toml")]
        output: String,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn handle_config_command(command: ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Validate { file } => validate_config(&file),
        ConfigCommands::Show { file } => show_config(&file),
        ConfigCommands::Generate { output, force } => generate_config(&output, force),
    }
}

fn validate_config(file: &str) -> CliResult<()> {
    if !Path::new(file).exists() {
        print_error(&format!("Configuration file not found: {file}"));
        return Err(CliError::Config(format!("File not found: {file}")));
    }

    print_info(&format!("Loading configuration from {file}..."));

    let config = AppConfig::from_file(file).map_err(|e| CliError::Config(e.to_string()))?;

    print_info("Validating configuration...");
    config.validate().map_err(CliError::Config)?;

    print_success("Configuration is valid!");

    println!("Configuration Summary:");
    println!("  Server: {}:{}", config.server.bind_address, config.server.bind_port);
    println!("  Webhook: {}", config.server.webhook_path);
    println!("  Alert capacity: {}", config.alerts.capacity);

    Ok(())
}

fn show_config(file: &str) -> CliResult<()> {
    let config = AppConfig::from_file(file).map_err(|e| CliError::Config(e.to_string()))?;

    println!("Configuration from {file}:");
    println!("  Environment: {}", config.environment);

    println!("\n[Server]");
    println!("  Bind Address: {}", config.server.bind_address);
    println!("  Bind Port: {}", config.server.bind_port);
    println!("  Webhook Path: {}", config.server.webhook_path);
    println!("  Max Concurrent Requests: {}", config.server.max_concurrent_requests);
    println!("  Max Body Bytes: {}", config.server.max_body_bytes);

    println!("\n[Alerts]");
    println!("  Capacity: {}", config.alerts.capacity);

    println!("\n[Logging]");
    println!("  Level: {}", config.logging.level);
    println!("  Format: {}", config.logging.format);

    Ok(())
}

fn generate_config(output: &str, force: bool) -> CliResult<()> {
    if Path::new(output).exists() && !force {
        return Err(CliError::Config(format!(
            "File {output} already exists. Use --force to overwrite."
        )));
    }

    if let Some(parent) = Path::new(output).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, SAMPLE_CONFIG)?;

    print_success(&format!("Sample configuration generated: {output}"));
    Ok(())
}
