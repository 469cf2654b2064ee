use beacon_core::alerts::{parse_message, Alert};
use prettytable::{row, Table};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use super::utils::{print_error, print_info, print_success, CliError, CliResult};

/// Built-in alerts for `sample`, one per signal shape the chart script emits.
pub const SAMPLE_ALERTS: [&str; 4] = [
    "BTCUSDT | BUY+LONG Signal\nP: 45000.50  ATR: 1200.30  RSI: 35.20\nLongStop: 43500.00  ShortStop: 46500.00",
    "ETHUSDT | SELL+SHORT Signal\nP: 2800.75  ATR: 85.40  RSI: 68.90\nLongStop: 2750.00  ShortStop: 2850.00",
    "ADAUSDT | Buy Signal\nP: 0.4520  ATR: 0.0180  RSI: 42.10\nLongStop: 0.4400  ShortStop: 0.4650",
    "DOTUSDT | Long Signal\nP: 6.850  ATR: 0.320  RSI: 38.50\nLongStop: 6.500  ShortStop: 7.200",
];

/// How a message is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    /// `text/plain` body holding the message itself.
    Text,
    /// `application/json` body of the form `{"message": ...}`.
    Json,
}

/// Where the message text comes from.
#[derive(Debug, Clone)]
pub enum MessageSource {
    Inline(String),
    File(String),
}

impl MessageSource {
    pub fn read(&self) -> CliResult<String> {
        match self {
            Self::Inline(text) => Ok(text.clone()),
            Self::File(path) => std::fs::read_to_string(path).map_err(CliError::from),
        }
    }
}

/// Body of a successful `GET` on the webhook route.
#[derive(Debug, Deserialize)]
pub struct AlertList {
    pub success: bool,
    pub alerts: Vec<Alert>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
struct StoredAlert {
    alert: Alert,
}

/// Result of posting one message.
#[derive(Debug)]
pub enum SendOutcome {
    Stored(Alert),
    /// Any non-success status, with the response body (JSON when it parses).
    Rejected { status: u16, body: Value },
}

/// HTTP client for a running webhook server.
pub struct AlertClient {
    http: reqwest::Client,
    base_url: String,
    webhook_path: String,
}

impl AlertClient {
    pub fn new(base_url: &str, webhook_path: &str, timeout: Duration) -> CliResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            webhook_path: webhook_path.to_string(),
        })
    }

    pub fn webhook_url(&self) -> String {
        format!("{}{}", self.base_url, self.webhook_path)
    }

    pub async fn send(&self, message: &str, format: BodyFormat) -> CliResult<SendOutcome> {
        let url = self.webhook_url();
        debug!(url = %url, ?format, "Posting alert");

        let request = match format {
            BodyFormat::Text => self
                .http
                .post(&url)
                .header(reqwest::header::CONTENT_TYPE, "text/plain")
                .body(message.to_string()),
            BodyFormat::Json => self.http.post(&url).json(&json!({ "message": message })),
        };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            let stored: StoredAlert = serde_json::from_str(&text)?;
            return Ok(SendOutcome::Stored(stored.alert));
        }

        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Ok(SendOutcome::Rejected { status: status.as_u16(), body })
    }

    pub async fn list(&self) -> CliResult<AlertList> {
        let response = self.http.get(self.webhook_url()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CliError::Rejected(format!("HTTP {status}")));
        }

        Ok(response.json().await?)
    }

    /// `true` when the server answers its health route.
    pub async fn is_healthy(&self) -> bool {
        match self.http.get(format!("{}/health", self.base_url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "Health check failed");
                false
            }
        }
    }
}

pub async fn handle_send(
    client: &AlertClient,
    source: &MessageSource,
    format: BodyFormat,
) -> CliResult<()> {
    let message = source.read()?;

    match client.send(&message, format).await? {
        SendOutcome::Stored(alert) => {
            print_success("Alert received and stored");
            print_alert(&alert);
            Ok(())
        }
        SendOutcome::Rejected { status, body } => {
            print_error(&format!("Server rejected the alert (HTTP {status})"));
            println!("{}", serde_json::to_string_pretty(&body)?);
            Err(CliError::Rejected(format!("HTTP {status}")))
        }
    }
}

/// Posts the built-in sample alerts in order, pausing `delay` between them.
pub async fn handle_sample(client: &AlertClient, delay: Duration) -> CliResult<()> {
    if !client.is_healthy().await {
        return Err(CliError::Network(format!(
            "Webhook server is not running at {}",
            client.base_url
        )));
    }

    print_info(&format!("Target: {}", client.webhook_url()));

    let mut stored = 0;
    let mut failed = 0;

    for (index, message) in SAMPLE_ALERTS.iter().enumerate() {
        let header = message.lines().next().unwrap_or_default();
        print!("Sending alert {}/{} ({header}): ", index + 1, SAMPLE_ALERTS.len());

        match client.send(message, BodyFormat::Json).await {
            Ok(SendOutcome::Stored(_)) => {
                println!("[OK]");
                stored += 1;
            }
            Ok(SendOutcome::Rejected { status, .. }) => {
                println!("[ERROR] HTTP {status}");
                failed += 1;
            }
            Err(e) => {
                println!("[ERROR] {e}");
                failed += 1;
            }
        }

        if index + 1 < SAMPLE_ALERTS.len() && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    println!("\nSample Results:");
    println!("  [SUCCESS] Stored: {stored}");
    println!("  [ERROR] Failed: {failed}");

    if failed > 0 {
        return Err(CliError::Rejected(format!("{failed} sample alert(s) were not stored")));
    }

    print_success("All sample alerts stored!");
    Ok(())
}

pub async fn handle_list(client: &AlertClient) -> CliResult<()> {
    let list = client.list().await?;

    if list.alerts.is_empty() {
        print_info("No alerts buffered");
        return Ok(());
    }

    println!("{} alert(s), newest first:", list.count);
    alerts_table(&list.alerts).printstd();
    Ok(())
}

/// Runs the parser locally, without a server.
pub fn handle_parse(source: &MessageSource) -> CliResult<()> {
    let message = source.read()?;

    match parse_message(&message) {
        Ok(parsed) => {
            print_success("Message is a valid signal alert");
            println!("  Symbol: {}", parsed.symbol);
            println!("  Signal: {}", parsed.signal_type);
            println!("  Price: {}  ATR: {}  RSI: {}", parsed.price, parsed.atr, parsed.rsi);
            println!("  LongStop: {}  ShortStop: {}", parsed.long_stop, parsed.short_stop);
            Ok(())
        }
        Err(reason) => {
            print_error(&format!("Invalid alert format: {reason}"));
            Err(CliError::Rejected(reason.to_string()))
        }
    }
}

fn print_alert(alert: &Alert) {
    println!("  Symbol: {}", alert.symbol);
    println!("  Signal: {}", alert.signal_type);
    println!("  Price: {}  ATR: {}  RSI: {}", alert.price, alert.atr, alert.rsi);
    println!("  LongStop: {}  ShortStop: {}", alert.long_stop, alert.short_stop);
    println!("  Received: {}", beacon_core::alerts::types::iso_millis::format(&alert.timestamp));
}

fn alerts_table(alerts: &[Alert]) -> Table {
    let mut table = Table::new();
    table.add_row(row![
        "Received", "Symbol", "Signal", "Price", "ATR", "RSI", "LongStop", "ShortStop"
    ]);

    for alert in alerts {
        table.add_row(row![
            beacon_core::alerts::types::iso_millis::format(&alert.timestamp),
            alert.symbol,
            alert.signal_type,
            alert.price,
            alert.atr,
            alert.rsi,
            alert.long_stop,
            alert.short_stop
        ]);
    }

    table
}
