//! Command line and environment configuration.

use clap::{Parser, ValueEnum};
use thiserror::Error;

/// Which [`crate::store::ContactStore`] implementation backs the API.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum StoreKind {
    /// A DynamoDB table, reached with the default AWS credential chain.
    #[default]
    Dynamodb,
    /// Process memory, lost on exit.
    Memory,
}

/// Log line layout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    /// Single-line human readable output.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

/// Configuration problems detected after parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The DynamoDB store was selected without a table.
    #[error("a table name is required for the dynamodb store (--table-name or CONTACTS_TABLE)")]
    MissingTableName,
}

/// Service configuration.
#[derive(Clone, Debug, Parser)]
#[command(name = "dynamodb-contacts", version, about)]
pub struct Config {
    /// Name of the DynamoDB table holding contacts.
    #[arg(long, env = "CONTACTS_TABLE")]
    pub table_name: Option<String>,

    /// Backing store.
    #[arg(long, env = "CONTACTS_STORE", value_enum, default_value_t = StoreKind::Dynamodb)]
    pub store: StoreKind,

    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Base log level or filter directive.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log line layout.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Config {
    /// The configured table, required when the DynamoDB store is selected.
    pub fn table_name(&self) -> Result<&str, ConfigError> {
        self.table_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(ConfigError::MissingTableName)
    }

    /// `host:port` to bind.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
