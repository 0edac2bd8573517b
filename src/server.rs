use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "dashboard-header", version, about = "Serve the dashboard shell")]
pub struct ServerConfig {
    /// Address to bind the HTTP server to, overriding the Leptos site address
    #[arg(long, env = "BIND_ADDRESS")]
    pub bind: Option<String>,
    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
