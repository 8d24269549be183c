use crate::config::AppConfig;
use clap::Parser;

/// 命令列參數，優先於環境變數
#[derive(Debug, Clone, Parser)]
#[command(name = "mercus-hiper")]
#[command(about = "Forwards Mercus order webhooks to the Hiper API")]
pub struct CliArgs {
    #[arg(long, help = "Listen address (overrides HOST)")]
    pub host: Option<String>,

    #[arg(long, help = "Listen port (overrides PORT)")]
    pub port: Option<u16>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliArgs {
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config
    }
}
