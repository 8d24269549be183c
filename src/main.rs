use clap::Parser;
use mercus_hiper::utils::{logger, validation::Validate};
use mercus_hiper::{start_server, AppConfig, CliArgs, HiperForwarder, OrderIntegration};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_logger(args.verbose);
    }

    tracing::info!("Starting mercus-hiper integration server");

    let config = match AppConfig::from_env() {
        Ok(config) => args.apply(config),
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let addr = config.socket_addr()?;
    tracing::debug!("Hiper endpoint: {}", config.hiper_api_endpoint);

    let forwarder = HiperForwarder::new(config);
    let integration = Arc::new(OrderIntegration::new(forwarder));

    if let Err(e) = start_server(integration, addr).await {
        tracing::error!("❌ Server failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}
