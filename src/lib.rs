pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::AppConfig;
pub use core::{forwarder::HiperForwarder, integration::OrderIntegration};
pub use server::{create_router, start_server};
pub use utils::error::{BridgeError, MappingError, Result};
