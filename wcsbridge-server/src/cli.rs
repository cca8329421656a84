use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use wcsbridge_types::BridgeConfig;

#[derive(Parser, Debug)]
#[command(
    name = "wcsbridge",
    about = "WCS Bridge - serves WMS GetMap requests from a WCS backend",
    version = env!("GIT_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, env = "WCSBRIDGE_CONFIG", help = "Path to a JSON config file")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,

    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    #[command(about = "Start the bridge server (default if no command specified)")]
    Serve,

    #[command(about = "Print the resolved configuration and exit")]
    CheckConfig {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}

/// Settings that take precedence over the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    #[arg(short, long, global = true, env = "WCSBRIDGE_PORT")]
    pub port: Option<u16>,

    #[arg(long = "bind", global = true, env = "WCSBRIDGE_BIND")]
    pub bind_address: Option<String>,

    #[arg(long, global = true, env = "WCSBRIDGE_UPSTREAM_URL", help = "WCS endpoint to forward to")]
    pub upstream_url: Option<String>,

    #[arg(
        long = "capabilities",
        global = true,
        env = "WCSBRIDGE_CAPABILITIES",
        help = "Static GetCapabilities document"
    )]
    pub capabilities_path: Option<PathBuf>,

    #[arg(long, global = true, env = "WCSBRIDGE_SERVICE_PREFIX")]
    pub service_prefix: Option<String>,

    #[arg(
        long = "timeout-secs",
        global = true,
        env = "WCSBRIDGE_TIMEOUT_SECS",
        help = "Upstream request timeout (default: none)"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    pub fn apply(self, mut config: BridgeConfig) -> BridgeConfig {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(bind_address) = self.bind_address {
            config.bind_address = bind_address;
        }
        if let Some(upstream_url) = self.upstream_url {
            config.upstream_url = upstream_url;
        }
        if let Some(capabilities_path) = self.capabilities_path {
            config.capabilities_path = capabilities_path;
        }
        if let Some(service_prefix) = self.service_prefix {
            config.service_prefix = service_prefix;
        }
        if let Some(secs) = self.request_timeout_secs {
            config.request_timeout_secs = Some(secs);
        }
        config
    }
}
