use anyhow::Result;
use colored::Colorize;

use wcsbridge_types::BridgeConfig;

pub fn check_config(config: &BridgeConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        println!("{}", "Bridge Configuration:".cyan().bold());
        println!("  Listen: {}", config.get_socket_addr());
        println!("  Upstream: {}", config.upstream_url);
        println!("  Capabilities: {}", config.capabilities_path.display());
        println!("  Service prefix: {}", config.service_prefix);
        match config.request_timeout_secs {
            Some(secs) => println!("  Upstream timeout: {}s", secs),
            None => println!("  Upstream timeout: client default"),
        }
        if !config.capabilities_path.exists() {
            println!(
                "{} Capabilities document not found; GetCapabilities will fail until it exists",
                "!".yellow()
            );
        }
        println!("{} Configuration is valid", "✓".green());
    }
    Ok(())
}
