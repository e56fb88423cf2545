//! CLI Status Command
//!
//! Probes the liveness route of a locally running server.

use anyhow::Result;

use gork_config::GorkConfig;

pub async fn run(config: &GorkConfig) -> Result<()> {
    let url = format!("http://127.0.0.1:{}/", config.port);
    println!("gork status: checking {url}...");

    match reqwest::get(&url).await {
        Ok(resp) if resp.status().is_success() => {
            println!("🟢 Up: {}", resp.text().await?);
        }
        Ok(resp) => {
            println!("🟡 Answering with {}", resp.status());
        }
        Err(_) => {
            println!("🔴 gork is not running on port {}", config.port);
        }
    }
    Ok(())
}
