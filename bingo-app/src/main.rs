//! Headless entry point.
//!
//! Opens the configured catalog, resolves the path given as the first
//! argument (default `/`), and prints the screen it leads to as JSON.

use tracing_subscriber::EnvFilter;

use bingo_app_lib::{Router, init_foundation, load_screen};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting bingo cards");
    let state = init_foundation()?;

    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let mut router = Router::new();
    let navigation = router.navigate(&path)?;
    if let Some(from) = &navigation.redirected_from {
        tracing::info!(from = %from, to = %navigation.path, "Redirected");
    }

    let screen = load_screen(&state, &navigation.route).await?;
    println!("{}", serde_json::to_string_pretty(&screen)?);
    Ok(())
}
