use std::io;

use termii::{ApiKey, TermiiClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("TERMII_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TERMII_API_KEY environment variable is required",
        )
    })?;

    let client = TermiiClient::new(ApiKey::new(api_key)?);
    let balance = client.insights().get_balance().await?;

    println!(
        "user: {:?}, balance: {} {}",
        balance.user,
        balance.balance.as_str(),
        balance.currency.as_deref().unwrap_or("")
    );

    Ok(())
}
