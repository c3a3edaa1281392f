use std::io;

use termii::{ApiKey, CampaignId, TermiiClient};
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
    let campaign_id = std::env::var("TERMII_CAMPAIGN_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TERMII_CAMPAIGN_ID environment variable is required",
        )
    })?;

    let client = TermiiClient::new(ApiKey::new(api_key)?);
    let result = client
        .campaigns()
        .fetch_campaign_history(&CampaignId::new(campaign_id)?, None)
        .await;

    match result {
        Ok(history) => {
            for entry in history.history {
                println!(
                    "{:?} -> {:?}: {:?}",
                    entry.message_id, entry.receiver, entry.status
                );
            }
        }
        Err(err) if err.is_http() => {
            eprintln!("request rejected ({:?}): {}", err.status, err.message);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
