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
    let page = std::env::var("TERMII_PAGE")
        .ok()
        .and_then(|value| value.parse::<u32>().ok());

    let client = TermiiClient::new(ApiKey::new(api_key)?);
    let phonebooks = client.phonebooks().fetch_phonebooks(page).await?;

    for phonebook in phonebooks {
        println!(
            "{}: {:?} ({:?} contacts)",
            phonebook.id, phonebook.name, phonebook.total_number_of_contacts
        );
    }

    Ok(())
}
