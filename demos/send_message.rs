use std::io;

use termii::{ApiKey, Channel, PhoneNumber, Recipient, SendMessage, SenderName, TermiiClient};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = required_env("TERMII_API_KEY")?;
    let to = required_env("TERMII_TO")?;
    let from = required_env("TERMII_FROM")?;

    let client = TermiiClient::new(ApiKey::new(api_key)?);
    let recipient = Recipient::from(PhoneNumber::parse(None, to)?);

    let request = SendMessage::new(recipient, SenderName::new(from)?, "Hello from termii")
        .channel(Channel::Generic);
    let sent = client.messages().send_message(request).await?;

    println!(
        "message_id: {:?}, message: {:?}, balance: {:?}",
        sent.message_id,
        sent.message,
        sent.balance.as_ref().map(|b| b.as_str())
    );

    Ok(())
}
