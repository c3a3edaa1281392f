//! Typed Rust client for the Termii messaging HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! request descriptors and wire-format details, a client layer that executes
//! descriptors, and resource handles grouping endpoints by REST resource.
//!
//! Every resource method returns [`ApiResult`]: the declared success value, or an
//! [`ErrorResult`] describing a transport failure, a non-2xx response, or a body
//! that did not have the expected shape.
//!
//! ```rust,no_run
//! use termii::{ApiKey, CampaignId, TermiiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TermiiClient::new(ApiKey::new("...")?);
//!     let campaign = CampaignId::new("C1")?;
//!     match client.campaigns().fetch_campaign_history(&campaign, None).await {
//!         Ok(history) => println!("{} deliveries", history.history.len()),
//!         Err(err) => eprintln!("{err} (status: {:?})", err.status),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod resources;
mod transport;

pub use client::{
    ApiResult, DEFAULT_BASE_URL, ErrorKind, ErrorResult, HttpRequest, HttpResponse,
    HttpTransport, TermiiClient, TermiiClientBuilder, TermiiError,
};
pub use domain::{
    ApiKey, Balance, Campaign, CampaignDispatch, CampaignHistory, CampaignHistoryEntry,
    CampaignId, CampaignType, Channel, Contact, ContactId, CreateContact, Media, MessageType,
    Money, PhoneNumber, Phonebook, PhonebookId, PhonebookPayload, Recipient, RequestSenderId,
    SendBulkMessage, SendCampaign, SendMessage, SendWithNumber, SendWithTemplate, SenderIdEntry,
    SenderName, SentMessage, StatusMessage, ValidationError,
};
pub use transport::{Method, RequestDescriptor, ResponseEnvelope};
