//! Resource handles: one per REST resource, each borrowing the client's shared executor.
//!
//! Every method builds one request, awaits one round trip and returns [`ApiResult`](crate::ApiResult).
//! List operations take an optional `page` which is passed through as-is.

mod campaigns;
mod contacts;
mod insights;
mod messages;
mod numbers;
mod phonebooks;
mod sender_ids;
mod templates;

pub use campaigns::Campaigns;
pub use contacts::Contacts;
pub use insights::Insights;
pub use messages::Messages;
pub use numbers::Numbers;
pub use phonebooks::Phonebooks;
pub use sender_ids::SenderIds;
pub use templates::Templates;
