//! Transport layer: request descriptors and wire-format details (serialization/deserialization).

mod campaign;
mod descriptor;
mod envelope;
mod insights;
mod messaging;
mod phonebook;

pub use campaign::{encode_fetch_campaign_history, encode_fetch_campaigns, encode_send_campaign};
pub use descriptor::{Method, RequestDescriptor};
pub use envelope::{ResponseEnvelope, decode_envelope};
pub use insights::encode_get_balance;
pub use messaging::{
    encode_fetch_sender_ids, encode_request_sender_id, encode_send_bulk_message,
    encode_send_message, encode_send_with_number, encode_send_with_template,
};
pub use phonebook::{
    encode_create_contact, encode_create_phonebook, encode_delete_contact,
    encode_delete_phonebook, encode_fetch_contacts, encode_fetch_phonebooks,
    encode_update_phonebook,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to encode request body: {0}")]
    Json(#[from] serde_json::Error),
}
